// ============================================================================
// PARAMETER PARSING — text typed into the input dialogs
// ============================================================================
//
// Every prompt takes a comma-separated list of integers (or a single float).
// Surrounding whitespace around each field is accepted; anything else is
// rejected with the operation's own error so the caller can show it.
// ============================================================================

use crate::error::{EditError, EditResult};

/// Crop box in source-image pixel coordinates. The origin may lie outside
/// the image; the size is always non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    /// Box spanning `x1..x2` by `y1..y2`. None when empty, inverted, or
    /// wider/taller than `u32::MAX`.
    pub fn from_corners(x1: i64, y1: i64, x2: i64, y2: i64) -> Option<Self> {
        let width = u32::try_from(x2.checked_sub(x1)?).ok()?;
        let height = u32::try_from(y2.checked_sub(y1)?).ok()?;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { x: x1, y: y1, width, height })
    }
}

/// Line segment endpoints plus stroke width, in image pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineParams {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub width: u32,
}

/// Split `input` on commas and parse exactly `N` integers.
fn parse_ints<const N: usize>(input: &str) -> Option<[i64; N]> {
    let mut out = [0i64; N];
    let mut fields = input.split(',');
    for slot in out.iter_mut() {
        *slot = fields.next()?.trim().parse().ok()?;
    }
    if fields.next().is_some() {
        return None;
    }
    Some(out)
}

/// Parse `"x1,y1,x2,y2"`. Empty, inverted or overflowing boxes are rejected.
pub fn parse_crop_rect(input: &str) -> EditResult<CropRect> {
    let [x1, y1, x2, y2] = parse_ints::<4>(input).ok_or(EditError::InvalidCoordinates)?;
    CropRect::from_corners(x1, y1, x2, y2).ok_or(EditError::InvalidCoordinates)
}

/// Parse a single finite brightness factor.
pub fn parse_brightness(input: &str) -> EditResult<f32> {
    let value: f32 = input
        .trim()
        .parse()
        .map_err(|_| EditError::InvalidBrightness)?;
    if !value.is_finite() {
        return Err(EditError::InvalidBrightness);
    }
    Ok(value)
}

/// Parse `"x1,y1,x2,y2,width"`. Negative widths count as 0 (a thin line).
pub fn parse_line_params(input: &str) -> EditResult<LineParams> {
    let [x1, y1, x2, y2, width] =
        parse_ints::<5>(input).ok_or(EditError::InvalidLineParameters)?;
    let coord = |v: i64| i32::try_from(v).map_err(|_| EditError::InvalidLineParameters);
    let width = u32::try_from(width.max(0)).map_err(|_| EditError::InvalidLineParameters)?;
    Ok(LineParams {
        x1: coord(x1)?,
        y1: coord(y1)?,
        x2: coord(x2)?,
        y2: coord(y2)?,
        width,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_rect_accepts_spaces() {
        let r = parse_crop_rect(" 10, 10 ,50,50 ").unwrap();
        assert_eq!(r, CropRect { x: 10, y: 10, width: 40, height: 40 });
    }

    #[test]
    fn crop_rect_rejects_malformed() {
        for bad in ["", "10,10,50", "10,10,50,50,1", "a,b,c,d", "10;10;50;50", "1.5,0,4,4"] {
            assert!(
                matches!(parse_crop_rect(bad), Err(EditError::InvalidCoordinates)),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn crop_rect_rejects_inverted_and_empty() {
        assert!(parse_crop_rect("50,50,10,10").is_err());
        assert!(parse_crop_rect("10,10,10,50").is_err());
    }

    #[test]
    fn crop_rect_allows_negative_origin() {
        let r = parse_crop_rect("-5,-5,5,5").unwrap();
        assert_eq!(r, CropRect { x: -5, y: -5, width: 10, height: 10 });
    }

    #[test]
    fn crop_rect_rejects_overflowing_spans() {
        for bad in [
            "-9223372036854775808,0,9223372036854775807,1",
            "0,-9223372036854775808,1,9223372036854775807",
            "0,0,4294967296,1",
            "0,0,1,4294967296",
        ] {
            assert!(
                matches!(parse_crop_rect(bad), Err(EditError::InvalidCoordinates)),
                "accepted {bad:?}"
            );
        }
        let widest = parse_crop_rect("0,0,4294967295,1").unwrap();
        assert_eq!(widest.width, u32::MAX);
    }

    #[test]
    fn brightness_parsing() {
        assert_eq!(parse_brightness("1.5").unwrap(), 1.5);
        assert_eq!(parse_brightness(" 2 ").unwrap(), 2.0);
        assert!(parse_brightness("bright").is_err());
        assert!(parse_brightness("NaN").is_err());
        assert!(parse_brightness("inf").is_err());
        assert!(parse_brightness("").is_err());
    }

    #[test]
    fn line_params_parsing() {
        let p = parse_line_params("0,0,99,99,3").unwrap();
        assert_eq!(p, LineParams { x1: 0, y1: 0, x2: 99, y2: 99, width: 3 });
        assert!(parse_line_params("0,0,99,99").is_err());
        assert_eq!(parse_line_params("0,0,9,9,-1").unwrap().width, 0);
        assert_eq!(parse_line_params("0,0,9,9,-20").unwrap().width, 0);
        assert!(parse_line_params("0,0,99,99,x").is_err());
        assert!(parse_line_params("0,0,99999999999,0,1").is_err());
    }
}
