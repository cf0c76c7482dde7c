// ============================================================================
// CHANNEL SPLIT — single colour plane as a grey-scale image
// ============================================================================

use image::{GrayImage, Luma, RgbaImage};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Red => "Red",
            Channel::Green => "Green",
            Channel::Blue => "Blue",
        }
    }

    pub fn all() -> &'static [Channel] {
        &[Channel::Red, Channel::Green, Channel::Blue]
    }

    /// Sample index inside an `Rgba<u8>` pixel.
    fn index(&self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Extract one channel's intensity plane.
pub fn extract_channel(img: &RgbaImage, channel: Channel) -> GrayImage {
    let idx = channel.index();
    GrayImage::from_fn(img.width(), img.height(), |x, y| {
        Luma([img.get_pixel(x, y)[idx]])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn extracts_each_plane() {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]));
        let r = extract_channel(&img, Channel::Red);
        let g = extract_channel(&img, Channel::Green);
        let b = extract_channel(&img, Channel::Blue);
        assert_eq!(r.dimensions(), (3, 2));
        assert!(r.pixels().all(|p| p[0] == 10));
        assert!(g.pixels().all(|p| p[0] == 20));
        assert!(b.pixels().all(|p| p[0] == 30));
    }

    #[test]
    fn alpha_is_ignored() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([200, 0, 0, 0]));
        assert_eq!(extract_channel(&img, Channel::Red).get_pixel(0, 0)[0], 200);
    }
}
