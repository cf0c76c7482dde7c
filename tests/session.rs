use image::{Rgba, RgbaImage};
use imagebench::capture::FrameGrabber;
use imagebench::ops::Channel;
use imagebench::ops::shapes::LINE_GREEN;
use imagebench::{CaptureError, EditError, ImageSession, ImageSource, SessionView};

fn session_with(img: RgbaImage) -> ImageSession {
    let mut s = ImageSession::new();
    s.set_image(img, ImageSource::Memory);
    s
}

fn checker(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([200, 100, 50, 255])
        } else {
            Rgba([20, 40, 60, 255])
        }
    })
}

struct ScriptedCamera {
    frames: Vec<Result<RgbaImage, CaptureError>>,
}

impl FrameGrabber for ScriptedCamera {
    fn grab_frame(&mut self) -> Result<RgbaImage, CaptureError> {
        self.frames.remove(0)
    }

    fn device_index(&self) -> u32 {
        7
    }
}

#[test]
fn operations_need_an_image() {
    let mut s = ImageSession::new();
    assert!(matches!(s.show_channel(Some(Channel::Red)), Err(EditError::NoImage)));
    assert!(matches!(s.crop_from_str("10,10,50,50"), Err(EditError::NoImage)));
    assert!(matches!(s.enhance_brightness_from_str("2"), Err(EditError::NoImage)));
    assert!(matches!(s.draw_line_from_str("0,0,5,5,1", LINE_GREEN), Err(EditError::NoImage)));
    assert!(!s.has_image());
    assert_eq!(s.generation(), 0);
}

#[test]
fn no_image_wins_over_bad_input() {
    let mut s = ImageSession::new();
    assert!(matches!(s.crop_from_str("garbage"), Err(EditError::NoImage)));
}

#[test]
fn malformed_input_leaves_image_untouched() {
    let original = checker(30, 30);
    let mut s = session_with(original.clone());
    let generation = s.generation();

    assert!(matches!(s.crop_from_str("1,2,3"), Err(EditError::InvalidCoordinates)));
    assert!(matches!(s.crop_from_str("20,20,10,10"), Err(EditError::InvalidCoordinates)));
    assert!(matches!(s.enhance_brightness_from_str("very"), Err(EditError::InvalidBrightness)));
    assert!(matches!(
        s.draw_line_from_str("0,0,10,10,wide", LINE_GREEN),
        Err(EditError::InvalidLineParameters)
    ));

    assert_eq!(s.current(), Some(&original));
    assert_eq!(s.generation(), generation);
}

#[test]
fn crop_100_by_100_to_40_by_40() {
    let mut s = session_with(checker(100, 100));
    s.crop_from_str("10,10,50,50").unwrap();
    let img = s.current().unwrap();
    assert_eq!(img.dimensions(), (40, 40));
    // (10,10) had even parity in the source
    assert_eq!(*img.get_pixel(0, 0), Rgba([200, 100, 50, 255]));
}

#[test]
fn oversized_or_overflowing_crop_is_rejected() {
    let mut s = session_with(checker(100, 100));
    let gen_before = s.generation();
    for input in [
        "0,0,100000,100000",
        "-9223372036854775808,0,9223372036854775807,1",
        "0,0,4294967296,1",
    ] {
        assert!(
            matches!(s.crop_from_str(input), Err(EditError::InvalidCoordinates)),
            "{input}"
        );
    }
    assert_eq!(s.generation(), gen_before);
    assert_eq!(s.current().unwrap(), &checker(100, 100));
}

#[test]
fn crop_may_extend_past_edges_within_limit() {
    let mut s = session_with(checker(10, 10));
    s.crop_from_str("-5,-5,15,15").unwrap();
    let img = s.current().unwrap();
    assert_eq!(img.dimensions(), (20, 20));
    assert_eq!(*img.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(*img.get_pixel(5, 5), Rgba([200, 100, 50, 255]));
}

#[test]
fn brightness_halving_truncates() {
    let mut s = session_with(RgbaImage::from_pixel(2, 2, Rgba([101, 3, 255, 255])));
    s.enhance_brightness_from_str("0.5").unwrap();
    assert!(
        s.current()
            .unwrap()
            .pixels()
            .all(|p| *p == Rgba([50, 1, 127, 255]))
    );
}

#[test]
fn brightness_scales_the_current_image() {
    let mut s = session_with(RgbaImage::from_pixel(4, 4, Rgba([100, 50, 200, 255])));
    s.enhance_brightness_from_str("1.5").unwrap();
    assert!(
        s.current()
            .unwrap()
            .pixels()
            .all(|p| *p == Rgba([150, 75, 255, 255]))
    );
}

#[test]
fn line_is_drawn_in_place() {
    let mut s = session_with(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255])));
    s.draw_line_from_str("0,0,9,0,1", LINE_GREEN).unwrap();
    let img = s.current().unwrap();
    assert_eq!(img.dimensions(), (10, 10));
    assert!((0..10).all(|x| *img.get_pixel(x, 0) == LINE_GREEN));
    assert_eq!(*img.get_pixel(0, 1), Rgba([0, 0, 0, 255]));
}

#[test]
fn negative_line_width_draws_thin_line() {
    let mut s = session_with(RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255])));
    s.draw_line_from_str("0,0,9,0,-1", LINE_GREEN).unwrap();
    let img = s.current().unwrap();
    assert!((0..10).all(|x| *img.get_pixel(x, 0) == LINE_GREEN));
    assert_eq!(*img.get_pixel(5, 1), Rgba([0, 0, 0, 255]));
}

#[test]
fn channel_view_is_display_only() {
    let original = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 255]));
    let mut s = session_with(original.clone());

    assert!(matches!(s.show_channel(None), Err(EditError::NoChannelSelected)));
    assert_eq!(s.view(), SessionView::Full);

    s.show_channel(Some(Channel::Green)).unwrap();
    assert_eq!(s.view(), SessionView::Channel(Channel::Green));
    let shown = s.view_image().unwrap();
    assert!(shown.pixels().all(|p| *p == Rgba([20, 20, 20, 255])));
    drop(shown);
    assert_eq!(s.current(), Some(&original));

    // The next edit works on the colour image and returns to the full view
    s.enhance_brightness(1.0).unwrap();
    assert_eq!(s.view(), SessionView::Full);
    assert_eq!(s.current(), Some(&original));
}

#[test]
fn capture_replaces_image_and_records_device() {
    let mut cam = ScriptedCamera {
        frames: vec![
            Ok(RgbaImage::from_pixel(8, 6, Rgba([1, 2, 3, 255]))),
            Err(CaptureError::Frame("timeout".to_string())),
        ],
    };
    let mut s = session_with(checker(2, 2));

    s.capture(&mut cam).unwrap();
    assert_eq!(s.current().unwrap().dimensions(), (8, 6));
    assert_eq!(s.source(), Some(&ImageSource::Webcam(7)));

    let err = s.capture(&mut cam).unwrap_err();
    assert_eq!(err.to_string(), "Failed to capture image from webcam.");
    assert_eq!(s.current().unwrap().dimensions(), (8, 6));
}

#[test]
fn load_file_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!("imagebench_load_{}.png", std::process::id()));
    checker(12, 7).save(&path).unwrap();

    let mut s = ImageSession::new();
    s.load_file(&path).unwrap();
    assert_eq!(s.current().unwrap().dimensions(), (12, 7));
    assert_eq!(s.source(), Some(&ImageSource::File(path.clone())));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn failed_load_keeps_previous_image() {
    let mut s = session_with(checker(5, 5));
    let err = s.load_file(std::path::Path::new("/no/such/image.png")).unwrap_err();
    assert!(matches!(err, EditError::Load { .. }));
    assert_eq!(s.current().unwrap().dimensions(), (5, 5));
    assert_eq!(s.source(), Some(&ImageSource::Memory));
}
