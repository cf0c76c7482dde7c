use std::path::PathBuf;

/// Failure of a single editing operation.
///
/// `Display` is the exact text shown in the error dialog.
#[derive(thiserror::Error, Debug)]
pub enum EditError {
    #[error("No image loaded.")]
    NoImage,

    #[error("No channel selected.")]
    NoChannelSelected,

    #[error("Invalid coordinates.")]
    InvalidCoordinates,

    #[error("Invalid brightness value.")]
    InvalidBrightness,

    #[error("Invalid line parameters.")]
    InvalidLineParameters,

    #[error("Could not open image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image is too large to display ({width}x{height}, limit {max} px per side).")]
    TooLargeToDisplay { width: u32, height: u32, max: usize },

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

/// Webcam acquisition failure.
#[derive(thiserror::Error, Debug)]
pub enum CaptureError {
    #[error("Could not open webcam.")]
    Open(String),

    #[error("Failed to capture image from webcam.")]
    Frame(String),
}

impl CaptureError {
    /// Underlying device / driver message, for the log.
    pub fn detail(&self) -> &str {
        match self {
            CaptureError::Open(d) | CaptureError::Frame(d) => d,
        }
    }
}

pub type EditResult<T> = Result<T, EditError>;
