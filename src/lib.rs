//! ImageBench: load an image from disk or grab one webcam frame, then split
//! channels, crop, brighten or draw a line on it.
//!
//! The GUI lives in [`app`]; everything it does to the image goes through
//! [`session::ImageSession`], which has no GUI dependency.

pub mod app;
pub mod capture;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod io;
pub mod logger;
pub mod ops;
pub mod session;

pub use error::{CaptureError, EditError};
pub use session::{ImageSession, ImageSource, SessionView};
