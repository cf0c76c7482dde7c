pub mod adjustments;
pub mod channels;
pub mod crop;
pub mod params;
pub mod shapes;

pub use channels::Channel;
pub use params::{CropRect, LineParams};
