//! Wheel archive reading

mod reader;

pub use reader::WheelReader;
pub use reader::extract_metadata;
