//! Font handling for the device command stream.
//!
//! - [`classifier`]: maps document fonts to built-in device fonts and styles
//! - [`encoding`]: folds glyph Unicode values into the device's 7-bit set

pub mod classifier;
pub mod encoding;

pub use classifier::{classify, DeviceFont, DeviceFontCode, FontDescriptor, StyleModifier};
pub use encoding::map_to_ascii7;
