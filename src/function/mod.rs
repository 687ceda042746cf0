//! Image decoding and conversion.

pub mod convert;
pub mod decode;

pub use convert::*;
pub use decode::*;
