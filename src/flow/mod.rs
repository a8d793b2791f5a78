//! Response decoding and flow selection.
//!
//! Turns a raw transport response into the event the host renders: inline
//! placement content or an overlay popup model.

mod decode;
mod selector;

// Re-export public API
pub use decode::decode_json;
pub use selector::{select_presentation, Presentation};
