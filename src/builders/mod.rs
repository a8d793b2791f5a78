//! Request builders.
//!
//! Pure functions from host configuration to wire request bodies. No I/O and
//! no hidden state; every call returns a fresh request.

mod placement;
mod rtps;

pub use placement::PlacementRequestBuilder;
pub use rtps::RtpsRequestBuilder;
