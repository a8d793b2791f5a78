//! Events delivered to the host application.
//!
//! - `PartnerEvent`: tagged union of every outcome the SDK reports
//! - `EventSink`: the single callback channel of a flow
//! - `AlertHandler`: error surface that logs and reports `SdkError`s

mod sink;
mod types;

// Re-export public API
pub use sink::{AlertHandler, EventSink};
pub use types::{LogEvent, PartnerEvent};
