//! Protocol configuration adapters
//!
//! The protocol configuration is a JSON document shared by every worker.
//! The launcher only ever reads the scale parameter from it.

mod json_reader;

pub use json_reader::{JsonProtocolConfigReader, scale_from_value};
