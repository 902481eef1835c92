//! Observes struct packing: a packed record embedding a two-byte record,
//! with its field offsets and live addresses checked for gaps.

pub mod error;
pub mod layout;
pub mod report;

pub use error::{LayoutError, ProbeError};
pub use layout::{field_spans, verify, Addresses, FieldSpan, Packed, Pair};
pub use report::{render, LayoutReport};
