//! ARM resource identifiers for Data Factory.
//!
//! An id is a fixed template of alternating static and named segments:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}
//!     /providers/Microsoft.DataFactory/factories/{factoryName}
//!     /linkedServices/{linkedServiceName}
//! ```
//!
//! Templates are plain data ([`Segment`] slices); [`parse_segments`] walks one
//! against an input path and [`ResourceId`] turns the captures into a typed id.

#![forbid(unsafe_code)]

mod error;
mod factory;
mod linked_service;
mod segment;

pub use error::IdError;
pub use factory::FactoryId;
pub use linked_service::LinkedServiceId;
pub use segment::{example_id, parse_segments, ParseResult, Segment, SegmentKind};

pub mod prelude {
    pub use super::{FactoryId, IdError, LinkedServiceId, ResourceId};
}

/// A typed ARM id backed by a static segment template.
pub trait ResourceId: Sized {
    /// Human-readable name used in errors, e.g. `"Linked Service"`.
    const KIND: &'static str;

    fn segments() -> &'static [Segment];

    /// Build the id from parser captures.
    fn from_parse_result(result: &ParseResult) -> Result<Self, IdError>;

    /// Canonical ARM path.
    fn id(&self) -> String;

    /// Parse with case-sensitive static segments. Use for user input.
    fn parse(input: &str) -> Result<Self, IdError> {
        let result = parse_segments(Self::segments(), Self::KIND, input, false)?;
        Self::from_parse_result(&result)
    }

    /// Parse with case-insensitive static segments. Use for ids returned by the service.
    fn parse_insensitively(input: &str) -> Result<Self, IdError> {
        let result = parse_segments(Self::segments(), Self::KIND, input, true)?;
        Self::from_parse_result(&result)
    }

    fn validate(input: &str) -> Result<(), IdError> {
        Self::parse(input).map(|_| ())
    }

    /// One line per segment, for help text and error reports.
    fn segments_description() -> String {
        let mut lines = Vec::with_capacity(Self::segments().len());
        for s in Self::segments() {
            let line = match s.kind {
                SegmentKind::Static | SegmentKind::ResourceProvider => {
                    format!("  {}: literal {:?}", s.name, s.value)
                }
                _ => format!("  {}: e.g. {:?}", s.name, s.value),
            };
            lines.push(line);
        }
        lines.join("\n")
    }
}
