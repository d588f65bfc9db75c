/// Resource id parse failures. Every variant names the id kind and carries the
/// input so callers can render an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("cannot parse an empty string as a {id_kind} ID")]
    Empty { id_kind: &'static str },

    #[error("parsing {input:?} as a {id_kind} ID: the segment {segment:?} was not found (example: {example})")]
    SegmentNotSpecified {
        id_kind: &'static str,
        segment: &'static str,
        input: String,
        example: String,
    },

    #[error("parsing {input:?} as a {id_kind} ID: expected {expected:?} for segment {segment:?} but got {found:?}")]
    UnexpectedSegment {
        id_kind: &'static str,
        segment: &'static str,
        expected: &'static str,
        found: String,
        input: String,
    },

    #[error("parsing {input:?} as a {id_kind} ID: unexpected trailing segments {extra:?}")]
    TrailingSegments {
        id_kind: &'static str,
        extra: String,
        input: String,
    },
}

impl IdError {
    /// Name of the offending template segment, when there is one.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            IdError::SegmentNotSpecified { segment, .. } | IdError::UnexpectedSegment { segment, .. } => Some(segment),
            IdError::Empty { .. } | IdError::TrailingSegments { .. } => None,
        }
    }
}
