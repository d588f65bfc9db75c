use std::collections::HashMap;

use crate::IdError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Fixed literal such as `resourceGroups`.
    Static,
    /// Fixed provider namespace such as `Microsoft.DataFactory`.
    ResourceProvider,
    SubscriptionId,
    ResourceGroup,
    /// A name chosen by the user (factory, linked service, ...).
    UserSpecified,
}

/// One position in an id template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub name: &'static str,
    pub kind: SegmentKind,
    /// The literal for static segments, an example value otherwise.
    pub value: &'static str,
}

impl Segment {
    pub const fn fixed(name: &'static str, literal: &'static str) -> Self {
        Self { name, kind: SegmentKind::Static, value: literal }
    }

    pub const fn provider(name: &'static str, literal: &'static str) -> Self {
        Self { name, kind: SegmentKind::ResourceProvider, value: literal }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self { name, kind: SegmentKind::SubscriptionId, value: "12345678-1234-9876-4563-123456789012" }
    }

    pub const fn resource_group(name: &'static str) -> Self {
        Self { name, kind: SegmentKind::ResourceGroup, value: "example-resource-group" }
    }

    pub const fn user_specified(name: &'static str, example: &'static str) -> Self {
        Self { name, kind: SegmentKind::UserSpecified, value: example }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind, SegmentKind::Static | SegmentKind::ResourceProvider)
    }
}

/// Named captures produced by [`parse_segments`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    pub id_kind: &'static str,
    pub input: String,
    pub example: String,
    parsed: HashMap<&'static str, String>,
}

impl ParseResult {
    pub fn get(&self, segment: &str) -> Option<&str> {
        self.parsed.get(segment).map(String::as_str)
    }

    /// Capture for `segment`, or the error naming it.
    pub fn require(&self, segment: &'static str) -> Result<String, IdError> {
        self.get(segment).map(str::to_owned).ok_or_else(|| IdError::SegmentNotSpecified {
            id_kind: self.id_kind,
            segment,
            input: self.input.clone(),
            example: self.example.clone(),
        })
    }
}

/// Render the template with example values, e.g. for error messages.
pub fn example_id(template: &[Segment]) -> String {
    let mut out = String::new();
    for s in template {
        out.push('/');
        out.push_str(s.value);
    }
    out
}

/// Walk `template` against `input`.
///
/// Static segments must equal their literal (ignoring ASCII case when
/// `insensitively` is set); named segments capture whatever non-empty value
/// sits in their position. Leading and trailing slashes are optional.
pub fn parse_segments(
    template: &'static [Segment],
    id_kind: &'static str,
    input: &str,
    insensitively: bool,
) -> Result<ParseResult, IdError> {
    if input.is_empty() {
        return Err(IdError::Empty { id_kind });
    }
    let trimmed = input.strip_prefix('/').unwrap_or(input);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    let parts: Vec<&str> = trimmed.split('/').collect();
    let example = example_id(template);

    let mut parsed = HashMap::with_capacity(template.len());
    for (i, segment) in template.iter().enumerate() {
        let part = match parts.get(i) {
            Some(p) if !p.is_empty() => *p,
            _ => {
                return Err(IdError::SegmentNotSpecified {
                    id_kind,
                    segment: segment.name,
                    input: input.to_owned(),
                    example,
                })
            }
        };
        if segment.is_static() {
            let matches = if insensitively {
                part.eq_ignore_ascii_case(segment.value)
            } else {
                part == segment.value
            };
            if !matches {
                return Err(IdError::UnexpectedSegment {
                    id_kind,
                    segment: segment.name,
                    expected: segment.value,
                    found: part.to_owned(),
                    input: input.to_owned(),
                });
            }
        } else {
            parsed.insert(segment.name, part.to_owned());
        }
    }

    if parts.len() > template.len() {
        return Err(IdError::TrailingSegments {
            id_kind,
            extra: parts[template.len()..].join("/"),
            input: input.to_owned(),
        });
    }

    Ok(ParseResult { id_kind, input: input.to_owned(), example, parsed })
}
