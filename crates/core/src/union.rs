//! Discriminated-union decoding.
//!
//! A union is a JSON object whose concrete schema is selected by one string
//! field (the discriminator). Decoding reads that field first, matches it
//! case-insensitively against the union's known kinds and only then commits to
//! a schema. Tags nobody registered are not an error: the object decodes into a
//! [`RawEnvelope`] that keeps every original field so it can be written back
//! unchanged.
//!
//! Unions are declared with [`discriminated_union!`](crate::discriminated_union);
//! the helpers below are what the generated code calls.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::DecodeError;

/// Base for unions whose variants share nothing besides the discriminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoCommonFields {}

/// Fallback for a discriminator value the client does not model.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEnvelope<B> {
    /// Discriminator value exactly as received (empty when absent).
    pub tag: String,
    /// Fields shared by every variant of the union.
    pub base: B,
    /// The complete original object, discriminator included.
    pub values: Map<String, Value>,
}

impl<B> RawEnvelope<B> {
    /// Re-emit the preserved object. The discriminator is only rewritten when
    /// `tag` was changed after decoding.
    pub fn to_value(&self, tag_field: &str) -> Value {
        let mut values = self.values.clone();
        if !self.tag.is_empty() && tag_value(&values, tag_field).as_deref() != Some(self.tag.as_str()) {
            values.insert(tag_field.to_owned(), Value::String(self.tag.clone()));
        }
        Value::Object(values)
    }
}

/// Read the discriminator. Non-string values are stringified as compact JSON.
pub fn tag_value(object: &Map<String, Value>, field: &str) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn into_object(value: Value, target: &'static str) -> Result<Map<String, Value>, DecodeError> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(DecodeError::NotAnObject { target }),
    }
}

/// Decode a known variant from the whole object.
pub fn decode_variant<T>(object: Map<String, Value>, target: &'static str) -> Result<T, DecodeError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(Value::Object(object)).map_err(|source| DecodeError::Json { target, source })
}

/// Decode the shared fields and keep the rest untouched.
pub fn decode_fallback<B>(
    tag: String,
    object: Map<String, Value>,
    target: &'static str,
) -> Result<RawEnvelope<B>, DecodeError>
where
    B: DeserializeOwned,
{
    debug!(union = target, tag = %tag, "unrecognised discriminator; keeping raw fields");
    let base = serde_json::from_value(Value::Object(object.clone()))
        .map_err(|source| DecodeError::Json { target, source })?;
    Ok(RawEnvelope { tag, base, values: object })
}

/// Serialize `variant` and force the discriminator to `tag`, whatever the
/// variant's own fields contained.
pub fn encode_tagged<T>(variant: &T, field: &str, tag: &str) -> Result<Value, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut object = match serde_json::to_value(variant)? {
        Value::Object(object) => object,
        other => {
            return Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "variant {tag} must serialize to a JSON object, got {other}"
            )))
        }
    };
    object.insert(field.to_owned(), Value::String(tag.to_owned()));
    Ok(Value::Object(object))
}

/// Declare a discriminated union.
///
/// Generates the union enum (one tuple variant per registered tag plus
/// `Unknown`), an [`open_enum!`](crate::open_enum) of its kinds that serves as
/// the case-insensitive registry, serde impls and `From` conversions for each
/// variant type.
///
/// ```
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// pub struct Circle { pub radius: f64 }
///
/// #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// pub struct Square { pub side: f64 }
///
/// adf_core::discriminated_union! {
///     pub enum Shape {
///         tag: "kind",
///         kinds: ShapeKind,
///         base: adf_core::NoCommonFields,
///         variants: {
///             Circle(Circle) => "Circle",
///             Square(Square) => "Square",
///         }
///     }
/// }
///
/// let shape: Shape = serde_json::from_str(r#"{"kind":"circle","radius":2.0}"#).unwrap();
/// assert_eq!(shape, Shape::Circle(Circle { radius: 2.0 }));
/// assert_eq!(serde_json::to_value(&shape).unwrap()["kind"], "Circle");
/// ```
#[macro_export]
macro_rules! discriminated_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            tag: $field:literal,
            kinds: $kind:ident,
            base: $base:ty,
            variants: {
                $( $(#[$vmeta:meta])* $variant:ident($ty:ty) => $lit:literal ),+ $(,)?
            } $(,)?
        }
    ) => {
        $crate::open_enum! {
            #[doc = concat!("Discriminator values registered for [`", stringify!($name), "`].")]
            $vis enum $kind {
                $( $variant => $lit ),+
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($ty), )+
            /// A discriminator value this crate does not model. Shared fields
            /// are decoded into `base`; `values` keeps the whole object.
            Unknown($crate::union::RawEnvelope<$base>),
        }

        impl $name {
            /// JSON field carrying the discriminator.
            pub const TAG_FIELD: &'static str = $field;

            /// Discriminator written on the wire for this value.
            pub fn tag(&self) -> &str {
                match self {
                    $( $name::$variant(_) => $lit, )+
                    $name::Unknown(raw) => raw.tag.as_str(),
                }
            }

            pub fn kind(&self) -> $kind {
                match self {
                    $( $name::$variant(_) => $kind::$variant, )+
                    $name::Unknown(raw) => $kind::parse(&raw.tag),
                }
            }

            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }

            pub fn from_value(
                value: $crate::__private::serde_json::Value,
            ) -> ::std::result::Result<Self, $crate::DecodeError> {
                let object = $crate::union::into_object(value, stringify!($name))?;
                let tag = $crate::union::tag_value(&object, $field).unwrap_or_default();
                match $kind::parse(&tag) {
                    $(
                        $kind::$variant => $crate::union::decode_variant(
                            object,
                            concat!(stringify!($name), "::", stringify!($variant)),
                        )
                        .map($name::$variant),
                    )+
                    $kind::Unrecognized(tag) => {
                        $crate::union::decode_fallback(tag, object, stringify!($name)).map($name::Unknown)
                    }
                }
            }

            pub fn to_value(
                &self,
            ) -> ::std::result::Result<$crate::__private::serde_json::Value, $crate::__private::serde_json::Error> {
                match self {
                    $( $name::$variant(variant) => $crate::union::encode_tagged(variant, $field, $lit), )+
                    $name::Unknown(raw) => Ok(raw.to_value($field)),
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                let value = self
                    .to_value()
                    .map_err(<S::Error as $crate::__private::serde::ser::Error>::custom)?;
                $crate::__private::serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <$crate::__private::serde_json::Value as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                $name::from_value(value).map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(variant: $ty) -> Self {
                    $name::$variant(variant)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tag_value_stringifies_non_strings() {
        let object = into_object(json!({"type": 7}), "t").unwrap();
        assert_eq!(tag_value(&object, "type").as_deref(), Some("7"));
        assert_eq!(tag_value(&object, "missing"), None);
    }

    #[test]
    fn encode_tagged_overwrites_existing_tag() {
        let v = encode_tagged(&json!({"type": "wrong", "a": 1}), "type", "Right").unwrap();
        assert_eq!(v, json!({"type": "Right", "a": 1}));
    }

    #[test]
    fn encode_tagged_rejects_non_objects() {
        assert!(encode_tagged(&json!([1, 2]), "type", "X").is_err());
    }

    #[test]
    fn envelope_keeps_non_string_tag_as_is() {
        let values = into_object(json!({"type": 5, "x": true}), "t").unwrap();
        let raw = RawEnvelope { tag: "5".to_string(), base: NoCommonFields {}, values };
        assert_eq!(raw.to_value("type"), json!({"type": 5, "x": true}));
    }
}
