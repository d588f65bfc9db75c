/// Errors raised while decoding a discriminated union or one of its variants.
///
/// `target` names the union or `Union::Variant` being decoded so a failure deep
/// inside a response body can be traced back to the schema that rejected it.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("decoding {target}: expected a JSON object")]
    NotAnObject { target: &'static str },
    #[error("decoding {target}: {source}")]
    Json {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    pub fn target(&self) -> &'static str {
        match self {
            DecodeError::NotAnObject { target } | DecodeError::Json { target, .. } => target,
        }
    }
}
