//! Core building blocks shared by the linked services client: open-world
//! enums, the discriminated-union decoder and its error type.

#![forbid(unsafe_code)]

pub mod enums;
pub mod error;
pub mod field;
pub mod union;

pub use enums::OpenEnum;
pub use error::DecodeError;
pub use union::{NoCommonFields, RawEnvelope};

pub mod prelude {
    pub use super::{DecodeError, NoCommonFields, OpenEnum, RawEnvelope};
}

// Paths used by the exported macros; not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
    pub use serde;
    pub use serde_json;
    pub use std::collections::HashMap;
}
