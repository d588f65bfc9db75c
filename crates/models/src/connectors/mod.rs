//! The connector schema table.
//!
//! Every connector is a `XLinkedService { base, typeProperties }` pair whose
//! properties struct is plain data: `serde_json::Value` for fields that accept
//! either a literal or an ADF expression, [`SecretBase`](crate::SecretBase)
//! for secrets and open enums for closed-ish choices. The structs are declared
//! through [`connector!`] so each entry reads as a field list.

/// Declare a linked service struct over an existing `typeProperties` type.
macro_rules! linked_service {
    ($(#[$meta:meta])* $name:ident, $props:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            #[serde(flatten)]
            pub base: $crate::common::LinkedServiceBase,
            #[serde(rename = "typeProperties")]
            pub type_properties: $props,
        }

        impl $name {
            pub fn new(type_properties: $props) -> Self {
                Self { base: $crate::common::LinkedServiceBase::default(), type_properties }
            }

            pub fn with_base(mut self, base: $crate::common::LinkedServiceBase) -> Self {
                self.base = base;
                self
            }
        }
    };
}

/// Declare a linked service together with its `typeProperties` struct.
///
/// Fields under `required` are written as given; fields under `optional`
/// become `Option<T>`, default to `None` and are omitted when unset. A present
/// `null` on an optional `Value` field is kept as `Some(Value::Null)`. Names are
/// camelCased on the wire unless a field carries its own `rename`. Properties
/// without required fields also derive `Default`.
macro_rules! connector {
    (
        @emit [$($derive:ident)*]
        $(#[$meta:meta])*
        $name:ident => $props:ident {
            required { $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty ),* $(,)? }
            optional { $( $(#[$ometa:meta])* $ofield:ident : $oty:ty ),* $(,)? }
        }
    ) => {
        #[derive(Debug, Clone, PartialEq, $($derive,)* ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $props {
            $( $(#[$rmeta])* pub $rfield: $rty, )*
            $(
                $(#[$ometa])*
                #[serde(
                    default,
                    deserialize_with = "adf_core::field::present",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $ofield: Option<$oty>,
            )*
        }

        linked_service!($(#[$meta])* $name, $props);
    };
    (
        $(#[$meta:meta])*
        $name:ident => $props:ident { optional { $($optional:tt)* } }
    ) => {
        connector! {
            @emit [Default]
            $(#[$meta])*
            $name => $props { required {} optional { $($optional)* } }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident => $props:ident {
            required { $($required:tt)* }
            $( optional { $($optional:tt)* } )?
        }
    ) => {
        connector! {
            @emit []
            $(#[$meta])*
            $name => $props { required { $($required)* } optional { $($($optional)*)? } }
        }
    };
}

mod database;
mod services;
mod storage;

pub use database::*;
pub use services::*;
pub use storage::*;
