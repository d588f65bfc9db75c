//! Open-world string enums.
//!
//! The service treats most of its string enums as advisory: it may start
//! returning a value before the client knows about it. Enums declared with
//! [`open_enum!`](crate::open_enum) therefore never fail to parse. Known values
//! are matched case-insensitively and normalised to their canonical spelling,
//! anything else lands in `Unrecognized` with the input kept byte for byte.

/// Behaviour shared by every enum generated with [`open_enum!`](crate::open_enum).
pub trait OpenEnum: Sized + Clone {
    /// Parse `input`, matching known values case-insensitively. Never fails.
    fn parse(input: &str) -> Self;

    /// Canonical wire form for known values, the original input otherwise.
    fn as_str(&self) -> &str;

    /// `false` for values carried through `Unrecognized`.
    fn is_known(&self) -> bool;

    /// Canonical spelling of every known value, in declaration order.
    fn possible_values() -> &'static [&'static str];
}

/// Declare an open-world string enum.
///
/// ```
/// adf_core::open_enum! {
///     /// How a SQL Server connection authenticates.
///     pub enum SqlServerAuthenticationType {
///         Sql => "SQL",
///         Windows => "Windows",
///     }
/// }
///
/// assert_eq!(SqlServerAuthenticationType::parse("sql"), SqlServerAuthenticationType::Sql);
/// assert_eq!(SqlServerAuthenticationType::parse("sql").as_str(), "SQL");
/// assert_eq!(SqlServerAuthenticationType::parse("Kerberos").as_str(), "Kerberos");
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value this version of the crate does not know, kept exactly as received.
            Unrecognized(::std::string::String),
        }

        impl $name {
            const KNOWN: &'static [&'static str] = &[ $( $lit ),+ ];

            /// Case-insensitive parse. Unknown input is preserved verbatim.
            pub fn parse(input: &str) -> Self {
                static LOOKUP: $crate::__private::Lazy<
                    $crate::__private::HashMap<::std::string::String, $name>,
                > = $crate::__private::Lazy::new(|| {
                    let mut table = $crate::__private::HashMap::new();
                    $( table.insert($lit.to_lowercase(), $name::$variant); )+
                    table
                });
                match LOOKUP.get(&input.to_lowercase()) {
                    Some(known) => known.clone(),
                    None => $name::Unrecognized(input.to_owned()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $lit, )+
                    $name::Unrecognized(raw) => raw.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unrecognized(_))
            }

            pub fn possible_values() -> &'static [&'static str] {
                Self::KNOWN
            }
        }

        impl $crate::enums::OpenEnum for $name {
            fn parse(input: &str) -> Self {
                $name::parse(input)
            }

            fn as_str(&self) -> &str {
                $name::as_str(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }

            fn possible_values() -> &'static [&'static str] {
                $name::possible_values()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok($name::parse(s))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::parse(s)
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(s: ::std::string::String) -> Self {
                $name::parse(&s)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::parse(&raw))
            }
        }
    };
}
