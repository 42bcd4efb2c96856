//! Macro for declaring fixed code/name registries
//!
//! Every registry on the NiceHash API is a small integer code paired with a
//! canonical lowercase name. The integer is the stable identifier on the wire,
//! so generated enums (de)serialize as their code.

macro_rules! code_table {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($kind:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal => $str:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(into = "u8", try_from = "u8")]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $code,
            )+
        }

        impl $name {
            /// Every entry of the table, in code order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Integer code used on the wire
            pub const fn code(self) -> u8 {
                self as u8
            }

            /// Canonical lowercase name
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }

            /// Look up an entry by integer code
            pub fn from_code(code: u8) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Look up an entry by canonical name (exact, case-sensitive)
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($str => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::TypesError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::error::TypesError::UnknownName {
                    kind: $kind,
                    name: s.to_string(),
                })
            }
        }

        impl TryFrom<u8> for $name {
            type Error = $crate::error::TypesError;

            fn try_from(code: u8) -> Result<Self, Self::Error> {
                Self::from_code(code)
                    .ok_or($crate::error::TypesError::UnknownCode { kind: $kind, code })
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.code()
            }
        }
    };
}

pub(crate) use code_table;
