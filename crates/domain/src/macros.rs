//! Macro for implementing Display and FromStr for status enums
//!
//! Status enums such as [`crate::FlagState`] travel as lowercase strings in
//! history entries and request bodies. This macro provides both conversions
//! from a single variant table.
//!
//! # Example
//!
//! ```rust
//! use flagdesk_domain::impl_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum ReviewStatus {
//!     Pending,
//!     Done,
//! }
//!
//! impl_status_conversions!(ReviewStatus {
//!     Pending => "pending",
//!     Done => "done",
//! });
//!
//! assert_eq!(ReviewStatus::Done.to_string(), "done");
//! assert_eq!("PENDING".parse::<ReviewStatus>(), Ok(ReviewStatus::Pending));
//! ```

/// Implements Display and FromStr traits for status enums
///
/// Parsing is case-insensitive; display is always the canonical lowercase
/// string.
#[macro_export]
macro_rules! impl_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
