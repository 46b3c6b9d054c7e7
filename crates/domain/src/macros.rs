//! Macro for implementing Display and FromStr for wire-name enums
//!
//! Generates both conversions from a single variant-to-string table so the
//! printed form and the accepted form never drift apart.
//!
//! # Example
//!
//! ```rust
//! use papertrail_domain::impl_wire_name_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Verb {
//!     Get,
//!     Post,
//! }
//!
//! impl_wire_name_conversions!(Verb {
//!     Get => "GET",
//!     Post => "POST",
//! });
//!
//! assert_eq!(Verb::Get.to_string(), "GET");
//! assert_eq!("post".parse::<Verb>(), Ok(Verb::Post));
//! ```

/// Implements Display and FromStr traits for wire-name enums
///
/// - Display writes the wire name exactly as given
/// - FromStr matches case-insensitively and reports the enum name on failure
#[macro_export]
macro_rules! impl_wire_name_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl ::std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
                }
            }
        }

        impl ::std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestVerb {
        Get,
        Delete,
    }

    impl_wire_name_conversions!(TestVerb {
        Get => "GET",
        Delete => "DELETE",
    });

    #[test]
    fn test_display_uses_wire_name() {
        assert_eq!(TestVerb::Get.to_string(), "GET");
        assert_eq!(TestVerb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestVerb::from_str("get").unwrap(), TestVerb::Get);
        assert_eq!(TestVerb::from_str("DeLeTe").unwrap(), TestVerb::Delete);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestVerb::from_str("PATCH");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestVerb: PATCH"));
    }
}
