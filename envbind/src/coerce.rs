//! Coercion of resolved literals into field values

use std::fmt;
use std::str::FromStr;

/// Coercion rule applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Literal assigned verbatim
    Text,
    /// Base-10 signed integer of the field's width
    Integer,
    /// Exactly `true` or `false`
    Boolean,
    /// Decimal or exponential floating-point literal
    Float,
    /// `;`-separated sequence of text
    TextSequence,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Float => "floating-point",
            Self::TextSequence => "sequence of text",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Types a resolved literal can be coerced into.
///
/// Sealed: the set of coercion rules is fixed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be coerced from a directive literal",
    note = "supported field types are String, bool, integers, floats and Vec<String>; add record fields with Fields::record"
)]
pub trait FromLiteral: Sized + sealed::Sealed {
    /// Rule used for this type
    const KIND: FieldKind;

    /// Coerce `literal`, returning the parser's message on failure.
    fn from_literal(literal: &str) -> Result<Self, String>;
}

impl sealed::Sealed for String {}

impl FromLiteral for String {
    const KIND: FieldKind = FieldKind::Text;

    fn from_literal(literal: &str) -> Result<Self, String> {
        Ok(literal.to_string())
    }
}

impl sealed::Sealed for Vec<String> {}

impl FromLiteral for Vec<String> {
    const KIND: FieldKind = FieldKind::TextSequence;

    fn from_literal(literal: &str) -> Result<Self, String> {
        Ok(literal.split(';').map(str::to_string).collect())
    }
}

/// Parse with `FromStr`, which already rejects whitespace, stray characters
/// and out-of-range values for every type listed here.
fn parse<T>(literal: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    literal.parse::<T>().map_err(|e| e.to_string())
}

/// Base-10 integer: an optional `-` and digits. `FromStr` would also take
/// a leading `+`.
fn parse_integer<T>(literal: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    if literal.starts_with('+') {
        return Err("a leading '+' is not accepted".to_string());
    }
    parse(literal)
}

macro_rules! impl_from_literal {
    ($kind:ident => $parse:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FromLiteral for $ty {
                const KIND: FieldKind = FieldKind::$kind;

                fn from_literal(literal: &str) -> Result<Self, String> {
                    $parse(literal)
                }
            }
        )+
    };
}

impl_from_literal!(Integer => parse_integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_literal!(Float => parse: f32, f64);
impl_from_literal!(Boolean => parse: bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_verbatim() {
        assert_eq!(String::from_literal(" spaced, value ").unwrap(), " spaced, value ");
        assert_eq!(String::from_literal("").unwrap(), "");
    }

    #[test]
    fn test_integer() {
        assert_eq!(i64::from_literal("42").unwrap(), 42);
        assert_eq!(i64::from_literal("-17").unwrap(), -17);
        assert_eq!(u16::from_literal("8080").unwrap(), 8080);
    }

    #[test]
    fn test_integer_rejects_malformed() {
        assert!(i64::from_literal("").is_err());
        assert!(i64::from_literal("12abc").is_err());
        assert!(i64::from_literal(" 12").is_err());
        assert!(i64::from_literal("12 ").is_err());
        assert!(i64::from_literal("1.5").is_err());
        assert!(i64::from_literal("+5").is_err());
        assert!(u16::from_literal("+8080").is_err());
        assert!(i64::from_literal("--5").is_err());
    }

    #[test]
    fn test_integer_rejects_overflow() {
        assert!(i8::from_literal("128").is_err());
        assert!(u16::from_literal("65536").is_err());
        assert!(i64::from_literal("9223372036854775808").is_err());
        assert!(u32::from_literal("-1").is_err());
    }

    #[test]
    fn test_boolean_exact() {
        assert!(bool::from_literal("true").unwrap());
        assert!(!bool::from_literal("false").unwrap());
    }

    #[test]
    fn test_boolean_strict() {
        for literal in ["1", "0", "True", "FALSE", "yes", "", " true"] {
            assert!(bool::from_literal(literal).is_err(), "accepted {literal:?}");
        }
    }

    #[test]
    fn test_float() {
        assert_eq!(f64::from_literal("2.75").unwrap(), 2.75);
        assert_eq!(f64::from_literal("-2").unwrap(), -2.0);
        assert_eq!(f64::from_literal("1.5e3").unwrap(), 1500.0);
        assert_eq!(f64::from_literal("2E-2").unwrap(), 0.02);
        assert_eq!(f32::from_literal("0.5").unwrap(), 0.5);
    }

    #[test]
    fn test_float_rejects_malformed() {
        assert!(f64::from_literal("").is_err());
        assert!(f64::from_literal("1.2.3").is_err());
        assert!(f64::from_literal("3.14abc").is_err());
    }

    #[test]
    fn test_text_sequence() {
        assert_eq!(
            Vec::<String>::from_literal("127.0.0.1;192.168.1.1").unwrap(),
            vec!["127.0.0.1", "192.168.1.1"]
        );
        assert_eq!(Vec::<String>::from_literal("a;;b").unwrap(), vec!["a", "", "b"]);
    }

    #[test]
    fn test_text_sequence_empty_literal() {
        assert_eq!(Vec::<String>::from_literal("").unwrap(), vec![""]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Float.to_string(), "floating-point");
        assert_eq!(<Vec<String> as FromLiteral>::KIND, FieldKind::TextSequence);
        assert_eq!(<u8 as FromLiteral>::KIND, FieldKind::Integer);
    }
}
