//! Extra-argument literals for action scripts.

use std::fmt;

/// A literal value passed to a handler after the message itself.
///
/// The action-script micro-grammar admits exactly two forms: a
/// double-quoted string and a bare integer. Anything richer widens the
/// script contract and is deliberately rejected by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Double-quoted string literal, quotes stripped.
    Str(String),
    /// Bare integer literal.
    Int(i64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{s:?}"),
            Literal::Int(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_requotes_strings() {
        assert_eq!(Literal::Str("foo".into()).to_string(), "\"foo\"");
        assert_eq!(Literal::Int(3).to_string(), "3");
    }
}
