//! Action-script parser.
//!
//! Two surface forms are accepted, with a case-sensitive
//! `Handle<Kind>` handler name:
//!
//! - Short: `"<nodeId>: Handle<Kind>"`, e.g. `"1: HandlePetition"`.
//! - Call: `"Handle<Kind>(<nodeId>, _)"` or
//!   `"Handle<Kind>(<nodeId>, _, <extra>)"`, where `_` stands for the
//!   message the engine resolves and `<extra>` is an optional literal
//!   passed through to the handler.
//!
//! The extra argument is typed by literal sniffing with exactly two
//! forms — a double-quoted string and a bare integer — a documented
//! micro-grammar that is not generalized further.
//!
//! The expected message kind is derived by stripping the `Handle`
//! prefix from the PascalCase handler name (`HandleVote` → `Vote`);
//! the stripped name is later matched case-insensitively and
//! suffix-tolerantly against message kinds.

use crate::ScriptError;
use rehearse_types::{Literal, NodeId};
use std::str::FromStr;

/// A parsed delivery instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    node: NodeId,
    handler: String,
    kind: String,
    extra: Option<Literal>,
    text: String,
}

impl Action {
    /// Parse one action line.
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let trimmed = text.trim();
        if trimmed.starts_with("Handle") {
            Self::parse_call(trimmed, text)
        } else if trimmed.contains(':') {
            Self::parse_short(trimmed, text)
        } else {
            Err(ScriptError::Malformed {
                action: text.to_string(),
                detail: "expected \"<nodeId>: Handle<Kind>\" or \"Handle<Kind>(<nodeId>, _)\"",
            })
        }
    }

    /// `"<nodeId>: Handle<Kind>"`
    fn parse_short(trimmed: &str, text: &str) -> Result<Self, ScriptError> {
        let (id, handler) = trimmed.split_once(':').ok_or_else(|| ScriptError::Malformed {
            action: text.to_string(),
            detail: "expected \"<nodeId>: Handle<Kind>\"",
        })?;

        let node = parse_node_id(id.trim(), text)?;
        let (handler, kind) = parse_handler(handler.trim(), text)?;
        Ok(Self {
            node,
            handler,
            kind,
            extra: None,
            text: text.to_string(),
        })
    }

    /// `"Handle<Kind>(<nodeId>, _)"` or `"Handle<Kind>(<nodeId>, _, <extra>)"`
    fn parse_call(trimmed: &str, text: &str) -> Result<Self, ScriptError> {
        let open = trimmed.find('(').ok_or_else(|| ScriptError::Malformed {
            action: text.to_string(),
            detail: "call form requires an argument list",
        })?;
        let close = trimmed.strip_suffix(')').ok_or_else(|| ScriptError::Malformed {
            action: text.to_string(),
            detail: "call form must end with ')'",
        })?;

        let (handler, kind) = parse_handler(&trimmed[..open], text)?;

        // At most three arguments, and a string literal may contain
        // commas, so the extra argument is everything after the second
        // separator.
        let mut args = close[open + 1..].splitn(3, ',').map(str::trim);

        let node = match args.next() {
            Some(id) if !id.is_empty() => parse_node_id(id, text)?,
            _ => {
                return Err(ScriptError::Malformed {
                    action: text.to_string(),
                    detail: "call form requires a node id as its first argument",
                })
            }
        };

        match args.next() {
            Some("_") => {}
            _ => {
                return Err(ScriptError::Malformed {
                    action: text.to_string(),
                    detail: "second argument must be the message placeholder '_'",
                })
            }
        }

        let extra = args.next().map(|raw| parse_literal(raw, text)).transpose()?;

        Ok(Self {
            node,
            handler,
            kind,
            extra,
            text: text.to_string(),
        })
    }

    /// Target node id.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Handler name, including the `Handle` prefix.
    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Expected message kind, derived from the handler name.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Optional extra argument for the handler.
    pub fn extra(&self) -> Option<&Literal> {
        self.extra.as_ref()
    }

    /// The original action text, for diagnostics.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl FromStr for Action {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s)
    }
}

fn parse_node_id(raw: &str, text: &str) -> Result<NodeId, ScriptError> {
    raw.parse::<u64>()
        .map(NodeId)
        .map_err(|_| ScriptError::InvalidNodeId {
            action: text.to_string(),
            id: raw.to_string(),
        })
}

/// Validate the `Handle` prefix (case-sensitive) and derive the kind.
fn parse_handler(raw: &str, text: &str) -> Result<(String, String), ScriptError> {
    let kind = raw
        .strip_prefix("Handle")
        .ok_or_else(|| ScriptError::Malformed {
            action: text.to_string(),
            detail: "handler name must start with 'Handle'",
        })?
        .to_string();
    if kind.is_empty() {
        return Err(ScriptError::Malformed {
            action: text.to_string(),
            detail: "handler name must name a message kind after 'Handle'",
        });
    }
    Ok((raw.to_string(), kind))
}

/// Literal sniffing: quoted → string, bare digits → integer.
fn parse_literal(raw: &str, text: &str) -> Result<Literal, ScriptError> {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return Ok(Literal::Str(raw[1..raw.len() - 1].to_string()));
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(n) = raw.parse::<i64>() {
            return Ok(Literal::Int(n));
        }
    }
    Err(ScriptError::InvalidLiteral {
        action: text.to_string(),
        literal: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_form() {
        let action = Action::parse("1: HandlePetition").unwrap();
        assert_eq!(action.node(), NodeId(1));
        assert_eq!(action.handler(), "HandlePetition");
        assert_eq!(action.kind(), "Petition");
        assert_eq!(action.extra(), None);
    }

    #[test]
    fn test_call_form_without_extra() {
        let action = Action::parse("HandleVote(0, _)").unwrap();
        assert_eq!(action.node(), NodeId(0));
        assert_eq!(action.handler(), "HandleVote");
        assert_eq!(action.kind(), "Vote");
        assert_eq!(action.extra(), None);
    }

    #[test]
    fn test_call_form_with_string_extra() {
        let action = Action::parse("HandleVote(0, _, \"foo\")").unwrap();
        assert_eq!(action.extra(), Some(&Literal::Str("foo".into())));
    }

    #[test]
    fn test_call_form_with_integer_extra() {
        let action = Action::parse("HandleVote(1, _, 3)").unwrap();
        assert_eq!(action.extra(), Some(&Literal::Int(3)));
    }

    #[test]
    fn test_string_extra_may_contain_separators() {
        let action = Action::parse("HandleVote(1, _, \"a, b: c\")").unwrap();
        assert_eq!(action.extra(), Some(&Literal::Str("a, b: c".into())));
    }

    #[test]
    fn test_multi_digit_node_id() {
        let action = Action::parse("12: HandleVote").unwrap();
        assert_eq!(action.node(), NodeId(12));
    }

    #[test]
    fn test_rejects_missing_handle_prefix() {
        let err = Action::parse("1: OnPetition").unwrap_err();
        assert!(matches!(err, ScriptError::Malformed { .. }));
    }

    #[test]
    fn test_handle_prefix_is_case_sensitive() {
        assert!(Action::parse("1: handlePetition").is_err());
    }

    #[test]
    fn test_rejects_empty_kind() {
        assert!(Action::parse("1: Handle").is_err());
    }

    #[test]
    fn test_rejects_bad_node_id() {
        let err = Action::parse("x: HandleVote").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidNodeId { .. }));
    }

    #[test]
    fn test_rejects_missing_placeholder() {
        let err = Action::parse("HandleVote(0, msg)").unwrap_err();
        assert!(matches!(err, ScriptError::Malformed { .. }));
    }

    #[test]
    fn test_rejects_unsniffable_literal() {
        let err = Action::parse("HandleVote(0, _, 1.5)").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidLiteral { .. }));
    }

    #[test]
    fn test_rejects_empty_action() {
        assert!(Action::parse("").is_err());
        assert!(Action::parse("   ").is_err());
    }
}
