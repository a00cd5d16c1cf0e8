//! Message-kind matching.

/// Check whether a message kind satisfies a handler-derived kind name.
///
/// The canonical convention: an action names a handler `Handle<Kind>`,
/// and the `<Kind>` part is matched against message-kind tags
/// case-insensitively with suffix tolerance, so a handler called
/// `HandleVote` also reaches kinds like `HttpVote`.
pub fn kind_matches(kind: &str, wanted: &str) -> bool {
    if wanted.is_empty() {
        return false;
    }
    kind.to_ascii_lowercase()
        .ends_with(&wanted.to_ascii_lowercase())
}
