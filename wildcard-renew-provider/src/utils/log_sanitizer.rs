//! Keeps API tokens and long response bodies out of logs.

/// Bytes of a response body kept in a log line.
const TRUNCATE_LIMIT: usize = 256;

/// Leading characters of a secret left readable by [`mask_secret`].
const VISIBLE_SECRET_CHARS: usize = 4;

/// Cut `s` to at most `TRUNCATE_LIMIT` bytes on a char boundary, noting the
/// full length when anything was dropped.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// `abcd***` for long secrets. Secrets up to twice the visible prefix are
/// starred out completely, never with fewer than three stars.
pub fn mask_secret(secret: &str) -> String {
    let chars = secret.chars().count();
    if chars <= VISIBLE_SECRET_CHARS * 2 {
        "*".repeat(chars.max(3))
    } else {
        let prefix: String = secret.chars().take(VISIBLE_SECRET_CHARS).collect();
        format!("{prefix}***")
    }
}
