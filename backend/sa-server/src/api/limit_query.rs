use serde::Deserialize;

/// `?limit=` as sent by the dashboard.
///
/// Kept as text so a malformed value falls back to the default instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}

impl LimitQuery {
    /// Leading integer of `limit`, or `default` when it is absent,
    /// unparseable, zero or negative.
    pub fn resolve(&self, default: usize) -> usize {
        self.limit
            .as_deref()
            .and_then(leading_integer)
            .filter(|&n| n > 0)
            .map(|n| usize::try_from(n).unwrap_or(usize::MAX))
            .unwrap_or(default)
    }
}

/// Parse an optional sign and the digits that follow it, ignoring the rest.
/// Digit runs too long for `i64` saturate.
fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().unwrap_or(i64::MAX);

    Some(if negative { -value } else { value })
}
