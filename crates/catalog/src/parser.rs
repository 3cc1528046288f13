//! Lenient parsers for the raw text fields a catalog returns.
//!
//! Catalogs hand back display strings, not numbers: `"1.2M views"`,
//! `"3 weeks ago"`, `"1:02:33"`. Ranking needs approximate numeric values
//! out of them, and a malformed string must never abort a request, so every
//! parser here degrades to zero or a sentinel instead of returning an error.

/// Age assigned to a candidate whose upload-age text could not be parsed.
/// Ten years in days; old enough to kill any freshness or velocity signal.
pub const OLD_SENTINEL_DAYS: f64 = 3650.0;

/// Parse a raw view-count string into an absolute count.
///
/// Handles thousands separators (`"12,345 views"`), western magnitude
/// suffixes (`"1.2M views"`), and CJK magnitude suffixes (`"1.2万回視聴"`).
/// Anything unparseable parses to 0.
pub fn parse_view_count(text: &str) -> u64 {
    let trimmed = text.trim();
    let Some(start) = trimmed.find(|c: char| c.is_ascii_digit()) else {
        return 0;
    };

    let mut digits = String::new();
    let mut chars = trimmed[start..].chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            digits.push(c);
            chars.next();
        } else if c == ',' {
            // thousands separator
            chars.next();
        } else {
            break;
        }
    }

    let Ok(value) = digits.parse::<f64>() else {
        return 0;
    };

    let multiplier = match chars.next() {
        Some('k' | 'K') => 1_000.0,
        Some('m' | 'M') => 1_000_000.0,
        Some('b' | 'B') => 1_000_000_000.0,
        Some('万') => 10_000.0,
        Some('億') => 100_000_000.0,
        _ => 1.0,
    };

    (value * multiplier).max(0.0) as u64
}

/// Parse a raw upload-age string into approximate days ago.
///
/// Recognizes minute/hour/day/week/month/year unit tokens in English and
/// Japanese and converts to day-equivalents. Unparseable text returns
/// [`OLD_SENTINEL_DAYS`].
pub fn parse_upload_age_days(text: &str) -> f64 {
    let lower = text.trim().to_lowercase();
    let Some(start) = lower.find(|c: char| c.is_ascii_digit()) else {
        return OLD_SENTINEL_DAYS;
    };

    let digits: String = lower[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let Ok(value) = digits.parse::<f64>() else {
        return OLD_SENTINEL_DAYS;
    };

    // Unit tokens checked longest-signal first so "minute" is not read as
    // a bare "min" miss and "month" is tried before the "day" substring of
    // CJK dates can interfere.
    if lower.contains("minute") || lower.contains("min") || lower.contains('分') {
        value / 1440.0
    } else if lower.contains("hour") || lower.contains("時間") {
        value / 24.0
    } else if lower.contains("week") || lower.contains('週') {
        value * 7.0
    } else if lower.contains("month") || lower.contains("か月") || lower.contains("ヶ月") {
        value * 30.4
    } else if lower.contains("year") || lower.contains('年') {
        value * 365.25
    } else if lower.contains("day") || lower.contains('日') {
        value
    } else {
        OLD_SENTINEL_DAYS
    }
}

/// Parse a `hh:mm:ss` / `mm:ss` duration string into seconds.
///
/// Unparseable text parses to 0.
pub fn parse_duration_seconds(text: &str) -> u64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }
    let mut total = 0u64;
    for part in trimmed.split(':') {
        let Ok(value) = part.trim().parse::<u64>() else {
            return 0;
        };
        total = total.saturating_mul(60).saturating_add(value);
    }
    total
}
