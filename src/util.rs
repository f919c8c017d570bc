use std::path::Path;

pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base {
        if let Ok(relative) = path.strip_prefix(base) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}

/// Shorten `text` to at most `max_chars` characters, ending in an ellipsis
/// when anything was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

/// Render a number without a trailing `.0` for whole values.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

pub fn format_money(currency_symbol: &str, value: f64) -> String {
    format!("{currency_symbol}{value:.2}")
}

/// Count with a singular or plural noun, e.g. `1 segment`, `3 segments`.
pub fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("café au lait", 5), "café…");
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn format_number_drops_trailing_zero() {
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(12.5), "12.5");
    }

    #[test]
    fn format_money_uses_two_decimals() {
        assert_eq!(format_money("$", 5.0), "$5.00");
        assert_eq!(format_money("€", 19.999), "€20.00");
    }

    #[test]
    fn display_path_strips_base() {
        let base = Path::new("/tmp/drafts");
        assert_eq!(
            display_path(Path::new("/tmp/drafts/spring.json"), Some(base)),
            "spring.json"
        );
        assert_eq!(display_path(Path::new("/etc/other"), Some(base)), "/etc/other");
    }
}
