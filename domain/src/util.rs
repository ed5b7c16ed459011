//! Shared utility functions.

/// One-line preview of provider text for log lines.
///
/// Newlines are folded into ` / ` and the result is cut at `max_chars`
/// characters with a trailing `...`.
pub fn log_preview(text: &str, max_chars: usize) -> String {
    let folded = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" / ");

    if folded.chars().count() <= max_chars {
        return folded;
    }
    let cut: String = folded.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_folds_lines() {
        assert_eq!(log_preview("Name: Rex\n\nNicknames: R", 100), "Name: Rex / Nicknames: R");
    }

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(log_preview("ねこねこねこ", 2), "ねこ...");
    }

    #[test]
    fn preview_empty() {
        assert_eq!(log_preview("", 10), "");
    }
}
