use std::process::{Command, Stdio};

/// Greedy word wrap on char boundaries. Words longer than the width are
/// hard-split so a pathological token cannot produce an overflowing line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let split: usize = word.char_indices().nth(width).map(|(i, _)| i).unwrap_or(0);
            let (head, tail) = word.split_at(split);
            lines.push(head.to_string());
            word = tail;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if line.is_empty() {
            word.chars().count()
        } else {
            line.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn wrapped_line_count(text: &str, width: usize) -> usize {
    wrap_text(text, width).len()
}

/// Wrap and clamp to at most `max_lines`, marking truncation with an
/// ellipsis on the last kept line.
pub fn clamp_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    if lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        while last.chars().count() + 1 > width && last.pop().is_some() {}
        last.push('\u{2026}');
    }
    lines
}

/// Hand the URL to the host environment's browser launcher and move on.
/// The navigation is fire-and-forget; the viewer observes no outcome.
pub fn open_in_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let launcher = "open";
    #[cfg(target_os = "windows")]
    let launcher = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let launcher = "xdg-open";

    let _ = Command::new(launcher)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        let lines = wrap_text("network and web application security", 12);
        assert_eq!(lines, vec!["network and", "web", "application", "security"]);
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap_text("antidisestablishmentarianism", 10);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
        assert_eq!(lines.concat(), "antidisestablishmentarianism");
    }

    #[test]
    fn wrap_with_zero_width_yields_nothing() {
        assert!(wrap_text("anything", 0).is_empty());
    }

    #[test]
    fn clamp_keeps_short_text_intact() {
        let lines = clamp_text("short", 20, 3);
        assert_eq!(lines, vec!["short"]);
    }

    #[test]
    fn clamp_marks_truncation_with_ellipsis() {
        let text = "Advanced penetration testing certification focusing on hands-on \
                    offensive security skills and real-world vulnerability exploitation.";
        let lines = clamp_text(text, 24, 3);
        assert_eq!(lines.len(), 3);
        assert!(lines[2].ends_with('\u{2026}'));
    }
}
