//! Multi-line text for the message and prompt widgets.

use alloc::vec::Vec;
use embedded_graphics::{prelude::Point, text::Alignment};

use crate::core::surface::Surface;

/// Line pitch of message and prompt bodies.
pub(crate) const LINE_HEIGHT: i32 = 18;

/// Split `line` after at most `max_chars` characters, preferring the last
/// whitespace. Returns the line and what is left to wrap.
fn split_line(line: &str, max_chars: usize) -> (&str, &str) {
    let Some((limit, _)) = line.char_indices().nth(max_chars) else {
        return (line, "");
    };
    let (head, tail) = line.split_at(limit);
    if tail.starts_with(char::is_whitespace) {
        return (head.trim_end(), tail.trim_start());
    }
    match head.rfind(char::is_whitespace) {
        Some(space) if space > 0 => (head[..space].trim_end(), line[space..].trim_start()),
        _ => (head, tail),
    }
}

/// Break `text` into at most `max_lines` lines of at most `max_chars`
/// characters. Newlines always break; blank lines are kept.
pub(crate) fn break_lines(text: &str, max_chars: usize, max_lines: usize) -> Vec<&str> {
    let max_chars = max_chars.max(1);
    let text = text.strip_suffix('\n').unwrap_or(text);
    let mut lines = Vec::new();
    if text.is_empty() {
        return lines;
    }
    for paragraph in text.split('\n') {
        let mut rest = paragraph;
        loop {
            if lines.len() == max_lines {
                return lines;
            }
            let (line, tail) = split_line(rest, max_chars);
            lines.push(line);
            if tail.is_empty() {
                break;
            }
            rest = tail;
        }
    }
    lines
}

/// Lines of `text` wrapped to `width` pixels in the surface's current font.
pub(crate) fn wrap<'a>(
    surface: &dyn Surface,
    text: &'a str,
    width: i32,
    max_lines: usize,
) -> Vec<&'a str> {
    let char_width = surface.string_width("M").max(1) as i32;
    let max_chars = (width / char_width).max(1) as usize;
    break_lines(text, max_chars, max_lines)
}

/// Draw `text` horizontally centred on `x` with its vertical centre at `y`.
pub(crate) fn draw_centred(surface: &mut dyn Surface, text: &str, x: i32, y: i32) {
    surface.draw_string(text, Point::new(x, y - LINE_HEIGHT / 2), Alignment::Center);
}

/// Draw `lines` centred on `x`, the first centred vertically on `y`.
pub(crate) fn draw_lines(surface: &mut dyn Surface, lines: &[&str], x: i32, y: i32) {
    for (i, line) in lines.iter().enumerate() {
        draw_centred(surface, line, x, y + i as i32 * LINE_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str, max_chars: usize, max_lines: usize) -> Vec<&str> {
        break_lines(text, max_chars, max_lines)
    }

    #[test]
    fn splits_on_newlines() {
        assert_eq!(lines("Saved\nsettings", 20, 5), ["Saved", "settings"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            lines("Are you sure you want to reset", 10, 5),
            ["Are you", "sure you", "want to", "reset"]
        );
    }

    #[test]
    fn breaks_long_words() {
        assert_eq!(lines("abcdefghij", 4, 5), ["abcd", "efgh", "ij"]);
    }

    #[test]
    fn stops_at_max_lines() {
        assert_eq!(lines("a\nb\nc\nd", 10, 2), ["a", "b"]);
    }

    #[test]
    fn keeps_blank_lines() {
        assert_eq!(lines("a\n\nb", 10, 5), ["a", "", "b"]);
    }

    #[test]
    fn trailing_newline_adds_nothing() {
        assert_eq!(lines("done\n", 10, 5), ["done"]);
        assert!(lines("", 10, 5).is_empty());
    }

    #[test]
    fn breaks_on_space_right_after_limit() {
        assert_eq!(lines("abcd efgh", 4, 5), ["abcd", "efgh"]);
    }
}
