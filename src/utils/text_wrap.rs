/// Greedy whitespace wrapping used to cut long text into bounded chunks.
///
/// Every whitespace character becomes a single space and lines break between
/// words. Whitespace at the start of every line after the first is dropped,
/// as is whitespace ending a line unless the line was closed by hard-breaking
/// an overlong word. That word is split to fill the rest of the line.
/// Lengths are counted in `char`s.
///
/// Joining the returned lines does not reproduce the input: whitespace runs
/// that fall on a line boundary are lost.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut chunks = split_chunks(text);
    chunks.reverse();

    let mut lines = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<Chunk> = Vec::new();
        let mut line_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| c.whitespace) {
            chunks.pop();
        }

        while chunks.last().is_some_and(|c| line_len + c.len <= width) {
            if let Some(chunk) = chunks.pop() {
                line_len += chunk.len;
                line.push(chunk);
            }
        }

        // A word wider than any line is split to fill what is left of this
        // one. With no room left the head is empty and is dropped below in
        // place of any trailing whitespace.
        if let Some(long) = chunks.last_mut() {
            if long.len > width {
                let head = long.take_front(width - line_len);
                line.push(head);
            }
        }

        if line.last().is_some_and(|c| c.whitespace) {
            line.pop();
        }

        if !line.is_empty() {
            lines.push(line.into_iter().map(|c| c.text).collect::<String>());
        }
    }

    lines
}

fn is_wrap_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ')
}

#[derive(Debug)]
struct Chunk {
    text: String,
    len: usize,
    whitespace: bool,
}

impl Chunk {
    /// Split off the first `n` chars, leaving the remainder in place.
    fn take_front(&mut self, n: usize) -> Chunk {
        let split_at = self
            .text
            .char_indices()
            .nth(n)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len());
        let tail = self.text.split_off(split_at);
        let head = std::mem::replace(&mut self.text, tail);
        let head_len = self.len.min(n);
        self.len -= head_len;
        Chunk {
            text: head,
            len: head_len,
            whitespace: self.whitespace || head_len == 0,
        }
    }
}

/// Alternating runs of words and (normalised) whitespace.
fn split_chunks(text: &str) -> Vec<Chunk> {
    let mut chunks: Vec<Chunk> = Vec::new();
    for c in text.chars() {
        let whitespace = is_wrap_whitespace(c);
        let c = if whitespace { ' ' } else { c };
        match chunks.last_mut() {
            Some(last) if last.whitespace == whitespace => {
                last.text.push(c);
                last.len += 1;
            }
            _ => chunks.push(Chunk {
                text: c.to_string(),
                len: 1,
                whitespace,
            }),
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 80), vec!["hello world"]);
    }

    #[test]
    fn test_breaks_at_whitespace() {
        assert_eq!(
            wrap("hello world foo", 11),
            vec!["hello world", "foo"]
        );
        assert_eq!(wrap("hello world", 5), vec!["hello", "world"]);
    }

    #[test]
    fn test_long_word_is_hard_broken() {
        let text = "A".repeat(12000);
        let lines = wrap(&text, 5000);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 5000);
        assert_eq!(lines[1].len(), 5000);
        assert_eq!(lines[2].len(), 2000);
    }

    #[test]
    fn test_long_word_fills_remaining_room() {
        let text = format!("hi {}", "B".repeat(10));
        assert_eq!(wrap(&text, 6), vec!["hi BBB", "BBBBBB", "B"]);
    }

    #[test]
    fn test_whitespace_is_normalised_inside_lines() {
        assert_eq!(wrap("a  b\tc\nd", 80), vec!["a  b c d"]);
    }

    #[test]
    fn test_whitespace_at_boundaries_is_dropped() {
        let lines = wrap("aaaa    bbbb", 4);
        assert_eq!(lines, vec!["aaaa", "bbbb"]);
        assert_eq!(lines.concat().len(), 8);
    }

    #[test]
    fn test_leading_whitespace_kept_on_first_line_only() {
        assert_eq!(wrap("  lead", 10), vec!["  lead"]);
        assert_eq!(wrap("  aa bb", 4), vec!["  aa", "bb"]);
    }

    #[test]
    fn test_leading_whitespace_wider_than_line() {
        assert_eq!(wrap("  ab bé\r", 1), vec![" ", "a", "b", "b", "é"]);
    }

    #[test]
    fn test_trailing_whitespace_kept_before_hard_break() {
        let text = format!("ab  {}", "C".repeat(6));
        assert_eq!(wrap(&text, 4), vec!["ab  ", "CCCC", "CC"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   \n\t ", 10).is_empty());
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let text = "हिन्दी ".repeat(4);
        for line in wrap(&text, 7) {
            assert!(line.chars().count() <= 7);
        }
    }

    #[test]
    fn test_zero_width_is_clamped() {
        assert_eq!(wrap("abc", 0), vec!["a", "b", "c"]);
    }
}
