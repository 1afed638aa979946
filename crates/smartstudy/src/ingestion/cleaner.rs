//! Text normalization applied to every extracted document

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Normalize extracted text.
///
/// Steps, in order: drop non-ASCII characters, join letter-spaced words
/// ("h e l l o" -> "hello"), collapse whitespace runs to a single space, trim.
pub fn clean_text(text: &str) -> String {
    let ascii = NON_ASCII.replace_all(text, "");
    let joined = join_spaced_letters(&ascii);
    let collapsed = WHITESPACE_RUN.replace_all(&joined, " ");
    collapsed.trim().to_string()
}

/// Remove the single whitespace between two lone letters.
///
/// A lone letter has a word boundary on its outer side. Decisions are made
/// against the input as a whole, so chains collapse completely:
/// "a b c" -> "abc", while "a bc" and "ab c" are untouched.
fn join_spaced_letters(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let is_word = |i: usize| chars.get(i).is_some_and(|c| c.is_ascii_alphanumeric() || *c == '_');
    let boundary_before = |i: usize| i == 0 || !is_word(i - 1);

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);

        let lone_letter_then_space = c.is_ascii_alphabetic()
            && boundary_before(i)
            && chars.get(i + 1).is_some_and(|s| s.is_whitespace())
            && chars.get(i + 2).is_some_and(|n| n.is_ascii_alphabetic())
            && !is_word(i + 3);

        if lone_letter_then_space {
            // skip the separator; the next letter is pushed on the next pass
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_ascii() {
        assert_eq!(clean_text("caf\u{e9} na\u{ef}ve \u{2014} ok"), "caf nave ok");
    }

    #[test]
    fn test_joins_letter_spaced_words() {
        assert_eq!(clean_text("h e l l o world"), "hello world");
        assert_eq!(clean_text("T h e cell"), "The cell");
    }

    #[test]
    fn test_leaves_real_words_alone() {
        assert_eq!(clean_text("a cat is on a mat"), "a cat is on a mat");
        assert_eq!(clean_text("vitamin A or B12"), "vitamin A or B12");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        assert_eq!(clean_text("  first\n\n line \t second  "), "first line second");
    }

    #[test]
    fn test_output_is_ascii_without_double_spaces() {
        let raw = "Mito\u{00AD}chondria\u{00A0}\u{00A0}are   the  power\r\nhouse \u{fb01}";
        let cleaned = clean_text(raw);
        assert!(cleaned.is_ascii());
        assert!(!cleaned.contains("  "));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" \n\t "), "");
    }
}
