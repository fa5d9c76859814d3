//! Word tokenizer
//!
//! A token is a maximal run of word characters: any Unicode alphanumeric
//! character or `_`. Everything else separates tokens and is dropped.

/// A single word taken from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// The word exactly as it appears in the document
    pub surface: &'a str,
    /// Lowercase form used for matching
    pub folded: String,
    /// Index of this token within the document's token sequence
    pub position: usize,
}

/// Returns true if `c` can be part of a word
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into word tokens, in order of appearance
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (is_word_char(c), start) {
            (true, None) => start = Some(idx),
            (false, Some(s)) => {
                push_token(&mut tokens, &text[s..idx]);
                start = None;
            }
            _ => {}
        }
    }

    if let Some(s) = start {
        push_token(&mut tokens, &text[s..]);
    }

    tokens
}

fn push_token<'a>(tokens: &mut Vec<Token<'a>>, surface: &'a str) {
    tokens.push(Token {
        surface,
        folded: surface.to_lowercase(),
        position: tokens.len(),
    });
}
