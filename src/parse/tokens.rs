//! Token recognition for the part notation grammar
//!
//! The textual encoding is a comma-separated list of slash-delimited
//! tokens (`C4/q, B4/8/r`). The tokenizer only splits and trims; field
//! validation happens in the grammar so errors carry token positions.

/// One comma-separated unit of the textual encoding, e.g. `D4/8/r`.
#[derive(Clone, Debug, PartialEq)]
pub struct NotationToken {
    /// Trimmed token text.
    pub text: String,
    /// Zero-based ordinal among the non-empty tokens of the input.
    pub position: usize,
}

impl NotationToken {
    /// Slash-separated fields of the token, trimmed.
    pub fn fields(&self) -> Vec<&str> {
        self.text.split('/').map(str::trim).collect()
    }
}

/// Split input into notation tokens. Whitespace around tokens is
/// insignificant and empty tokens (trailing commas, blank input) are
/// skipped, so empty input yields no tokens.
pub fn tokenize(input: &str) -> Vec<NotationToken> {
    input
        .split(',')
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .enumerate()
        .map(|(position, text)| NotationToken {
            text: text.to_string(),
            position,
        })
        .collect()
}
