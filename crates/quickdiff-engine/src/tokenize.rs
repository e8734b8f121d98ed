// Tokenizer: split raw input into comparable tokens for the active mode.

use std::sync::OnceLock;

use quickdiff_core::DiffMode;
use regex::Regex;

/// Split `text` into tokens borrowed from it.
///
/// Line mode splits on `\n` only, so a trailing `\r` stays in the token.
/// Word mode keeps every whitespace run as its own token, which means the
/// result alternates word / whitespace and starts or ends with an empty token
/// when the text starts or ends with whitespace. Both modes yield one empty
/// token for an empty string.
pub fn tokenize(text: &str, mode: DiffMode) -> Vec<&str> {
    match mode {
        DiffMode::Line => split_lines(text),
        DiffMode::Word => split_words(text),
    }
}

pub fn token_count(text: &str, mode: DiffMode) -> usize {
    tokenize(text, mode).len()
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

fn split_words(text: &str) -> Vec<&str> {
    // ECMAScript \s: Unicode White_Space minus U+0085, plus U+FEFF.
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE_RE.get_or_init(|| {
        Regex::new(
            r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
        )
        .expect("whitespace pattern is valid")
    });

    let mut tokens = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        tokens.push(&text[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }
    tokens.push(&text[last..]);
    tokens
}
