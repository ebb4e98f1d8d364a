//! Text normalization, tokenization, and w-shingling.
use crate::shingling::ShingleIter;

/// Window size for w-shingling used by the comparator.
pub const SHINGLE_SIZE: usize = 5;

/// English and Spanish function words removed by [`tokenize`].
pub const STOPWORDS: &[&str] = &[
    "the", "and", "of", "to", "a", "in", "for", "is", "de", "la", "el", "y", "los", "las", "un",
    "una", "en",
];

const ACCENTED: &[char] = &['á', 'é', 'í', 'ó', 'ú', 'ñ', 'ü'];

#[inline(always)]
fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || ACCENTED.contains(&c)
}

/// Lowercases `text`, replaces every character outside `[a-z0-9áéíóúñü]` with a space,
/// and collapses whitespace runs into single spaces.
///
/// The output is a fixed point: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize<S>(text: S) -> String
where
    S: AsRef<str>,
{
    // Simple per-char case mapping: 'İ' becomes 'i', not "i\u{307}".
    let mapped: String = text
        .as_ref()
        .chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    let mut out = String::with_capacity(mapped.len());
    for word in mapped.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalizes `text` and splits it into tokens, dropping [`STOPWORDS`].
///
/// Token order and duplicates are preserved.
pub fn tokenize<S>(text: S) -> Vec<String>
where
    S: AsRef<str>,
{
    normalize(text)
        .split_whitespace()
        .filter(|t| !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Joins every window of `k` consecutive tokens with a single space.
///
/// If `k <= 1` or there are fewer than `k` tokens, the tokens are returned as they are.
pub fn shingles<T>(tokens: &[T], k: usize) -> Vec<String>
where
    T: AsRef<str>,
{
    if k <= 1 || tokens.len() < k {
        return tokens.iter().map(|t| t.as_ref().to_string()).collect();
    }
    ShingleIter::new(tokens, k)
        .map(|window| {
            let mut shingle = String::new();
            for (i, t) in window.iter().enumerate() {
                if i != 0 {
                    shingle.push(' ');
                }
                shingle.push_str(t.as_ref());
            }
            shingle
        })
        .collect()
}
