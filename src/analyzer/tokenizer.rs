use crate::config::DEFAULT_DELIMITERS;
use crate::utils::unique_in_order;
use regex::Regex;
use std::sync::LazyLock;

static DIGITS_THEN_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)(\D+)$").expect("valid digits-then-letters regex"));
static LETTERS_THEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\D+)(\d+)$").expect("valid letters-then-digits regex"));

/// Splits product identifiers into lowercase tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: Vec<char>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS.chars().collect())
    }
}

impl Tokenizer {
    pub fn new(delimiters: Vec<char>) -> Self {
        Self { delimiters }
    }

    /// Returns the ordered, deduplicated token set of `strings`.
    ///
    /// Each string is split on runs of delimiters and lowercased. Then every
    /// fragment of the form `170pl` or `pl170` additionally contributes its
    /// numeric and alphabetic halves. Appended halves are not split again.
    /// Empty fragments are dropped.
    pub fn tokenize<S: AsRef<str>>(&self, strings: &[S]) -> Vec<String> {
        let mut tokens: Vec<String> = strings
            .iter()
            .flat_map(|s| {
                s.as_ref()
                    .split(|c: char| self.delimiters.contains(&c))
                    .filter(|fragment| !fragment.is_empty())
                    .map(str::to_lowercase)
                    .collect::<Vec<_>>()
            })
            .collect();

        let mut halves = Vec::new();
        for token in &tokens {
            for rule in [&*DIGITS_THEN_LETTERS, &*LETTERS_THEN_DIGITS] {
                if let Some(caps) = rule.captures(token) {
                    halves.push(caps[1].to_string());
                    halves.push(caps[2].to_string());
                }
            }
        }
        tokens.extend(halves);

        unique_in_order(tokens)
    }
}
