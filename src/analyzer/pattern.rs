use crate::model::PatternError;
use regex::{Regex, RegexBuilder};

const FLEXIBLE_SEPARATOR: &str = "[ -]?";

/// Compiles `model` into a whole-word, case-insensitive pattern in which
/// every space or hyphen may appear as a space, a hyphen, or nothing.
pub fn build_model_pattern(model: &str) -> Result<Regex, PatternError> {
    let mut expr = String::with_capacity(model.len() * 2 + 4);
    expr.push_str(r"\b");
    for c in model.chars() {
        match c {
            ' ' | '-' => expr.push_str(FLEXIBLE_SEPARATOR),
            _ => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    expr.push_str(r"\b");

    RegexBuilder::new(&expr)
        .case_insensitive(true)
        .build()
        .map_err(|source| PatternError {
            model: model.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_spacing_and_hyphenation() {
        let re = build_model_pattern("PL 170").unwrap();
        assert!(re.is_match("new pl-170 camera"));
        assert!(re.is_match("PL170 body"));
        assert!(re.is_match("pl 170"));
    }

    #[test]
    fn enforces_word_boundaries() {
        let re = build_model_pattern("PL 170").unwrap();
        assert!(!re.is_match("pl1701"));
        assert!(!re.is_match("xpl 170"));
    }

    #[test]
    fn hyphenated_model_matches_joined_form() {
        let re = build_model_pattern("DSC-W310").unwrap();
        assert!(re.is_match("sony cyber-shot dscw310 12.1mp"));
        assert!(re.is_match("sony dsc w310"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let re = build_model_pattern("A.1").unwrap();
        assert!(re.is_match("kit a.1 black"));
        assert!(!re.is_match("kit ax1 black"));

        let re = build_model_pattern("X+").unwrap();
        assert!(!re.is_match("xxx"));
    }

    #[test]
    fn unbalanced_brackets_compile() {
        assert!(build_model_pattern("Mark (II").is_ok());
    }
}
