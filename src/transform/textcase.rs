//! Plain-text case transforms.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::require_input;
use crate::error::WorkflowResult;

/// Words kept lowercase by [`title_case`] unless they lead the text.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "the", "and", "but", "or", "for", "nor", "on", "at", "to", "by", "of",
];

/// Lowercase everything, then capitalize the first letter of the text and
/// of each letter following sentence-ending punctuation.
pub fn sentence_case(text: &str) -> WorkflowResult<String> {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    let re = BOUNDARY.get_or_init(|| Regex::new(r"^\s*\w|[.!?]\s*\w").unwrap());

    require_input("text", text)?;
    let lowered = text.to_lowercase();
    Ok(re
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned())
}

pub fn lower_case(text: &str) -> WorkflowResult<String> {
    require_input("text", text)?;
    Ok(text.to_lowercase())
}

pub fn upper_case(text: &str) -> WorkflowResult<String> {
    require_input("text", text)?;
    Ok(text.to_uppercase())
}

/// Capitalize every word-initial letter.
pub fn capitalized_case(text: &str) -> WorkflowResult<String> {
    static WORD_START: OnceLock<Regex> = OnceLock::new();
    let re = WORD_START.get_or_init(|| Regex::new(r"\b\w").unwrap());

    require_input("text", text)?;
    let lowered = text.to_lowercase();
    Ok(re
        .replace_all(&lowered, |caps: &Captures| caps[0].to_uppercase())
        .into_owned())
}

/// Even character positions lowercase, odd uppercase.
pub fn alternating_case(text: &str) -> WorkflowResult<String> {
    require_input("text", text)?;
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    Ok(out)
}

/// Capitalize each space-separated word, keeping small connective words
/// lowercase unless they come first.
pub fn title_case(text: &str) -> WorkflowResult<String> {
    require_input("text", text)?;
    let lowered = text.to_lowercase();
    let words: Vec<String> = lowered
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i == 0 || !SMALL_WORDS.contains(&word) {
                capitalize_first(word)
            } else {
                word.to_string()
            }
        })
        .collect();
    Ok(words.join(" "))
}

/// Swap the case of every letter.
pub fn inverse_case(text: &str) -> WorkflowResult<String> {
    require_input("text", text)?;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    Ok(out)
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sentence_case() {
        assert_eq!(
            sentence_case("hello world. goodbye world! again? yes").unwrap(),
            "Hello world. Goodbye world! Again? Yes"
        );
    }

    #[test]
    fn test_sentence_case_lowers_shouting() {
        assert_eq!(sentence_case("THIS IS LOUD. very").unwrap(), "This is loud. Very");
    }

    #[test]
    fn test_capitalized_case() {
        assert_eq!(
            capitalized_case("quick brown fox").unwrap(),
            "Quick Brown Fox"
        );
    }

    #[test]
    fn test_alternating_case() {
        assert_eq!(alternating_case("workflow").unwrap(), "wOrKfLoW");
    }

    #[test]
    fn test_title_case_keeps_small_words_low() {
        assert_eq!(
            title_case("the status of the request").unwrap(),
            "The Status of the Request"
        );
    }

    #[test]
    fn test_inverse_case() {
        assert_eq!(inverse_case("Rust 1.0").unwrap(), "rUST 1.0");
    }

    #[test]
    fn test_empty_text_is_an_advisory() {
        assert!(sentence_case("").is_err());
        assert!(title_case("   ").is_err());
    }
}
