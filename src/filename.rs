//! Standardized PDF filename generation.
//!
//! Course and training documents are filed as `YYYY-MM-DD_course-name.pdf`;
//! bulletins as `YYYY-NN.pdf`. This module only enforces the naming
//! convention; the inputs come from wherever the caller got them.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{WorkflowError, WorkflowResult};

/// Lowercase, drop everything but letters, digits, spaces and hyphens,
/// turn space runs into single hyphens, squeeze hyphen runs, trim hyphens.
pub fn to_kebab_case(input: &str) -> String {
    static SPACES: OnceLock<Regex> = OnceLock::new();
    static HYPHENS: OnceLock<Regex> = OnceLock::new();

    let lowered = input.to_lowercase();
    let mut cleaned = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-' {
            cleaned.push(c);
        }
    }
    let hyphenated = SPACES
        .get_or_init(|| Regex::new(r"\s+").unwrap())
        .replace_all(&cleaned, "-");
    let squeezed = HYPHENS
        .get_or_init(|| Regex::new(r"-{2,}").unwrap())
        .replace_all(&hyphenated, "-");
    squeezed.trim_matches('-').to_string()
}

/// `YYYY-MM-DD_course-name.pdf`
pub fn course_filename(date: &str, course_name: &str) -> WorkflowResult<String> {
    if !date_re().is_match(date) {
        return Err(WorkflowError::InvalidDate {
            value: date.to_string(),
        });
    }
    let kebab = to_kebab_case(course_name);
    if kebab.is_empty() {
        return Err(WorkflowError::EmptyCourseName {
            value: course_name.to_string(),
        });
    }
    Ok(format!("{}_{}.pdf", date, kebab))
}

/// `YYYY-NN.pdf`, bulletin number zero-padded to two digits.
pub fn bulletin_filename(year: &str, number: u32) -> WorkflowResult<String> {
    static YEAR: OnceLock<Regex> = OnceLock::new();
    let year_re = YEAR.get_or_init(|| Regex::new(r"^\d{4}$").unwrap());

    if !year_re.is_match(year) {
        return Err(WorkflowError::InvalidYear {
            value: year.to_string(),
        });
    }
    if number == 0 || number > 99 {
        return Err(WorkflowError::BulletinNumberOutOfRange { value: number });
    }
    Ok(format!("{}-{:02}.pdf", year, number))
}

fn date_re() -> &'static Regex {
    static DATE: OnceLock<Regex> = OnceLock::new();
    DATE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(
            to_kebab_case("Advanced Officer Training!"),
            "advanced-officer-training"
        );
        assert_eq!(to_kebab_case("  Use of   Force -- 2025 "), "use-of-force-2025");
        assert_eq!(to_kebab_case("***"), "");
    }

    #[test]
    fn test_course_filename() {
        assert_eq!(
            course_filename("2025-06-12", "Field Training Program").unwrap(),
            "2025-06-12_field-training-program.pdf"
        );
    }

    #[test]
    fn test_course_filename_rejects_bad_date() {
        assert!(matches!(
            course_filename("06/12/2025", "Field Training"),
            Err(WorkflowError::InvalidDate { .. })
        ));
    }

    #[test]
    fn test_course_filename_rejects_symbol_only_name() {
        assert!(matches!(
            course_filename("2025-06-12", "!!!"),
            Err(WorkflowError::EmptyCourseName { .. })
        ));
    }

    #[test]
    fn test_bulletin_filename_pads_number() {
        assert_eq!(bulletin_filename("2025", 7).unwrap(), "2025-07.pdf");
        assert_eq!(bulletin_filename("2025", 42).unwrap(), "2025-42.pdf");
    }

    #[test]
    fn test_bulletin_filename_rejects_out_of_range() {
        assert!(matches!(
            bulletin_filename("2025", 0),
            Err(WorkflowError::BulletinNumberOutOfRange { .. })
        ));
        assert!(matches!(
            bulletin_filename("2025", 100),
            Err(WorkflowError::BulletinNumberOutOfRange { .. })
        ));
        assert!(matches!(
            bulletin_filename("25", 3),
            Err(WorkflowError::InvalidYear { .. })
        ));
    }
}
