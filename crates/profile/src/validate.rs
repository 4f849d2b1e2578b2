//! Whole-draft validation with one message per failing field.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::draft::ProfileDraft;
use crate::field::Field;

/// At most one message per field; an empty map means the draft can go out.
pub type ErrorMap = HashMap<Field, String>;

pub const MIN_AGE: i64 = 13;
pub const MAX_AGE: i64 = 120;
pub const MAX_OCCUPATION_CHARS: usize = 100;
pub const MAX_BIO_CHARS: usize = 500;

lazy_static! {
    // Deliberately loose: anything without whitespace around an `@` and with a
    // dot somewhere in the domain part.
    static ref EMAIL_RE: Regex =
        Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is a valid regex");
}

/// Check every field and report the first failing rule for each.
///
/// Length limits count Unicode scalars, not bytes. The draft itself is never
/// touched; callers decide what to do with the map.
pub fn validate(draft: &ProfileDraft) -> ErrorMap {
    let mut errors = ErrorMap::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.insert(Field::Name, "Name is required".into());
    } else if name.chars().count() < 2 {
        errors.insert(Field::Name, "Name must be at least 2 characters".into());
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required".into());
    } else if !EMAIL_RE.is_match(&draft.email) {
        errors.insert(Field::Email, "Email is invalid".into());
    }

    if draft.age.is_empty() {
        errors.insert(Field::Age, "Age is required".into());
    } else {
        match draft.age.trim().parse::<i64>() {
            Ok(age) if age > MAX_AGE => {
                errors.insert(Field::Age, "Age must be a realistic value".into());
            }
            Ok(age) if age >= MIN_AGE => {}
            _ => {
                errors.insert(Field::Age, "Age must be a number 13 or greater".into());
            }
        }
    }

    if draft.occupation.chars().count() > MAX_OCCUPATION_CHARS {
        errors.insert(
            Field::Occupation,
            "Occupation cannot exceed 100 characters".into(),
        );
    }

    if draft.bio.chars().count() > MAX_BIO_CHARS {
        errors.insert(Field::Bio, "Bio cannot exceed 500 characters".into());
    }

    if draft.interests.is_empty() {
        errors.insert(Field::Interests, "Select at least one interest".into());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::Interest;
    use pretty_assertions::assert_eq;

    fn valid_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::new();
        draft.name = "Ada Lovelace".into();
        draft.email = "ada@example.com".into();
        draft.age = "36".into();
        draft.occupation = "Engineer".into();
        draft.bio = "Writes notes on engines.".into();
        draft.toggle_interest(Interest::Technology);
        draft
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert_eq!(validate(&valid_draft()), ErrorMap::new());
    }

    #[test]
    fn empty_draft_reports_exactly_the_required_fields() {
        let errors = validate(&ProfileDraft::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Age], "Age is required");
        assert_eq!(errors[&Field::Interests], "Select at least one interest");
    }

    #[test]
    fn whitespace_only_name_counts_as_missing() {
        let mut draft = valid_draft();
        draft.name = "   ".into();
        assert_eq!(validate(&draft)[&Field::Name], "Name is required");
    }

    #[test]
    fn name_minimum_applies_to_the_trimmed_value() {
        let mut draft = valid_draft();
        draft.name = " A ".into();
        assert_eq!(
            validate(&draft)[&Field::Name],
            "Name must be at least 2 characters"
        );
        draft.name = "Ab".into();
        assert!(!validate(&draft).contains_key(&Field::Name));
    }

    #[test]
    fn name_length_counts_chars_not_bytes() {
        let mut draft = valid_draft();
        draft.name = "Δσ".into();
        assert!(!validate(&draft).contains_key(&Field::Name));
    }

    #[test]
    fn email_needs_an_at_and_a_dotted_domain() {
        let mut draft = valid_draft();
        for bad in ["plainaddress", "a@b", "a b@c.d", "a@c .d", " ada@example.com"] {
            draft.email = bad.into();
            assert_eq!(validate(&draft)[&Field::Email], "Email is invalid", "{bad:?}");
        }
        draft.email = "a@b.c".into();
        assert!(!validate(&draft).contains_key(&Field::Email));
    }

    #[test]
    fn age_boundaries() {
        let mut draft = valid_draft();
        let cases = [
            ("12", Some("Age must be a number 13 or greater")),
            ("13", None),
            ("120", None),
            ("121", Some("Age must be a realistic value")),
            ("-5", Some("Age must be a number 13 or greater")),
            ("abc", Some("Age must be a number 13 or greater")),
            ("25.5", Some("Age must be a number 13 or greater")),
            (" 25 ", None),
        ];
        for (input, expected) in cases {
            draft.age = input.into();
            let errors = validate(&draft);
            assert_eq!(
                errors.get(&Field::Age).map(String::as_str),
                expected,
                "age input {input:?}"
            );
        }
    }

    #[test]
    fn occupation_limit_is_one_hundred_chars() {
        let mut draft = valid_draft();
        draft.occupation = "ä".repeat(100);
        assert!(!validate(&draft).contains_key(&Field::Occupation));
        draft.occupation = "ä".repeat(101);
        assert_eq!(
            validate(&draft)[&Field::Occupation],
            "Occupation cannot exceed 100 characters"
        );
    }

    #[test]
    fn bio_limit_is_five_hundred_chars() {
        let mut draft = valid_draft();
        draft.bio = "x".repeat(500);
        assert!(!validate(&draft).contains_key(&Field::Bio));
        draft.bio = "x".repeat(501);
        assert_eq!(
            validate(&draft)[&Field::Bio],
            "Bio cannot exceed 500 characters"
        );
    }

    #[test]
    fn blank_optional_fields_are_fine() {
        let mut draft = valid_draft();
        draft.occupation.clear();
        draft.bio.clear();
        assert_eq!(validate(&draft), ErrorMap::new());
    }
}
