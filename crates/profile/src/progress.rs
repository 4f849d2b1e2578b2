//! Completion metric shown above the form.

use strum::IntoEnumIterator;

use crate::draft::ProfileDraft;
use crate::field::Field;

/// A field counts once it holds something: trimmed text for the free-text
/// entries, any raw input for age, at least one selection for interests.
/// Optional fields count exactly like required ones.
pub fn is_filled(draft: &ProfileDraft, field: Field) -> bool {
    match field {
        Field::Age => !draft.age.is_empty(),
        Field::Interests => !draft.interests.is_empty(),
        _ => !draft.text(field).trim().is_empty(),
    }
}

/// How many of the six entries are filled.
pub fn filled_count(draft: &ProfileDraft) -> usize {
    Field::iter().filter(|field| is_filled(draft, *field)).count()
}

/// Filled share as a rounded percentage, 0 to 100.
pub fn percent(draft: &ProfileDraft) -> u8 {
    let total = Field::iter().count();
    ((filled_count(draft) as f32 / total as f32) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interest::Interest;

    #[test]
    fn percent_steps_through_the_six_fields() {
        let mut draft = ProfileDraft::new();
        assert_eq!(percent(&draft), 0);
        draft.name = "Ada".into();
        assert_eq!(percent(&draft), 17);
        draft.email = "ada@example.com".into();
        assert_eq!(percent(&draft), 33);
        draft.age = "36".into();
        assert_eq!(percent(&draft), 50);
        draft.occupation = "Engineer".into();
        assert_eq!(percent(&draft), 67);
        draft.bio = "Notes.".into();
        assert_eq!(percent(&draft), 83);
        draft.toggle_interest(Interest::Music);
        assert_eq!(percent(&draft), 100);
    }

    #[test]
    fn whitespace_only_text_does_not_count() {
        let mut draft = ProfileDraft::new();
        draft.name = "   ".into();
        assert_eq!(filled_count(&draft), 0);
    }

    #[test]
    fn age_counts_by_raw_input() {
        let mut draft = ProfileDraft::new();
        draft.age = " ".into();
        assert_eq!(filled_count(&draft), 1);
        assert!(is_filled(&draft, Field::Age));
    }

    #[test]
    fn filled_does_not_imply_valid() {
        let mut draft = ProfileDraft::new();
        draft.age = "not a number".into();
        assert!(is_filled(&draft, Field::Age));
    }
}
