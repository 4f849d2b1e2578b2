use serde::Serialize;

use crate::field::Field;
use crate::interest::Interest;

/// Everything the user has typed or picked so far.
///
/// Text entries keep the raw input untouched; `age` in particular stays a
/// string until validation interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileDraft {
    pub name: String,
    pub email: String,
    pub age: String,
    pub occupation: String,
    pub bio: String,
    pub interests: Vec<Interest>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of one of the five text entries. The interest picker is not
    /// text backed and reads as empty.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Age => &self.age,
            Field::Occupation => &self.occupation,
            Field::Bio => &self.bio,
            Field::Interests => "",
        }
    }

    /// Replace one of the five text entries; writing to `Interests` is a
    /// no-op.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Age => self.age = value,
            Field::Occupation => self.occupation = value,
            Field::Bio => self.bio = value,
            Field::Interests => {}
        }
    }

    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    /// Insert the interest if missing, remove it if present. The order of the
    /// remaining selections is preserved.
    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(pos) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(pos);
        } else {
            self.interests.push(interest);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.age.is_empty()
            && self.occupation.is_empty()
            && self.bio.is_empty()
            && self.interests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_roundtrips_for_every_text_field() {
        let mut draft = ProfileDraft::new();
        for field in [
            Field::Name,
            Field::Email,
            Field::Age,
            Field::Occupation,
            Field::Bio,
        ] {
            draft.set_text(field, format!("value for {field}"));
            assert_eq!(draft.text(field), format!("value for {field}"));
        }
    }

    #[test]
    fn interests_are_not_text_backed() {
        let mut draft = ProfileDraft::new();
        draft.set_text(Field::Interests, "ignored");
        assert_eq!(draft.text(Field::Interests), "");
        assert!(draft.is_empty());
    }

    #[test]
    fn toggle_keeps_selection_order() {
        let mut draft = ProfileDraft::new();
        draft.toggle_interest(Interest::Technology);
        draft.toggle_interest(Interest::Design);
        draft.toggle_interest(Interest::Music);
        draft.toggle_interest(Interest::Design);
        assert_eq!(draft.interests, vec![Interest::Technology, Interest::Music]);
        assert!(!draft.has_interest(Interest::Design));
    }

    #[test]
    fn serializes_with_stable_keys() {
        let mut draft = ProfileDraft::new();
        draft.name = "Ada".into();
        draft.toggle_interest(Interest::Reading);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["interests"][0], "Reading");
    }
}
