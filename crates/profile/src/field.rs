use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The six entries of the profile form, in the order they appear on screen.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Field {
    Name,
    Email,
    Age,
    Occupation,
    Bio,
    Interests,
}

impl Field {
    /// Stable identifier used in serialized drafts and log lines.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Age => "age",
            Field::Occupation => "occupation",
            Field::Bio => "bio",
            Field::Interests => "interests",
        }
    }

    /// Heading shown next to the entry.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Age => "Age",
            Field::Occupation => "Occupation",
            Field::Bio => "Bio",
            Field::Interests => "Interests",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Occupation | Field::Bio)
    }

    /// True for the five entries backed by free text; the interest picker is
    /// the one that is not.
    pub fn is_text(self) -> bool {
        !matches!(self, Field::Interests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn iterates_in_screen_order() {
        let order: Vec<Field> = Field::iter().collect();
        assert_eq!(
            order,
            vec![
                Field::Name,
                Field::Email,
                Field::Age,
                Field::Occupation,
                Field::Bio,
                Field::Interests,
            ]
        );
    }

    #[test]
    fn only_occupation_and_bio_are_optional() {
        let optional: Vec<Field> = Field::iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![Field::Occupation, Field::Bio]);
    }

    #[test]
    fn keys_are_snake_and_stable() {
        for field in Field::iter() {
            assert_eq!(field.key(), field.to_string().to_lowercase());
        }
    }
}
