use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Fixed catalog of selectable interests, in the order the picker shows them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Interest {
    Technology,
    Design,
    Photography,
    Music,
    Sports,
    Travel,
    Reading,
    Gaming,
    Cooking,
    Art,
}

impl Interest {
    pub fn catalog() -> Vec<Interest> {
        Interest::iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_entries_in_order() {
        let catalog = Interest::catalog();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.first(), Some(&Interest::Technology));
        assert_eq!(catalog.last(), Some(&Interest::Art));
    }

    #[test]
    fn display_matches_catalog_name() {
        assert_eq!(Interest::Photography.to_string(), "Photography");
        assert_eq!(Interest::Art.to_string(), "Art");
    }
}
