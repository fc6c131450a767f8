use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Prize;

/// A person or organization credited on a prize.
///
/// The id is the only stable key across prizes; some historical entries
/// carry none. Organizations usually have a `firstname` and no `surname`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Laureate {
    pub id: Option<String>,
    pub firstname: Option<String>,
    pub surname: Option<String>,
    pub motivation: Option<String>,
    pub share: Option<String>,
}

impl Laureate {
    /// Full display name assembled from the name parts that are present.
    pub fn display_name(&self) -> String {
        [self.firstname.as_deref(), self.surname.as_deref()]
            .into_iter()
            .flatten()
            .join(" ")
    }
}

/// A laureate credited on more than one prize, with one representative prize.
#[derive(Debug, Clone, Serialize)]
pub struct MultiWinner {
    pub laureate_id: String,
    pub count: u32,
    /// The first prize in input order crediting this laureate.
    pub prize: Prize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laureate(firstname: Option<&str>, surname: Option<&str>) -> Laureate {
        Laureate {
            id: None,
            firstname: firstname.map(str::to_owned),
            surname: surname.map(str::to_owned),
            motivation: None,
            share: None,
        }
    }

    #[test]
    fn display_name_joins_both_parts() {
        assert_eq!(
            laureate(Some("Marie"), Some("Curie")).display_name(),
            "Marie Curie"
        );
    }

    #[test]
    fn display_name_of_organization_has_no_surname() {
        assert_eq!(
            laureate(Some("Amnesty International"), None).display_name(),
            "Amnesty International"
        );
    }

    #[test]
    fn display_name_of_anonymous_laureate_is_empty() {
        assert_eq!(laureate(None, None).display_name(), "");
    }
}
