use std::ops::RangeInclusive;

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::EnumString;

use super::Laureate;

/// Year range offered by prize filters.
pub const FILTER_YEARS: RangeInclusive<u16> = 1900..=2019;

/// Response envelope returned by the prize endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PrizeResponse {
    pub(crate) prizes: Option<Vec<Prize>>,
}

/// A single Nobel Prize awarded for one year and category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prize {
    /// The API serializes years as JSON strings; both representations decode.
    #[serde(deserialize_with = "year_from_string_or_number")]
    pub year: u16,
    pub category: String,
    pub motivation: Option<String>,
    #[serde(rename = "overallMotivation")]
    pub overall_motivation: Option<String>,
    #[serde(default)]
    pub laureates: Vec<Laureate>,
}

/// The six published prize categories, as spelled in request URLs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chemistry,
    Economics,
    Literature,
    Medicine,
    Peace,
    Physics,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearRepr {
    Number(u16),
    Text(String),
}

fn year_from_string_or_number<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match YearRepr::deserialize(deserializer)? {
        YearRepr::Number(year) => Ok(year),
        YearRepr::Text(raw) => raw.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "prizes": [
            {
                "year": "1903",
                "category": "physics",
                "laureates": [
                    { "id": "6", "firstname": "Marie", "surname": "Curie", "share": "4" },
                    { "id": "4", "firstname": "Henri", "surname": "Becquerel", "share": "2" }
                ]
            },
            { "year": "1914", "category": "peace", "motivation": "No prize was awarded" }
        ]
    }"#;

    #[test]
    fn decodes_prize_list() {
        let response: PrizeResponse = serde_json::from_str(SAMPLE).unwrap();
        let prizes = response.prizes.unwrap();
        assert_eq!(prizes.len(), 2);
        assert_eq!(prizes[0].year, 1903);
        assert_eq!(prizes[0].category, "physics");
        assert_eq!(prizes[0].laureates.len(), 2);
        assert_eq!(prizes[0].laureates[0].id.as_deref(), Some("6"));
        assert!(prizes[1].laureates.is_empty());
    }

    #[test]
    fn decodes_numeric_year() {
        let prize: Prize =
            serde_json::from_str(r#"{ "year": 2019, "category": "peace" }"#).unwrap();
        assert_eq!(prize.year, 2019);
    }

    #[test]
    fn rejects_unparseable_year() {
        let result = serde_json::from_str::<Prize>(r#"{ "year": "MCMIII", "category": "physics" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn envelope_without_prizes_decodes_to_none() {
        let response: PrizeResponse = serde_json::from_str(r#"{ "error": "no data" }"#).unwrap();
        assert!(response.prizes.is_none());
    }

    #[test]
    fn category_round_trips_as_lowercase() {
        assert_eq!(Category::Physics.to_string(), "physics");
        assert_eq!("economics".parse::<Category>().unwrap(), Category::Economics);
    }
}
