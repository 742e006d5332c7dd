// Core data structures for the trendwatch record

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used in the output record
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single keyword with its assigned interest value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub name: String,
    pub value: i64,
}

/// Scores for every keyword of one category, in keyword-list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScores {
    pub name: String,
    pub scores: Vec<KeywordScore>,
}

/// Top-level output record, built fresh each run and never mutated after
/// serialization
///
/// Serializes with `last_updated` first and `categories` as a JSON object
/// whose keys appear in catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub last_updated: String,
    #[serde(with = "category_map")]
    pub categories: Vec<CategoryScores>,
}

impl TrendRecord {
    /// Create a record stamped with the current local time
    #[must_use]
    pub fn now(categories: Vec<CategoryScores>) -> Self {
        Self {
            last_updated: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            categories,
        }
    }

    /// Look up one category's scores by name
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[KeywordScore]> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.scores.as_slice())
    }
}

/// Serde adapter keeping `categories` a JSON object while preserving catalog
/// order (serde_json maps are sorted, so a plain map type would reorder keys)
mod category_map {
    use super::{CategoryScores, KeywordScore};
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(categories: &[CategoryScores], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(categories.len()))?;
        for category in categories {
            map.serialize_entry(&category.name, &category.scores)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<CategoryScores>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CategoryMapVisitor;

        impl<'de> Visitor<'de> for CategoryMapVisitor {
            type Value = Vec<CategoryScores>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to keyword scores")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, scores)) =
                    access.next_entry::<String, Vec<KeywordScore>>()?
                {
                    categories.push(CategoryScores { name, scores });
                }
                Ok(categories)
            }
        }

        deserializer.deserialize_map(CategoryMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn sample_record() -> TrendRecord {
        TrendRecord {
            last_updated: "2026-08-24 12:00:00".to_string(),
            categories: vec![
                CategoryScores {
                    name: "AI & Tech".to_string(),
                    scores: vec![
                        KeywordScore {
                            name: "Generative AI".to_string(),
                            value: 640,
                        },
                        KeywordScore {
                            name: "AI Agents".to_string(),
                            value: 415,
                        },
                    ],
                },
                CategoryScores {
                    name: "Finance".to_string(),
                    scores: vec![KeywordScore {
                        name: "Crypto Arbitrage".to_string(),
                        value: 210,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_serializes_categories_as_ordered_object() {
        let json = serde_json::to_string(&sample_record()).unwrap();

        let last_updated_pos = json.find("last_updated").unwrap();
        let categories_pos = json.find("categories").unwrap();
        assert!(last_updated_pos < categories_pos);

        let ai_pos = json.find("AI & Tech").unwrap();
        let finance_pos = json.find("Finance").unwrap();
        assert!(ai_pos < finance_pos);
    }

    #[test]
    fn test_keyword_score_shape() {
        let score = KeywordScore {
            name: "Cloud Hosting".to_string(),
            value: 333,
        };
        let json = serde_json::to_string(&score).unwrap();
        assert_eq!(json, r#"{"name":"Cloud Hosting","value":333}"#);
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: TrendRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_now_timestamp_format() {
        let record = TrendRecord::now(Vec::new());
        assert!(NaiveDateTime::parse_from_str(&record.last_updated, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_category_lookup() {
        let record = sample_record();
        assert_eq!(record.category("Finance").unwrap().len(), 1);
        assert!(record.category("Gaming").is_none());
    }
}
