use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub type MovieId = i64;

/// Metascore values the dataset uses for "no score".
pub const METASCORE_NOT_AVAILABLE: &str = "N/A";

/// A single movie as it appears in the dataset document.
///
/// The fields the service queries on are typed; every other attribute
/// (genre, director, plot, ...) is kept verbatim in `extra` and written
/// back out on serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(rename = "Movie_ID")]
    pub movie_id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Rated", default, deserialize_with = "null_as_empty")]
    pub rated: String,
    #[serde(rename = "Metascore", default, deserialize_with = "metascore_text")]
    pub metascore: String,
    #[serde(
        rename = "Released",
        alias = "Release_Date",
        alias = "ReleaseDate",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub release_date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MovieRecord {
    pub fn new(movie_id: MovieId, title: impl Into<String>, rated: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            rated: rated.into(),
            metascore: String::new(),
            release_date: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_metascore(mut self, metascore: impl Into<String>) -> Self {
        self.metascore = metascore.into();
        self
    }

    pub fn has_metascore(&self) -> bool {
        has_metascore(&self.metascore)
    }

    pub fn is_metascore_blank(&self) -> bool {
        is_blank_metascore(&self.metascore)
    }
}

/// Empty or "N/A".
pub fn is_blank_metascore(metascore: &str) -> bool {
    metascore.is_empty() || metascore == METASCORE_NOT_AVAILABLE
}

pub fn has_metascore(metascore: &str) -> bool {
    !is_blank_metascore(metascore)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Metascore shows up as "74", 74 or null depending on the export.
fn metascore_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(match raw {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn metascore_accepts_text_number_and_null() {
        let text: MovieRecord =
            serde_json::from_value(json!({"Movie_ID": 1, "Title": "A", "Metascore": "74"})).unwrap();
        let number: MovieRecord =
            serde_json::from_value(json!({"Movie_ID": 2, "Title": "B", "Metascore": 81})).unwrap();
        let null: MovieRecord =
            serde_json::from_value(json!({"Movie_ID": 3, "Title": "C", "Metascore": null})).unwrap();
        let missing: MovieRecord =
            serde_json::from_value(json!({"Movie_ID": 4, "Title": "D"})).unwrap();

        assert_eq!(text.metascore, "74");
        assert_eq!(number.metascore, "81");
        assert_eq!(null.metascore, "");
        assert_eq!(missing.metascore, "");
    }

    #[test]
    fn metascore_blank_rules() {
        assert!(is_blank_metascore(""));
        assert!(is_blank_metascore("N/A"));
        assert!(!is_blank_metascore("0"));
        assert!(has_metascore("58"));
        assert!(!has_metascore("N/A"));
    }

    #[test]
    fn unknown_attributes_survive_serialization() {
        let doc = json!({
            "Movie_ID": 7,
            "Title": "Heat",
            "Rated": "R",
            "Released": "15 Dec 1995",
            "Director": "Michael Mann",
            "Genre": "Crime, Drama"
        });
        let rec: MovieRecord = serde_json::from_value(doc).unwrap();
        assert_eq!(rec.release_date, "15 Dec 1995");
        assert_eq!(rec.extra.get("Director"), Some(&json!("Michael Mann")));

        let back = serde_json::to_value(&rec).unwrap();
        assert_eq!(back["Genre"], json!("Crime, Drama"));
        assert_eq!(back["Movie_ID"], json!(7));
    }

    #[test]
    fn null_rating_and_release_date_read_as_empty() {
        let rec: MovieRecord = serde_json::from_value(
            json!({"Movie_ID": 1, "Title": "A", "Rated": null, "Released": null}),
        )
        .unwrap();
        assert_eq!(rec.rated, "");
        assert_eq!(rec.release_date, "");
    }

    #[test]
    fn release_date_aliases() {
        let rec: MovieRecord = serde_json::from_value(
            json!({"Movie_ID": 1, "Title": "A", "Release_Date": "2010-07-16"}),
        )
        .unwrap();
        assert_eq!(rec.release_date, "2010-07-16");
    }

    #[test]
    fn title_and_id_are_required() {
        assert!(serde_json::from_value::<MovieRecord>(json!({"Title": "A"})).is_err());
        assert!(serde_json::from_value::<MovieRecord>(json!({"Movie_ID": 1})).is_err());
    }
}
