//! The movie record and its JSON representation.

use serde::{Deserialize, Serialize};

/// One row of `appmovies`. Text fields are nullable; a field missing from a
/// request body deserializes to `None` (or `0` for the year).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub genre: Option<String>,
    pub production_year: i32,
    pub plot: Option<String>,
    pub director: Option<String>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        production_year: i32,
        plot: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            genre: Some(genre.into()),
            production_year,
            plot: Some(plot.into()),
            director: Some(director.into()),
        }
    }

    /// Overwrite every non-id field with the values from `incoming`. Not a merge:
    /// fields absent from `incoming` are cleared.
    pub fn overwrite_from(&mut self, incoming: Movie) {
        self.title = incoming.title;
        self.genre = incoming.genre;
        self.production_year = incoming.production_year;
        self.plot = incoming.plot;
        self.director = incoming.director;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn uses_camel_case_on_the_wire() {
        let mut movie = Movie::new("Inception", "Sci-Fi", 2010, "Dreams", "Nolan");
        movie.id = Some(7);
        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Inception",
                "genre": "Sci-Fi",
                "productionYear": 2010,
                "plot": "Dreams",
                "director": "Nolan"
            })
        );
    }

    #[test]
    fn absent_fields_default_to_empty() {
        let movie: Movie = serde_json::from_value(json!({ "title": "New Title" })).unwrap();
        assert_eq!(movie.id, None);
        assert_eq!(movie.title.as_deref(), Some("New Title"));
        assert_eq!(movie.genre, None);
        assert_eq!(movie.production_year, 0);
        assert_eq!(movie.plot, None);
        assert_eq!(movie.director, None);
    }

    #[test]
    fn non_numeric_year_is_rejected() {
        let parsed = serde_json::from_value::<Movie>(json!({ "productionYear": "twenty ten" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn overwrite_keeps_id_and_clears_missing_fields() {
        let mut stored = Movie::new("Old", "Drama", 1999, "Plot", "Someone");
        stored.id = Some(3);
        let incoming = Movie {
            id: Some(99),
            title: Some("New Title".into()),
            ..Movie::default()
        };
        stored.overwrite_from(incoming);
        assert_eq!(stored.id, Some(3));
        assert_eq!(stored.title.as_deref(), Some("New Title"));
        assert_eq!(stored.genre, None);
        assert_eq!(stored.production_year, 0);
        assert_eq!(stored.plot, None);
        assert_eq!(stored.director, None);
    }
}
