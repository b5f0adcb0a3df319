use serde::Serialize;

use super::movie::WatchStatus;
use crate::error::{Result, WatchlistError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Director,
    Year,
    Status,
    PosterPath,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Title,
        DraftField::Director,
        DraftField::Year,
        DraftField::Status,
        DraftField::PosterPath,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "Title",
            DraftField::Director => "Director",
            DraftField::Year => "Year",
            DraftField::Status => "Status",
            DraftField::PosterPath => "Poster path",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// In-progress record held by the add-movie form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub director: String,
    pub year: String,
    pub status: WatchStatus,
    pub poster_path: String,
}

/// Body of `POST /movies`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMovie {
    pub title: String,
    pub director: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub status: WatchStatus,
    pub poster_path: String,
}

impl Draft {
    /// Append a character to a text field. Year only takes digits,
    /// status is not a text field.
    pub fn input(&mut self, field: DraftField, c: char) {
        match field {
            DraftField::Title => self.title.push(c),
            DraftField::Director => self.director.push(c),
            DraftField::Year if c.is_ascii_digit() => self.year.push(c),
            DraftField::Year => {}
            DraftField::Status => {
                if c == ' ' {
                    self.toggle_status();
                }
            }
            DraftField::PosterPath => self.poster_path.push(c),
        }
    }

    pub fn backspace(&mut self, field: DraftField) {
        match field {
            DraftField::Title => {
                self.title.pop();
            }
            DraftField::Director => {
                self.director.pop();
            }
            DraftField::Year => {
                self.year.pop();
            }
            DraftField::Status => {}
            DraftField::PosterPath => {
                self.poster_path.pop();
            }
        }
    }

    pub fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    /// Text shown for a field in the form.
    pub fn value(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Director => &self.director,
            DraftField::Year => &self.year,
            DraftField::Status => self.status.as_str(),
            DraftField::PosterPath => &self.poster_path,
        }
    }

    pub fn reset(&mut self) {
        *self = Draft::default();
    }

    pub fn to_payload(&self) -> Result<NewMovie> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(WatchlistError::InvalidDraft("Title is required".into()));
        }
        let year = match self.year.trim() {
            "" => None,
            raw => Some(raw.parse::<i32>().map_err(|_| {
                WatchlistError::InvalidDraft(format!("Year '{}' is not a number", raw))
            })?),
        };
        Ok(NewMovie {
            title: title.to_string(),
            director: self.director.trim().to_string(),
            year,
            status: self.status,
            poster_path: self.poster_path.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(field: DraftField, text: &str, draft: &mut Draft) {
        for c in text.chars() {
            draft.input(field, c);
        }
    }

    #[test]
    fn test_year_accepts_digits_only() {
        let mut draft = Draft::default();
        typed(DraftField::Year, "20a1-6", &mut draft);
        assert_eq!(draft.year, "2016");
    }

    #[test]
    fn test_space_on_status_toggles() {
        let mut draft = Draft::default();
        draft.input(DraftField::Status, 'x');
        assert_eq!(draft.status, WatchStatus::Unwatched);
        draft.input(DraftField::Status, ' ');
        assert_eq!(draft.status, WatchStatus::Watched);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut draft = Draft::default();
        typed(DraftField::Title, "Dunes", &mut draft);
        typed(DraftField::Director, "V", &mut draft);
        draft.backspace(DraftField::Title);
        assert_eq!(draft.title, "Dune");
        assert_eq!(draft.director, "V");
    }

    #[test]
    fn test_payload_requires_title() {
        let draft = Draft {
            title: "   ".into(),
            ..Draft::default()
        };
        assert!(matches!(draft.to_payload(), Err(WatchlistError::InvalidDraft(_))));
    }

    #[test]
    fn test_payload_serializes_like_the_form() {
        let mut draft = Draft::default();
        typed(DraftField::Title, "Arrival", &mut draft);
        typed(DraftField::Director, "Villeneuve", &mut draft);
        typed(DraftField::Year, "2016", &mut draft);
        let payload = draft.to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Arrival",
                "director": "Villeneuve",
                "year": 2016,
                "status": "unwatched",
                "poster_path": ""
            })
        );
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_payload_omits_blank_year() {
        let draft = Draft {
            title: "Arrival".into(),
            ..Draft::default()
        };
        let json = serde_json::to_value(draft.to_payload().unwrap()).unwrap();
        assert!(json.get("year").is_none());
    }

    #[test]
    fn test_payload_rejects_overflowing_year() {
        let draft = Draft {
            title: "Arrival".into(),
            year: "99999999999".into(),
            ..Draft::default()
        };
        assert!(draft.to_payload().is_err());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = Draft::default();
        typed(DraftField::Title, "Arrival", &mut draft);
        draft.toggle_status();
        draft.reset();
        assert_eq!(draft, Draft::default());
        assert_eq!(draft.status, WatchStatus::Unwatched);
    }

    #[test]
    fn test_field_cycle_wraps() {
        assert_eq!(DraftField::PosterPath.next(), DraftField::Title);
        assert_eq!(DraftField::Title.prev(), DraftField::PosterPath);
        assert_eq!(DraftField::Director.next(), DraftField::Year);
    }
}
