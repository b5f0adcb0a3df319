use std::fmt;

use serde::{Deserialize, Serialize};

const POSTER_BASE: &str = "https://image.tmdb.org/t/p";

/// Backend-assigned identifier. The client only ever echoes it back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Int(i64),
    Text(String),
}

impl MovieId {
    /// Interpret a route segment or CLI argument as an identifier.
    /// Only canonical integers become `Int`, so the text always survives
    /// unchanged (`007` and `+5` stay text).
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<i64>() {
            Ok(n) if n.to_string() == raw => MovieId::Int(n),
            _ => MovieId::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Int(n) => write!(f, "{}", n),
            MovieId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchStatus {
    Watched,
    #[default]
    Unwatched,
}

impl WatchStatus {
    pub fn toggled(self) -> Self {
        match self {
            WatchStatus::Watched => WatchStatus::Unwatched,
            WatchStatus::Unwatched => WatchStatus::Watched,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WatchStatus::Watched => "watched",
            WatchStatus::Unwatched => "unwatched",
        }
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    /// List row thumbnail.
    Thumbnail,
    /// Detail view poster.
    Full,
}

impl PosterSize {
    fn segment(self) -> &'static str {
        match self {
            PosterSize::Thumbnail => "w92",
            PosterSize::Full => "w500",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            PosterSize::Thumbnail => "https://via.placeholder.com/92x138?text=No+Image",
            PosterSize::Full => "https://via.placeholder.com/400x600?text=No+Image",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub status: WatchStatus,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl Movie {
    /// Image URL for the poster, or the placeholder when no path is set.
    /// An empty `poster_path` counts as absent.
    pub fn poster_url(&self, size: PosterSize) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => {
                format!("{}/{}{}", POSTER_BASE, size.segment(), path)
            }
            _ => size.placeholder().to_string(),
        }
    }
}
