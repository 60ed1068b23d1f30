//! Bookmark entity, request bodies, and the storage row mapping.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Closed classification of bookmarked content. Wire and storage form is the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Podcast,
    TvShow,
    Book,
    Other,
}

impl MediaType {
    pub const ALL: [MediaType; 4] = [
        MediaType::Podcast,
        MediaType::TvShow,
        MediaType::Book,
        MediaType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Podcast => "podcast",
            MediaType::TvShow => "tv_show",
            MediaType::Book => "book",
            MediaType::Other => "other",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MediaType::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown media type '{}'", s))
    }
}

/// A persisted bookmark as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = BookmarkOut)]
pub struct Bookmark {
    pub id: i64,
    pub name: String,
    pub media_type: MediaType,
    /// Progress markers, one per episode or chapter, in order.
    pub bookmark: Vec<i64>,
}

/// Body of `POST /bookmarks/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BookmarkCreate {
    pub name: String,
    pub media_type: MediaType,
    pub bookmark: Vec<i64>,
}

/// Body of `PUT /bookmarks/{id}`. Absent or null fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BookmarkUpdate {
    /// Optional; must match the id in the path when given.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub bookmark: Option<Vec<i64>>,
}

/// Row shape of the `bookmarks` table. `bookmark` is stored as JSON text.
#[derive(Debug, sqlx::FromRow)]
pub struct BookmarkRow {
    pub id: i64,
    pub name: String,
    pub media_type: String,
    pub bookmark: Json<Vec<i64>>,
}

impl TryFrom<BookmarkRow> for Bookmark {
    type Error = AppError;

    fn try_from(row: BookmarkRow) -> Result<Self, Self::Error> {
        let media_type = row
            .media_type
            .parse::<MediaType>()
            .map_err(|e| AppError::Db(sqlx::Error::Decode(e.into())))?;
        Ok(Bookmark {
            id: row.id,
            name: row.name,
            media_type,
            bookmark: row.bookmark.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_wire_names_are_lowercase() {
        let names: Vec<String> = MediaType::ALL
            .iter()
            .map(|m| serde_json::to_string(m).unwrap())
            .collect();
        assert_eq!(names, ["\"podcast\"", "\"tv_show\"", "\"book\"", "\"other\""]);
        for m in MediaType::ALL {
            assert_eq!(m.as_str().parse::<MediaType>().unwrap(), m);
        }
    }

    #[test]
    fn media_type_rejects_unknown_and_wrong_case() {
        assert!("movie".parse::<MediaType>().is_err());
        assert!(serde_json::from_str::<MediaType>("\"TV_SHOW\"").is_err());
        assert!(serde_json::from_str::<MediaType>("\"tvshow\"").is_err());
    }

    #[test]
    fn create_body_requires_every_field() {
        let ok: BookmarkCreate = serde_json::from_str(
            r#"{"name":"Blacklist","media_type":"tv_show","bookmark":[]}"#,
        )
        .unwrap();
        assert!(ok.bookmark.is_empty());
        let missing_list = r#"{"name":"x","media_type":"book"}"#;
        assert!(serde_json::from_str::<BookmarkCreate>(missing_list).is_err());
        assert!(serde_json::from_str::<BookmarkCreate>(
            r#"{"name":"x","media_type":"book","bookmark":["a"]}"#
        )
        .is_err());
    }

    #[test]
    fn update_body_fields_are_all_optional() {
        let patch: BookmarkUpdate = serde_json::from_str(r#"{"name":"The Blacklist"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("The Blacklist"));
        assert_eq!(patch.media_type, None);
        assert_eq!(patch.bookmark, None);
        let empty: BookmarkUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, BookmarkUpdate::default());
    }

    #[test]
    fn null_fields_are_treated_as_absent() {
        let patch: BookmarkUpdate =
            serde_json::from_str(r#"{"name":null,"bookmark":[2,2,3,25,39]}"#).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.bookmark, Some(vec![2, 2, 3, 25, 39]));
    }

    #[test]
    fn row_with_unknown_media_type_fails_to_decode() {
        let row = BookmarkRow {
            id: 4,
            name: "Serial".into(),
            media_type: "radio".into(),
            bookmark: Json(vec![1]),
        };
        assert!(matches!(
            Bookmark::try_from(row),
            Err(AppError::Db(sqlx::Error::Decode(_)))
        ));
    }
}
