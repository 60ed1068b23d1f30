//! Request validation applied before any store call.

use crate::error::AppError;
use crate::model::{BookmarkCreate, BookmarkUpdate};

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. Shape and enum membership are already enforced by deserialization.
    pub fn validate_create(body: &BookmarkCreate) -> Result<(), AppError> {
        validate_name(&body.name)
    }

    /// Validate only the fields present in an update body. A body `id` must match the path id.
    pub fn validate_update(id: i64, body: &BookmarkUpdate) -> Result<(), AppError> {
        if let Some(body_id) = body.id {
            if body_id != id {
                return Err(AppError::Validation(format!(
                    "id in body ({}) does not match id in path ({})",
                    body_id, id
                )));
            }
        }
        if let Some(name) = &body.name {
            validate_name(name)?;
        }
        Ok(())
    }

    /// Parse a path id. Non-integer ids are a validation failure, not a missing record.
    pub fn parse_id(id_str: &str) -> Result<i64, AppError> {
        id_str
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("invalid id '{}'", id_str)))
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaType;

    fn create(name: &str) -> BookmarkCreate {
        BookmarkCreate {
            name: name.into(),
            media_type: MediaType::Podcast,
            bookmark: vec![12],
        }
    }

    #[test]
    fn rejects_blank_names() {
        assert!(RequestValidator::validate_create(&create("Serial")).is_ok());
        assert!(matches!(
            RequestValidator::validate_create(&create("")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            RequestValidator::validate_create(&create("   ")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn update_checks_only_present_fields() {
        assert!(RequestValidator::validate_update(3, &BookmarkUpdate::default()).is_ok());
        let blank = BookmarkUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(RequestValidator::validate_update(3, &blank).is_err());
    }

    #[test]
    fn update_body_id_must_match_path() {
        let same = BookmarkUpdate {
            id: Some(3),
            ..Default::default()
        };
        assert!(RequestValidator::validate_update(3, &same).is_ok());
        let other = BookmarkUpdate {
            id: Some(4),
            ..Default::default()
        };
        assert!(matches!(
            RequestValidator::validate_update(3, &other),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn parses_integer_ids_only() {
        assert_eq!(RequestValidator::parse_id("42").unwrap(), 42);
        assert!(RequestValidator::parse_id("abc").is_err());
        assert!(RequestValidator::parse_id("1.5").is_err());
    }
}
