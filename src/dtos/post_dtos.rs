use serde::Deserialize;

use crate::errors::ApiError;

/// Raw query-string parameters for every `/posts.*` route. Both fields are
/// optional at the extraction stage; the accessors below do the presence and
/// parse checks so a malformed request becomes a 400 before any storage access.
#[derive(Debug, Default, Deserialize)]
pub struct PostQuery {
    pub id: Option<String>,
    pub content: Option<String>,
}

impl PostQuery {
    /// Presence check first, then base-10 parse. An empty or non-numeric `id`
    /// (or one that overflows the `serial` column) is a bad request, never a
    /// server fault.
    pub fn id(&self) -> Result<i32, ApiError> {
        let raw = self.id.as_deref().ok_or(ApiError::BadRequest)?;
        raw.parse().map_err(|_| ApiError::BadRequest)
    }

    pub fn content(&self) -> Result<&str, ApiError> {
        self.content.as_deref().ok_or(ApiError::BadRequest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(id: Option<&str>, content: Option<&str>) -> PostQuery {
        PostQuery {
            id: id.map(str::to_owned),
            content: content.map(str::to_owned),
        }
    }

    #[test]
    fn missing_id_is_bad_request() {
        assert!(matches!(query(None, None).id(), Err(ApiError::BadRequest)));
    }

    #[test]
    fn non_numeric_id_is_bad_request() {
        assert!(matches!(
            query(Some("abc"), None).id(),
            Err(ApiError::BadRequest)
        ));
    }

    #[test]
    fn empty_id_is_bad_request() {
        assert!(matches!(query(Some(""), None).id(), Err(ApiError::BadRequest)));
    }

    #[test]
    fn overflowing_id_is_bad_request() {
        assert!(matches!(
            query(Some("4294967296"), None).id(),
            Err(ApiError::BadRequest)
        ));
    }

    #[test]
    fn numeric_id_parses() {
        assert_eq!(query(Some("42"), None).id().unwrap(), 42);
        assert_eq!(query(Some("-5"), None).id().unwrap(), -5);
    }

    #[test]
    fn missing_content_is_bad_request() {
        assert!(matches!(
            query(None, None).content(),
            Err(ApiError::BadRequest)
        ));
    }

    #[test]
    fn empty_content_passes_presence_check() {
        assert_eq!(query(None, Some("")).content().unwrap(), "");
    }
}
