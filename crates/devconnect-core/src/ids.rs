use uuid::Uuid;

use crate::errors::AppError;

/// Parses a path identifier.
///
/// A malformed id cannot name an existing resource, so it is reported with
/// the caller's not-found message rather than as a bad request.
pub fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(anyhow::anyhow!(not_found.to_string())))
}
