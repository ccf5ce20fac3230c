//! HTTP status code table.
//!
//! The codes handlers reach for most often, named so call sites read the
//! same regardless of whether they pass a constant or a raw code.

use axum::http::StatusCode;

use crate::http::error::{ResponseError, ResponseResult};

pub const OK: StatusCode = StatusCode::OK;
pub const CREATED: StatusCode = StatusCode::CREATED;
pub const NO_CONTENT: StatusCode = StatusCode::NO_CONTENT;
pub const BAD_REQUEST: StatusCode = StatusCode::BAD_REQUEST;
pub const UNAUTHORIZED: StatusCode = StatusCode::UNAUTHORIZED;
pub const FORBIDDEN: StatusCode = StatusCode::FORBIDDEN;
pub const NOT_FOUND: StatusCode = StatusCode::NOT_FOUND;
pub const CONFLICT: StatusCode = StatusCode::CONFLICT;
pub const INTERNAL_SERVER_ERROR: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;

/// Convert a caller-supplied numeric code into a [`StatusCode`].
///
/// Anything outside `100..=999` is rejected.
pub fn parse_code(code: u16) -> ResponseResult<StatusCode> {
    StatusCode::from_u16(code).map_err(|_| ResponseError::InvalidStatus(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_codes() {
        assert_eq!(parse_code(200).unwrap(), OK);
        assert_eq!(parse_code(404).unwrap(), NOT_FOUND);
        assert_eq!(parse_code(401).unwrap(), UNAUTHORIZED);
    }

    #[test]
    fn test_parse_unregistered_code() {
        // Non-standard but in range
        assert_eq!(parse_code(599).unwrap().as_u16(), 599);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(parse_code(99), Err(ResponseError::InvalidStatus(99))));
        assert!(matches!(parse_code(1000), Err(ResponseError::InvalidStatus(1000))));
    }
}
