//! Response formatting.
//!
//! # Responsibilities
//! - Write JSON payloads with the standard headers and status
//! - Write the `{"error", "message"}` envelope for application errors
//! - Issue Basic auth challenges
//!
//! # Design Decisions
//! - The outgoing response is reached only through [`ResponseHandle`], so any
//!   host response type can be written to
//! - Serialization and header errors are returned, never swallowed
//! - JSON responses expire immediately; error envelopes carry no `Expires`

use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::Response;
use serde::Serialize;

use crate::http::error::{ErrorBody, ResponseError, ResponseResult};
use crate::http::status;
use crate::observability::metrics;
use crate::serialization::{JsonSerializer, SerializeOptions};

pub const APPLICATION_JSON: &str = "application/json";

/// HTTP date for Unix time 0; a response carrying it is already stale.
pub const EXPIRED_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Setter capability over an outgoing HTTP response.
pub trait ResponseHandle {
    /// Set `name` to `value`, replacing any previous value.
    fn set_header(&mut self, name: HeaderName, value: &str) -> ResponseResult<()>;

    fn set_status(&mut self, status: StatusCode);

    fn set_body(&mut self, body: String);

    /// Mark the response as expiring immediately.
    fn expires_now(&mut self) -> ResponseResult<()> {
        self.set_header(header::EXPIRES, EXPIRED_DATE)
    }
}

impl ResponseHandle for Response {
    fn set_header(&mut self, name: HeaderName, value: &str) -> ResponseResult<()> {
        let value = HeaderValue::from_str(value).map_err(|source| ResponseError::InvalidHeader {
            name: name.to_string(),
            source,
        })?;
        self.headers_mut().insert(name, value);
        Ok(())
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn set_body(&mut self, body: String) {
        *self.body_mut() = Body::from(body);
    }
}

/// Writes standard JSON, error and challenge responses.
#[derive(Debug, Clone, Default)]
pub struct ResponseFactory {
    serializer: JsonSerializer,
}

impl ResponseFactory {
    pub fn new(serializer: JsonSerializer) -> Self {
        Self { serializer }
    }

    /// Write `data` as a 200 JSON response that expires immediately.
    pub fn write_json<H, T>(&self, handle: &mut H, data: &T) -> ResponseResult<()>
    where
        H: ResponseHandle + ?Sized,
        T: Serialize + ?Sized,
    {
        self.write_json_status(handle, status::OK, data, "json")
    }

    /// Same as [`write_json`](Self::write_json) with a caller-chosen status.
    pub fn write_json_with_status<H, T>(&self, handle: &mut H, code: u16, data: &T) -> ResponseResult<()>
    where
        H: ResponseHandle + ?Sized,
        T: Serialize + ?Sized,
    {
        let status = status::parse_code(code)?;
        self.write_json_status(handle, status, data, "json_with_status")
    }

    fn write_json_status<H, T>(
        &self,
        handle: &mut H,
        status: StatusCode,
        data: &T,
        operation: &'static str,
    ) -> ResponseResult<()>
    where
        H: ResponseHandle + ?Sized,
        T: Serialize + ?Sized,
    {
        // Serialize first so a failure leaves the handle untouched
        let body = self.serializer.serialize(data, SerializeOptions::depth_checked())?;

        handle.expires_now()?;
        handle.set_header(header::CONTENT_TYPE, APPLICATION_JSON)?;
        handle.set_status(status);
        handle.set_body(body);

        tracing::debug!(status = status.as_u16(), operation, "JSON response written");
        metrics::record_response(operation, status.as_u16());
        Ok(())
    }

    /// Write a 404 error envelope carrying `message`.
    pub fn write_not_found<H>(handle: &mut H, message: &str) -> ResponseResult<()>
    where
        H: ResponseHandle + ?Sized,
    {
        Self::write_error(handle, status::NOT_FOUND.as_u16(), message)
    }

    /// Challenge the client for Basic credentials. No body is written.
    pub fn write_unauthorized<H>(handle: &mut H, realm: &str) -> ResponseResult<()>
    where
        H: ResponseHandle + ?Sized,
    {
        let challenge = format!("Basic realm=\"{}\"", realm);
        handle.set_header(header::WWW_AUTHENTICATE, &challenge)?;
        handle.set_status(status::UNAUTHORIZED);

        tracing::warn!(realm, "Issued Basic auth challenge");
        metrics::record_response("unauthorized", status::UNAUTHORIZED.as_u16());
        Ok(())
    }

    /// Write `{"error": code, "message": message}` with status `code`.
    pub fn write_error<H>(handle: &mut H, code: u16, message: &str) -> ResponseResult<()>
    where
        H: ResponseHandle + ?Sized,
    {
        let status = status::parse_code(code)?;
        let body = serde_json::to_string(&ErrorBody { error: code, message })?;

        handle.set_header(header::CONTENT_TYPE, APPLICATION_JSON)?;
        handle.set_status(status);
        handle.set_body(body);

        tracing::debug!(status = code, error_message = message, "Error response written");
        metrics::record_response("error", code);
        Ok(())
    }

    /// Build a fresh 200 JSON response.
    pub fn json<T>(&self, data: &T) -> ResponseResult<Response>
    where
        T: Serialize + ?Sized,
    {
        let mut response = Response::default();
        self.write_json(&mut response, data)?;
        Ok(response)
    }

    /// Build a fresh JSON response with the given status.
    pub fn json_with_status<T>(&self, code: u16, data: &T) -> ResponseResult<Response>
    where
        T: Serialize + ?Sized,
    {
        let mut response = Response::default();
        self.write_json_with_status(&mut response, code, data)?;
        Ok(response)
    }

    /// Build a fresh 404 error response.
    pub fn not_found(message: &str) -> ResponseResult<Response> {
        let mut response = Response::default();
        Self::write_not_found(&mut response, message)?;
        Ok(response)
    }

    /// Build a fresh 401 Basic auth challenge.
    pub fn unauthorized(realm: &str) -> ResponseResult<Response> {
        let mut response = Response::default();
        Self::write_unauthorized(&mut response, realm)?;
        Ok(response)
    }

    /// Build a fresh error envelope response.
    pub fn error(code: u16, message: &str) -> ResponseResult<Response> {
        let mut response = Response::default();
        Self::write_error(&mut response, code, message)?;
        Ok(response)
    }
}
