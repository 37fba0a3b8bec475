//! Response capability the guard uses to build deny responses.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Status code of every deny response.
pub const DENY_STATUS: u16 = 403;

/// Headers attached to every deny response.
pub const DENY_HEADERS: [(&str, &str); 4] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "OPTIONS, POST, GET"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Content-Type", "plain/text"),
];

/// A host response object under construction.
pub trait GuardResponse {
    fn append_header(&mut self, key: &str, value: &str);
    fn set_status_code(&mut self, code: u16);
    fn set_body(&mut self, body: &str);
}

/// Creates fresh host responses.
///
/// Any `Fn() -> R` works, so `HttpResponse::default` can be passed directly.
pub trait ResponseFactory {
    type Response: GuardResponse;

    fn create(&self) -> Self::Response;
}

impl<F, R> ResponseFactory for F
where
    F: Fn() -> R,
    R: GuardResponse,
{
    type Response = R;

    fn create(&self) -> R {
        self()
    }
}

/// Turn `response` into a 403 deny response carrying `message`.
pub fn deny<R: GuardResponse + ?Sized>(response: &mut R, message: &str) {
    for (key, value) in DENY_HEADERS {
        response.append_header(key, value);
    }
    response.set_status_code(DENY_STATUS);
    response.set_body(message);
}

/// Plain response value that converts into an axum response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    status_code: Option<u16>,
    headers: Vec<(String, String)>,
    body: String,
}

impl HttpResponse {
    /// Status code, 200 when never set.
    pub fn status_code(&self) -> u16 {
        self.status_code.unwrap_or(200)
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl GuardResponse for HttpResponse {
    fn append_header(&mut self, key: &str, value: &str) {
        self.headers.push((key.to_string(), value.to_string()));
    }

    fn set_status_code(&mut self, code: u16) {
        self.status_code = Some(code);
    }

    fn set_body(&mut self, body: &str) {
        self.body = body.to_string();
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        for (key, value) in self.headers {
            match (
                HeaderName::try_from(key.as_str()),
                HeaderValue::try_from(value.as_str()),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().append(name, value);
                }
                _ => tracing::warn!(header = %key, "Dropping invalid response header"),
            }
        }

        response
    }
}
