/******************************************************************************
   Author: Dashboard Platform Team
   Date: 18/10/26
******************************************************************************/

//! Request descriptors and the transport call
//!
//! A [`RequestOptions`] is kept by value for the whole lifetime of a call so
//! that the single retry after a token refresh can rebuild the exact same
//! request. Bodies are therefore stored in a re-sendable form: JSON values,
//! raw bytes, or a [`FormData`] description that is turned into a fresh
//! multipart form on every attempt.

use crate::application::rate_limiter::RateLimiter;
use crate::error::AppError;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Empty query for GET requests without parameters
pub const NO_PARAMS: &[(&str, &str)] = &[];

/// Body of an outbound request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON; the client sets `Content-Type: application/json`
    Json(Value),
    /// Sent as `multipart/form-data`; the boundary header comes from the transport
    Form(FormData),
    /// Sent unmodified; the caller owns the content type
    Raw(Vec<u8>),
}

impl RequestBody {
    /// Serializes any value into a JSON body
    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, AppError> {
        Ok(RequestBody::Json(serde_json::to_value(body)?))
    }

    /// True when the client must not force a JSON content type
    #[must_use]
    pub fn is_form_encoded(&self) -> bool {
        !matches!(self, RequestBody::Json(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: Option<String>,
        bytes: Vec<u8>,
    },
}

/// Re-sendable description of a multipart form
///
/// ```
/// use dashboard_client::model::http::FormData;
///
/// let form = FormData::new()
///     .text("name", "Shelf A")
///     .file("image", "shelf.png", vec![0x89, 0x50]);
/// assert_eq!(form.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    parts: Vec<FormPart>,
}

impl FormData {
    /// Empty form
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a text field
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a file field, letting the transport guess nothing about its type
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime: None,
            bytes,
        });
        self
    }

    /// Adds a file field with an explicit MIME type
    #[must_use]
    pub fn file_with_mime(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            mime: Some(mime.into()),
            bytes,
        });
        self
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True when the form has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Builds a new multipart form for one attempt
    pub fn to_multipart(&self) -> Result<Form, AppError> {
        let mut form = Form::new();
        for part in &self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
                FormPart::File {
                    name,
                    file_name,
                    mime,
                    bytes,
                } => {
                    let mut file = Part::bytes(bytes.clone()).file_name(file_name.clone());
                    if let Some(mime) = mime {
                        file = file.mime_str(mime).map_err(|e| {
                            AppError::InvalidInput(format!("invalid mime type {mime}: {e}"))
                        })?;
                    }
                    form.part(name.clone(), file)
                }
            };
        }
        Ok(form)
    }
}

/// Method, body, header overrides and query parameters of one request
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Optional body
    pub body: Option<RequestBody>,
    /// Caller headers; they win over the ones the client sets
    pub headers: HeaderMap,
    /// Query parameters appended to the URL when non-empty
    pub query: Vec<(String, String)>,
    force_form_encoded: bool,
}

impl RequestOptions {
    /// Options for `method` with no body, headers or query
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            query: Vec::new(),
            force_form_encoded: false,
        }
    }

    /// Sets the body
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` as JSON
    pub fn with_json<B: Serialize + ?Sized>(self, body: &B) -> Result<Self, AppError> {
        Ok(self.with_body(RequestBody::json(body)?))
    }

    /// Sends `form` as multipart form data
    #[must_use]
    pub fn with_form(self, form: FormData) -> Self {
        self.with_body(RequestBody::Form(form))
    }

    /// Adds a caller header, replacing any client default of the same name
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, AppError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| AppError::InvalidInput(format!("invalid header name {name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| AppError::InvalidInput(format!("invalid header value: {e}")))?;
        self.headers.append(name, value);
        Ok(self)
    }

    /// Appends query parameters, keeping their order
    #[must_use]
    pub fn with_query<K, V>(mut self, params: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: ToString,
    {
        self.query.extend(
            params
                .iter()
                .map(|(k, v)| (k.as_ref().to_string(), v.to_string())),
        );
        self
    }

    /// Marks the body as already encoded even if it is JSON-shaped
    #[must_use]
    pub fn form_encoded(mut self) -> Self {
        self.force_form_encoded = true;
        self
    }

    /// True when the JSON content type must be left out
    #[must_use]
    pub fn is_form_encoded(&self) -> bool {
        self.force_form_encoded
            || self
                .body
                .as_ref()
                .is_some_and(RequestBody::is_form_encoded)
    }
}

/// Builds the headers of one attempt
///
/// Order of precedence, lowest first: `Content-Type: application/json`
/// (skipped for form-encoded bodies), `Authorization: Bearer <token>` (skipped
/// without a token), caller overrides.
pub fn build_headers(
    access_token: Option<&str>,
    form_encoded: bool,
    overrides: &HeaderMap,
) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

    if !form_encoded {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    if let Some(token) = access_token {
        let value = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| AppError::InvalidInput(format!("invalid access token: {e}")))?;
        headers.insert(AUTHORIZATION, value);
    }

    for name in overrides.keys() {
        headers.remove(name);
    }
    for (name, value) in overrides {
        headers.append(name.clone(), value.clone());
    }

    Ok(headers)
}

/// Position of one call in the refresh-then-retry cycle
///
/// ```text
/// Issuing  -- non-401 --> Done
/// Issuing  -- 401 -----> Refreshing
/// Refreshing -- ok ----> Retrying -- any status --> Done
/// Refreshing -- fail --> LoggedOut
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// First attempt in flight
    Issuing,
    /// First attempt got a 401; refreshing the access token
    Refreshing,
    /// Refresh succeeded; the single retry is in flight
    Retrying,
    /// A response is handed to the caller
    Done,
    /// The session could not be recovered
    LoggedOut,
}

impl RequestState {
    /// Next state after a response with `status`
    #[must_use]
    pub fn on_response(self, status: StatusCode) -> Self {
        match self {
            RequestState::Issuing if status == StatusCode::UNAUTHORIZED => {
                RequestState::Refreshing
            }
            RequestState::Issuing | RequestState::Retrying => RequestState::Done,
            other => other,
        }
    }

    /// Next state after a refresh attempt
    #[must_use]
    pub fn on_refresh(self, refreshed: bool) -> Self {
        match self {
            RequestState::Refreshing if refreshed => RequestState::Retrying,
            RequestState::Refreshing => RequestState::LoggedOut,
            other => other,
        }
    }

    /// True once no further network call will be made
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestState::Done | RequestState::LoggedOut)
    }
}

/// Sends one request, waiting for the rate limiter first
///
/// The response is returned unopened whatever its status. Only transport
/// failures are errors.
pub async fn make_http_request(
    client: &Client,
    rate_limiter: &RateLimiter,
    method: Method,
    url: &str,
    headers: HeaderMap,
    query: &[(String, String)],
    body: Option<&RequestBody>,
) -> Result<Response, AppError> {
    rate_limiter.wait().await;

    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    if !query.is_empty() {
        request = request.query(query);
    }

    request = match body {
        // Content type comes from `headers`, so a forced form-encoded JSON body goes out bare
        Some(RequestBody::Json(value)) => request.body(serde_json::to_vec(value)?),
        Some(RequestBody::Form(form)) => request.multipart(form.to_multipart()?),
        Some(RequestBody::Raw(bytes)) => request.body(bytes.clone()),
        None => request,
    };

    // Applied after the body so caller headers replace the multipart content type
    request = request.headers(headers);

    match request.send().await {
        Ok(response) => {
            debug!("Response status: {}", response.status());
            Ok(response)
        }
        Err(e) => {
            error!("Request to {} failed: {}", url, e);
            Err(AppError::Transport(e))
        }
    }
}

/// Reads the whole body and decodes it as JSON
///
/// Decoding failures are [`AppError::Json`]; only a failure to read the body
/// is a transport error.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
