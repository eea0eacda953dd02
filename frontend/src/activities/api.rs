use gloo_net::http::{Request, Response};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use thiserror::Error;

use super::types::{Directory, ErrorBody, SignupReceipt};

/// Bytes left untouched by the browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Errors surfaced by the activity endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request did not complete or its body could not be read.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// A successful response whose body does not match the expected schema.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// The three operations the page performs against the activity service.
#[allow(async_fn_in_trait)]
pub trait ActivityApi {
    async fn list_activities(&self) -> Result<Directory, ApiError>;

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReceipt, ApiError>;

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError>;
}

/// URL builder for the activity endpoints below a base such as
/// `https://school.example` (or empty for same-origin relative paths).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn directory(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup(&self, activity: &str, email: &str) -> String {
        self.membership(activity, "signup", email)
    }

    pub fn unregister(&self, activity: &str, email: &str) -> String {
        self.membership(activity, "unregister", email)
    }

    fn membership(&self, activity: &str, action: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/{action}?email={}",
            self.base,
            utf8_percent_encode(activity, URI_COMPONENT),
            utf8_percent_encode(email, URI_COMPONENT),
        )
    }
}

pub fn parse_directory(body: &str) -> Result<Directory, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Malformed(err.to_string()))
}

pub fn parse_receipt(body: &str) -> Result<SignupReceipt, ApiError> {
    serde_json::from_str(body).map_err(|err| ApiError::Malformed(err.to_string()))
}

/// Extract the `detail` message from a failure body, if there is one.
pub fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail)
}

/// `ActivityApi` backed by the browser's fetch through `gloo-net`.
#[derive(Debug, Clone)]
pub struct HttpActivityApi {
    endpoints: Endpoints,
}

impl HttpActivityApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            endpoints: Endpoints::new(base),
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl ActivityApi for HttpActivityApi {
    async fn list_activities(&self) -> Result<Directory, ApiError> {
        let response = Request::get(&self.endpoints.directory())
            .send()
            .await
            .map_err(ApiError::transport)?;
        let body = successful_body(response).await?;
        parse_directory(&body)
    }

    async fn sign_up(&self, activity: &str, email: &str) -> Result<SignupReceipt, ApiError> {
        let url = self.endpoints.signup(activity, email);
        log::debug!("POST {url}");
        let response = Request::post(&url)
            .send()
            .await
            .map_err(ApiError::transport)?;
        let body = successful_body(response).await?;
        parse_receipt(&body)
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        let url = self.endpoints.unregister(activity, email);
        log::debug!("DELETE {url}");
        let response = Request::delete(&url)
            .send()
            .await
            .map_err(ApiError::transport)?;
        successful_body(response).await.map(|_| ())
    }
}

/// Read the body of a 2xx response, or turn anything else into `Rejected`.
async fn successful_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    if response.ok() {
        return response.text().await.map_err(ApiError::transport);
    }

    // An unreadable failure body still counts as a rejection without detail.
    let detail = match response.text().await {
        Ok(body) => parse_detail(&body),
        Err(err) => {
            log::warn!("unreadable error body for status {status}: {err}");
            None
        }
    };
    Err(ApiError::Rejected { status, detail })
}
