use super::http_request::request_common::RequestError;

/// A simple wrapper around `reqwest::Client` used to manage HTTP requests
/// with a preconfigured base URL and default settings.
///
/// This client is used for all command calls towards the autopilot bridge.
#[derive(Debug)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Base URL for the bridge, prepended to all endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Request timeout; an unanswered command counts as a transport failure afterwards.
    const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);

    /// Constructs a new `HTTPClient` with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` – The root URL for all HTTP requests (e.g., `"http://localhost:8080"`).
    pub(crate) fn new(base_url: &str) -> Result<HTTPClient, RequestError> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().timeout(Self::REQUEST_TIMEOUT).build()?,
            base_url: String::from(base_url.trim_end_matches('/')),
        })
    }

    /// Returns a reference to the internal `reqwest::Client`.
    pub(crate) fn client(&self) -> &reqwest::Client { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
    /// Joins the base URL with an endpoint path.
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }
}
