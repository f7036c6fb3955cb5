//! Low-level HTTP client: turns [`Operation`] values into requests and
//! decodes the response shapes the server produces.

use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::{MyrrixError, Result};
use crate::operation::Operation;

/// HTTP client bound to one Myrrix serving instance.
///
/// Holds the connection settings fixed at construction: host, port,
/// and optional basic-auth credentials. All request execution and
/// response decoding for [`MyrrixService`](crate::MyrrixService) goes
/// through here; the client itself keeps no per-call state, so it can
/// be shared by reference.
pub struct MyrrixClient {
    client: Client,
    base_url: String,
    credentials: Option<(String, String)>,
}

impl Default for MyrrixClient {
    fn default() -> Self {
        Self::new("localhost", 8080)
    }
}

impl MyrrixClient {
    /// Client for `http://{host}:{port}` with default settings.
    pub fn new(host: &str, port: u16) -> Self {
        Self::builder(host, port).build()
    }

    pub fn builder(host: &str, port: u16) -> MyrrixClientBuilder {
        MyrrixClientBuilder {
            host: host.to_string(),
            port,
            credentials: None,
            timeout: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends the request for `op` and returns the raw response.
    /// Transport failures map to [`MyrrixError::Network`]; status codes
    /// are left for the caller to interpret.
    pub async fn execute(&self, op: &Operation<'_>) -> Result<Response> {
        let url = format!("{}{}", self.base_url, op.path());
        log::debug!("{} {}", op.method(), url);

        let mut request = self.client.request(op.method(), &url);
        if let Some((username, password)) = &self.credentials {
            request = request.basic_auth(username, Some(password));
        }
        if let Some((key, value)) = op.query() {
            request = request.query(&[(key, value)]);
        }
        if let Some(body) = op.body() {
            request = request.body(body);
        }

        Ok(request.send().await?)
    }

    /// Executes `op` and decodes the body as JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, op: &Operation<'_>) -> Result<T> {
        let response = check_status(self.execute(op).await?)?;
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Executes `op` and decodes the body as newline-separated floats.
    pub async fn fetch_floats(&self, op: &Operation<'_>) -> Result<Vec<f64>> {
        let response = check_status(self.execute(op).await?)?;
        let text = response.text().await?;
        parse_float_lines(&text)
    }

    /// Executes `op` and decodes the body as a single float.
    pub async fn fetch_scalar(&self, op: &Operation<'_>) -> Result<f64> {
        let response = check_status(self.execute(op).await?)?;
        let text = response.text().await?;
        parse_float(text.trim())
    }

    /// Executes `op` and reports only whether the server accepted it.
    /// Non-2xx outcomes become `Ok(false)` rather than an error.
    pub async fn run(&self, op: &Operation<'_>) -> Result<bool> {
        let response = self.execute(op).await?;
        let status = response.status();
        if !status.is_success() {
            log::warn!("{} {} rejected: {}", op.method(), op.path(), status);
        }
        Ok(status.is_success())
    }
}

pub struct MyrrixClientBuilder {
    host: String,
    port: u16,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl MyrrixClientBuilder {
    /// HTTP Basic credentials sent with every request. Without this,
    /// no Authorization header is set at all.
    pub fn credentials(mut self, username: &str, password: &str) -> Self {
        self.credentials = Some((username.to_string(), password.to_string()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> MyrrixClient {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        MyrrixClient {
            client: builder.build().unwrap(),
            base_url: format!("http://{}:{}", self.host, self.port),
            credentials: self.credentials,
        }
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(MyrrixError::Status(status.as_u16()))
    }
}

/// Splits a line-oriented body on `\n` or `\r\n` and parses each
/// non-blank line as a float.
fn parse_float_lines(text: &str) -> Result<Vec<f64>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_float)
        .collect()
}

fn parse_float(text: &str) -> Result<f64> {
    text.parse::<f64>()
        .map_err(|e| MyrrixError::Decode(format!("invalid float {:?}: {}", text, e)))
}
