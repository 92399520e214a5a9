// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer: how resources reach a BMC.

use async_trait::async_trait;
use http::Method;
use http::StatusCode;
use serde_json::Value;
use slog::debug;
use slog::o;
use slog::Logger;
use slog_error_chain::SlogInlineError;
use thiserror::Error;

/// Errors produced by a [`Connector`].
///
/// These pass through resource operations untranslated; see
/// [`crate::Error::Connector`].
#[derive(Debug, Error, SlogInlineError)]
pub enum ConnectorError {
    #[error("error building HTTP client: {err}")]
    BuildClient {
        #[source]
        err: reqwest::Error,
    },
    #[error("{method} {url} failed: {err}")]
    Request {
        method: Method,
        url: String,
        #[source]
        err: reqwest::Error,
    },
    #[error("{method} {url} returned {status}")]
    Status { method: Method, url: String, status: StatusCode },
    #[error("error deserializing response from {url}: {err}")]
    Deserialize {
        url: String,
        #[source]
        err: reqwest::Error,
    },
}

/// A transport able to fetch and post JSON documents by resource path.
///
/// [`HttpConnector`] is the production implementation; tests substitute
/// their own. Implementations are stateless per call and hold no resource
/// state.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// Fetch the JSON document at `path`.
    async fn get(&self, path: &str) -> Result<Value, ConnectorError>;

    /// Post `body` to `path`.
    ///
    /// Response bodies are not interpreted; a success status is all the
    /// caller learns.
    async fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<(), ConnectorError>;
}

/// Configuration for [`HttpConnector`].
#[derive(Clone, Debug)]
pub struct HttpConnectorConfig {
    /// Base URL of the BMC, e.g. `https://10.0.0.1` or `http://[::1]:8000`.
    /// Resource paths from documents are appended to this verbatim.
    pub base_url: String,
    /// Username for HTTP basic auth, if the BMC requires it.
    pub username: Option<String>,
    /// Password for HTTP basic auth.
    pub password: Option<String>,
    /// Accept self-signed or otherwise invalid TLS certificates, which many
    /// BMCs ship with out of the box.
    pub accept_invalid_certs: bool,
}

impl HttpConnectorConfig {
    /// Config for an unauthenticated connector with certificate
    /// verification on.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: None,
            password: None,
            accept_invalid_certs: false,
        }
    }
}

/// [`Connector`] over HTTP(S).
pub struct HttpConnector {
    client: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
    log: Logger,
}

impl HttpConnector {
    pub fn new(
        config: HttpConnectorConfig,
        log: &Logger,
    ) -> Result<Self, ConnectorError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|err| ConnectorError::BuildClient { err })?;
        let base_url = config.base_url.trim_end_matches('/').to_string();
        let log = log.new(o!("base_url" => base_url.clone()));
        Ok(Self {
            client,
            base_url,
            username: config.username,
            password: config.password,
            log,
        })
    }

    fn url_for(&self, path: &str) -> String {
        // Paths extracted from Redfish documents are absolute.
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn apply_auth(
        &self,
        req: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        match &self.username {
            Some(username) => {
                req.basic_auth(username, self.password.as_deref())
            }
            None => req,
        }
    }

    async fn execute(
        &self,
        method: Method,
        req: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response, ConnectorError> {
        let response =
            self.apply_auth(req).send().await.map_err(|err| {
                ConnectorError::Request {
                    method: method.clone(),
                    url: url.to_string(),
                    err,
                }
            })?;
        let status = response.status();
        debug!(
            self.log, "client response";
            "method" => %method,
            "uri" => url,
            "status" => %status,
        );
        if !status.is_success() {
            return Err(ConnectorError::Status {
                method,
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Connector for HttpConnector {
    async fn get(&self, path: &str) -> Result<Value, ConnectorError> {
        let url = self.url_for(path);
        debug!(
            self.log, "client request";
            "method" => %Method::GET,
            "uri" => &url,
        );
        let response = self
            .execute(Method::GET, self.client.get(&url), &url)
            .await?;
        response
            .json()
            .await
            .map_err(|err| ConnectorError::Deserialize { url, err })
    }

    async fn post(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<(), ConnectorError> {
        let url = self.url_for(path);
        debug!(
            self.log, "client request";
            "method" => %Method::POST,
            "uri" => &url,
            "body" => %body,
        );
        self.execute(Method::POST, self.client.post(&url).json(body), &url)
            .await?;
        Ok(())
    }
}
