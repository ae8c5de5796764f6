// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport toward the Wifi module.

use std::time::Duration;

use reqwest::Client;

use crate::error::ProtocolError;
use crate::protocol::Endpoint;

/// Request header carrying the authentication token.
const TOKEN_HEADER: &str = "X-Daikin-uuid";

/// HTTP client for a single Daikin unit.
///
/// Each operation is one independent GET request; the client holds no
/// session state beyond connection parameters. Units without an
/// authentication token are reached over plain HTTP. Units that require a
/// token (newer firmware) only listen on HTTPS, with the token attached as
/// the `X-Daikin-uuid` header.
///
/// # Examples
///
/// ```no_run
/// use daikin_lib::protocol::{Endpoint, HttpClient};
///
/// # async fn example() -> Result<(), daikin_lib::error::ProtocolError> {
/// let client = HttpClient::new("192.168.1.50")?;
/// let body = client.get(Endpoint::SensorInfo, &[]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl HttpClient {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a client for an unauthenticated unit.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn new(address: impl Into<String>) -> Result<Self, ProtocolError> {
        Self::with_options(address, None, Self::DEFAULT_TIMEOUT)
    }

    /// Creates a client with an optional token and a request timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the address is empty or the HTTP client cannot be
    /// created.
    pub fn with_options(
        address: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ProtocolError> {
        let address = address.into();
        if address.is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "address is required".to_string(),
            ));
        }

        let scheme = if token.is_some() { "https" } else { "http" };
        let base_url = format!("{scheme}://{address}");

        let mut builder = Client::builder().timeout(timeout);
        if token.is_some() {
            // The unit presents a self-signed certificate that cannot be
            // verified against any public root. Verification is disabled for
            // this one connection; the trust anchor is the token, not the
            // certificate.
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    /// Returns the base URL of the unit.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs a GET against an endpoint and returns the response body.
    ///
    /// `params` are appended as URL query parameters in the given order.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the unit answers with a
    /// non-success status code.
    pub async fn get(
        &self,
        endpoint: Endpoint,
        params: &[(&'static str, String)],
    ) -> Result<String, ProtocolError> {
        let url = format!("{}{}", self.base_url, endpoint.path());

        tracing::debug!(url = %url, "Sending GET request");

        let mut request = self.client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::Status {
                path: endpoint.path().to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received response");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_scheme_without_token() {
        let client = HttpClient::new("192.168.1.50").unwrap();
        assert_eq!(client.base_url(), "http://192.168.1.50");
    }

    #[test]
    fn secure_scheme_with_token() {
        let client = HttpClient::with_options(
            "192.168.1.50",
            Some("0123456789abcdef".to_string()),
            HttpClient::DEFAULT_TIMEOUT,
        )
        .unwrap();
        assert_eq!(client.base_url(), "https://192.168.1.50");
    }

    #[test]
    fn empty_address_rejected() {
        let result = HttpClient::new("");
        assert!(matches!(result, Err(ProtocolError::InvalidAddress(_))));
    }
}
