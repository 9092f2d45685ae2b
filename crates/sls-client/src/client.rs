//! SLS API client
//!
//! Implements the System Layout Service REST client: the full state dump,
//! the hardware listing, and create-or-update of hardware and networks.
//! Based on the SLS API structure: /v1/dumpstate, /v1/hardware and /v1/networks

use crate::config::ClientConfig;
use crate::error::SlsError;
use crate::models::*;
use crate::sls_trait::SlsClientTrait;
use crate::transport::HttpTransport;
use crate::user_agent::set_user_agent;
use crate::xname;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, Request, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Status codes an operation accepts as success
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Ok,
    // PUT either creates (201) or updates (200); callers are not told which
    OkOrCreated,
}

impl Expect {
    fn accepts(self, status: StatusCode) -> bool {
        match self {
            Self::Ok => status == StatusCode::OK,
            Self::OkOrCreated => status == StatusCode::OK || status == StatusCode::CREATED,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Ok => "200",
            Self::OkOrCreated => "200 or 201",
        }
    }
}

/// A response whose body has already been read off the connection
struct Drained {
    body: Result<Vec<u8>, reqwest::Error>,
}

impl Drained {
    fn decode<R: DeserializeOwned>(self) -> Result<R, SlsError> {
        let bytes = self.body?;
        serde_json::from_slice(&bytes).map_err(SlsError::Decode)
    }

    fn discard(self) {
        if let Err(e) = self.body {
            debug!("Ignoring unreadable response body: {}", e);
        }
    }
}

/// Reject network names that cannot serve as a URL path key
pub(crate) fn validate_network_name(name: &str) -> Result<(), SlsError> {
    if name.is_empty() {
        return Err(SlsError::Validation("network has empty network name".to_string()));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(SlsError::Validation(format!(
            "network name contains spaces ({name})"
        )));
    }
    Ok(())
}

/// SLS API client
///
/// Cheap to share: all state is immutable after construction, so one client
/// can serve concurrent callers as long as the transport can.
pub struct SlsClient<T = Client> {
    transport: T,
    config: ClientConfig,
    validate_xname: fn(&str) -> bool,
}

impl<T: HttpTransport> SlsClient<T> {
    /// Create a new SLS client
    ///
    /// # Arguments
    /// * `base_url` - SLS base URL (e.g., "http://cray-sls")
    /// * `transport` - HTTP transport the requests are sent through
    /// * `instance_name` - Name of the calling service, sent as the User-Agent
    pub fn new(base_url: impl Into<String>, transport: T, instance_name: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(base_url, instance_name), transport)
    }

    /// Create a client from a loaded configuration
    pub fn from_config(mut config: ClientConfig, transport: T) -> Self {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        Self {
            transport,
            config,
            validate_xname: xname::is_valid,
        }
    }

    /// Attach `Authorization: Bearer <token>` to every subsequent request.
    ///
    /// An empty token disables the header.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.config.api_token = Some(token.into());
        self
    }

    /// Replace the xname validator used by [`SlsClient::put_hardware`]
    #[must_use]
    pub fn with_xname_validator(mut self, validate: fn(&str) -> bool) -> Self {
        self.validate_xname = validate;
        self
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the configured instance name
    pub fn instance_name(&self) -> &str {
        &self.config.instance_name
    }

    fn build_request(
        &self,
        method: Method,
        path: &[&str],
        body: Option<Vec<u8>>,
    ) -> Result<Request, SlsError> {
        let base = &self.config.base_url;
        let mut url = Url::parse(base)
            .map_err(|e| SlsError::Construction(format!("invalid base URL {base}: {e}")))?;
        // Each element becomes exactly one percent-encoded path segment
        url.path_segments_mut()
            .map_err(|()| SlsError::Construction(format!("base URL {base} cannot carry a path")))?
            .pop_if_empty()
            .extend(path);

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        set_user_agent(headers, &self.config.instance_name)?;

        if let Some(token) = self.config.bearer_token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|e| {
                SlsError::Construction(format!("API token is not a valid header value: {e}"))
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }

    /// Send one request and drain its response.
    ///
    /// The body is read off the connection before the status is checked so
    /// the connection goes back to the pool on every path.
    async fn send(
        &self,
        method: Method,
        path: &[&str],
        body: Option<Vec<u8>>,
        expect: Expect,
    ) -> Result<Drained, SlsError> {
        let request = self.build_request(method, path, body)?;
        let target = format!("{} {}", request.method(), request.url());
        debug!("{}", target);

        let response = self.transport.execute(request).await?;
        let status = response.status();
        let body = response.bytes().await.map(Vec::from);
        debug!("{} -> {}", target, status);

        if !expect.accepts(status) {
            return Err(SlsError::UnexpectedStatus {
                status: status.as_u16(),
                expected: expect.describe(),
            });
        }

        Ok(Drained { body })
    }

    /// Fetch a full snapshot of the service state
    ///
    /// # Returns
    /// * `Ok(SlsState)` - All hardware and networks known to SLS
    /// * `Err(SlsError)` - If the request fails or the body does not decode
    pub async fn get_dump_state(&self) -> Result<SlsState, SlsError> {
        debug!("Fetching SLS dump state");
        self.send(Method::GET, &["v1", "dumpstate"], None, Expect::Ok)
            .await?
            .decode()
    }

    /// List every hardware record
    ///
    /// An empty inventory may be sent as `null`; it decodes to an empty list.
    pub async fn get_all_hardware(&self) -> Result<Vec<GenericHardware>, SlsError> {
        debug!("Fetching all hardware from SLS");
        let hardware: Option<Vec<GenericHardware>> = self
            .send(Method::GET, &["v1", "hardware"], None, Expect::Ok)
            .await?
            .decode()?;
        Ok(hardware.unwrap_or_default())
    }

    /// Create or update a hardware record, keyed by its xname
    ///
    /// The xname is validated locally first; an invalid one fails without
    /// contacting the service. Both 200 (updated) and 201 (created) are success.
    pub async fn put_hardware(&self, hardware: &GenericHardware) -> Result<(), SlsError> {
        if !(self.validate_xname)(&hardware.xname) {
            return Err(SlsError::Validation(format!(
                "hardware has invalid xname {}",
                hardware.xname
            )));
        }

        let body = serde_json::to_vec(hardware).map_err(SlsError::Serialization)?;

        debug!("Putting hardware {} to SLS", hardware.xname);
        self.send(
            Method::PUT,
            &["v1", "hardware", hardware.xname.as_str()],
            Some(body),
            Expect::OkOrCreated,
        )
        .await?
        .discard();
        Ok(())
    }

    /// Create or update a network, keyed by its name
    ///
    /// The name must be non-empty and free of whitespace. Any other reserved
    /// character is percent-encoded so the name stays a single path segment.
    pub async fn put_network(&self, network: &Network) -> Result<(), SlsError> {
        validate_network_name(&network.name)?;

        let body = serde_json::to_vec(network).map_err(SlsError::Serialization)?;

        debug!("Putting network {} to SLS", network.name);
        self.send(
            Method::PUT,
            &["v1", "networks", network.name.as_str()],
            Some(body),
            Expect::OkOrCreated,
        )
        .await?
        .discard();
        Ok(())
    }
}

impl SlsClient<Client> {
    /// Create a client backed by a fresh `reqwest::Client` with a 30s timeout
    pub fn with_default_transport(
        base_url: impl Into<String>,
        instance_name: impl Into<String>,
    ) -> Result<Self, SlsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SlsError::Http)?;

        Ok(Self::new(base_url, client, instance_name))
    }
}

impl<T> fmt::Debug for SlsClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlsClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl<T: HttpTransport> SlsClientTrait for SlsClient<T> {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn get_dump_state(&self) -> Result<SlsState, SlsError> {
        self.get_dump_state().await
    }

    async fn get_all_hardware(&self) -> Result<Vec<GenericHardware>, SlsError> {
        self.get_all_hardware().await
    }

    async fn put_hardware(&self, hardware: &GenericHardware) -> Result<(), SlsError> {
        self.put_hardware(hardware).await
    }

    async fn put_network(&self, network: &Network) -> Result<(), SlsError> {
        self.put_network(network).await
    }
}
