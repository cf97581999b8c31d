use std::{future::Future, time::Duration};

use tracing::debug;

use crate::{Error, Outcome, ProbeError, Result, heuristics};

/// Gmail endpoint that leaks whether a mailbox exists
pub const GMAIL_ENDPOINT: &str = "https://mail.google.com/mail/gxlu";

const TIMEOUT: Duration = Duration::from_secs(15);

/// Something that can tell whether an address exists.
///
/// Workers only talk to the network through this trait.
pub trait Probe: Send + Sync + 'static {
    fn verify(&self, address: &str) -> impl Future<Output = Outcome> + Send;
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL, the address is attached as `email` query parameter
    pub endpoint: String,
    /// Upper bound for a single probe, connecting included
    pub timeout: Duration,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment
    pub system_proxy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: GMAIL_ENDPOINT.to_owned(),
            timeout: TIMEOUT,
            system_proxy: true,
        }
    }
}

/// Probe backed by a real HTTP client.
/// Cloning is cheap, clones share the connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: String,
}

impl Client {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .default_headers(heuristics::browser_headers())
            .timeout(config.timeout);

        if !config.system_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            http: builder.build().map_err(Error::HttpClient)?,
            endpoint: config.endpoint,
        })
    }

    /// Check if the given email address exists
    pub async fn check(&self, address: &str) -> Outcome {
        match self.query(address).await {
            Ok(true) => Outcome::Valid,
            Ok(false) => Outcome::Invalid,
            Err(error) => Outcome::Error(error),
        }
    }

    async fn query(&self, address: &str) -> std::result::Result<bool, ProbeError> {
        let request = self
            .http
            .get(&self.endpoint)
            .query(&[("email", address)])
            .build()?;

        debug!(%address, url = %request.url(), "issuing query");
        let response = self.http.execute(request).await?;
        debug!(%address, status = %response.status(), "got response");

        Ok(heuristics::mailbox_disclosed(response.headers()))
    }
}

impl Probe for Client {
    async fn verify(&self, address: &str) -> Outcome {
        self.check(address).await
    }
}
