use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

pub const USER_AGENT: &str = "RingImporterBot/1.0 (+catalog import)";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed with status {status}")]
    Request { status: StatusCode, url: String },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can turn a URL into page text.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Plain GET with a fixed bot user agent. No timeout or retry beyond the
/// client defaults.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        debug!(%url, %status, "fetched");
        if !status.is_success() {
            return Err(FetchError::Request {
                status,
                url: url.to_string(),
            });
        }
        response.text().await.map_err(transport)
    }
}
