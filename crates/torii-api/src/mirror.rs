//! Mirror existence check: a HEAD request with no body transfer.

use reqwest::Client;

use crate::traits::StreamProbe;

/// HEAD-request probe against mirror candidate URLs.
///
/// Any transport failure counts as "dead" — inside the stream cascade an
/// error and an unreachable mirror mean the same thing: try the next one.
pub struct HeadProbe {
    http: Client,
}

impl HeadProbe {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Build with a preconfigured HTTP client (timeouts, user agent).
    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for HeadProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamProbe for HeadProbe {
    async fn probe(&self, url: &str) -> bool {
        match self.http.head(url).send().await {
            Ok(resp) => {
                let live = resp.status().is_success();
                tracing::debug!(%url, status = resp.status().as_u16(), live, "mirror probe");
                live
            }
            Err(e) => {
                tracing::debug!(%url, error = %e, "mirror probe failed");
                false
            }
        }
    }
}
