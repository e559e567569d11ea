//! Blocking HTTP GET over libcurl.
//!
//! One `HttpClient` is built at startup and passed by reference to the listing
//! source and the item fetcher. Each request gets its own easy handle.

use crate::config::RcdConfig;
use crate::control::AbortToken;
use curl::easy::Easy;
use std::time::Duration;

/// Request settings shared by every GET of a run.
#[derive(Debug, Clone)]
pub struct HttpClient {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

/// Fully buffered response (listing pages are small).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl HttpClient {
    pub fn new(user_agent: impl Into<String>, connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.into(),
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &RcdConfig) -> Self {
        Self::new(
            cfg.user_agent.clone(),
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }

    fn easy(&self, url: &str, follow_redirects: bool) -> Result<Easy, curl::Error> {
        let mut easy = Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(follow_redirects)?;
        if follow_redirects {
            easy.max_redirections(10)?;
        }
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        Ok(easy)
    }

    /// GET with the body buffered in memory. With `follow_redirects` false a
    /// 3xx is returned as-is.
    pub fn get(&self, url: &str, follow_redirects: bool) -> Result<HttpResponse, curl::Error> {
        let mut body = Vec::new();
        let mut easy = self.easy(url, follow_redirects)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }
        let status = easy.response_code()?;
        tracing::debug!(url, status, bytes = body.len(), "GET complete");
        Ok(HttpResponse { status, body })
    }

    /// GET streaming the body into `sink`, following redirects. Returns the
    /// final status code. When `sink` returns false the transfer stops and
    /// curl reports a write error.
    ///
    /// `abort` is also polled from the progress callback, which libcurl calls
    /// at least once per second even while no bytes arrive, so a stalled or
    /// connecting transfer stops shortly after an abort request.
    pub fn get_streaming<F>(
        &self,
        url: &str,
        abort: &AbortToken,
        mut sink: F,
    ) -> Result<u32, curl::Error>
    where
        F: FnMut(&[u8]) -> bool,
    {
        let mut easy = self.easy(url, true)?;
        easy.progress(true)?;
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| Ok(if sink(data) { data.len() } else { 0 }))?;
            transfer.progress_function(|_, _, _, _| !abort.is_aborted())?;
            transfer.perform()?;
        }
        easy.response_code()
    }
}
