use anyhow::anyhow;
use serde::de::DeserializeOwned;

use super::*;

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

impl RemoteClient {
    /// Joins percent-encoded `segments` onto the configured base URL.
    pub(super) fn url(&self, segments: &[&str]) -> Result<reqwest::Url, RemoteError> {
        let base = &self.remote.base_url;
        let mut url =
            reqwest::Url::parse(base).with_context(|| format!("parse base url {}", base))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| anyhow!("base url cannot carry a path: {}", base))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    /// Decodes a JSON reply. An `error` field wins regardless of status code,
    /// since the backend reports business errors with 4xx and 5xx alike.
    pub(super) fn read_json<T: DeserializeOwned>(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<T, RemoteError> {
        let status = resp.status();
        let bytes = resp
            .bytes()
            .with_context(|| format!("read {} body", label))?;

        if let Ok(body) = serde_json::from_slice::<ErrorBody>(&bytes) {
            return Err(RemoteError::Server(body.error));
        }
        if !status.is_success() {
            return Err(anyhow!("{} status {}", label, status).into());
        }

        let out = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {} response", label))?;
        Ok(out)
    }
}
