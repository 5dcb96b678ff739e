//! Remote object storage for the upload disposal.
//!
//! The disposal only needs "put this local file under that name"; [`ObjectStore`] is that seam.
//! [`AzureBlobStore`] implements it against the Azure Blob REST API with a SAS token.

use crate::Error;
use crate::internal;
use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Contents of the JSON file passed as the `azure` disposal parameter.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UploadConfig {
    /// Account endpoint, e.g. `https://account.blob.core.windows.net`.
    pub endpoint: String,
    /// Container every object is written into.
    pub container: String,
    /// Shared access signature query string, without the leading `?`.
    #[serde(default)]
    pub sas_token: Option<String>,
}

impl UploadConfig {
    /// # Errors
    /// `Config` when the file can't be read, `Payload` when it isn't the expected JSON.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "{} should be a readable upload configuration file (keys: endpoint, container, sas_token): {e}",
                path.display()
            ))
        })?;
        let config: Self = serde_json::from_str(&json)?;
        if config.container.trim().is_empty() {
            return Err(Error::Config("upload container name is empty".to_string()));
        }
        Ok(config)
    }
}

pub trait ObjectStore {
    /// Writes `local` as `object` in `container`, overwriting whatever is there.
    ///
    /// # Errors
    /// `Io` if the local file can't be read, `Upload` on any remote failure.
    fn upload(&self, container: &str, local: &Path, object: &str) -> Result<(), Error>;
}

/// Azure Blob Storage over plain HTTPS.
pub struct AzureBlobStore {
    client: Client,
    endpoint: Url,
    sas_token: Option<String>,
}

impl AzureBlobStore {
    const TIMEOUT: Duration = Duration::from_secs(60);

    /// Validates the endpoint and makes sure the container exists (creating it private).
    ///
    /// # Errors
    /// `Config` for a malformed endpoint, `Upload` when the service can't be reached.
    pub fn connect(config: &UploadConfig) -> Result<Self, Error> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint '{}': {e}", config.endpoint)))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "invalid endpoint '{}'",
                config.endpoint
            )));
        }

        let client = Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| Error::Upload(e.to_string()))?;

        let store = Self {
            client,
            endpoint,
            sas_token: config.sas_token.clone(),
        };
        store.ensure_container(&config.container)?;
        Ok(store)
    }

    fn url(&self, segments: &[&str], extra_query: Option<&str>) -> Result<Url, Error> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("invalid endpoint '{}'", self.endpoint)))?
            .pop_if_empty()
            .extend(segments);

        let query: Vec<&str> = extra_query
            .into_iter()
            .chain(self.sas_token.as_deref().map(|t| t.trim_start_matches('?')))
            .filter(|q| !q.is_empty())
            .collect();
        if !query.is_empty() {
            url.set_query(Some(&query.join("&")));
        }
        Ok(url)
    }

    fn ensure_container(&self, container: &str) -> Result<(), Error> {
        let url = self.url(&[container], Some("restype=container"))?;
        let response = self
            .client
            .put(url)
            .header("x-ms-version", "2021-08-06")
            .header(reqwest::header::CONTENT_LENGTH, "0")
            .send()
            .map_err(|e| Error::Upload(e.to_string()))?;

        match response.status() {
            s if s.is_success() => {
                internal::debug("AZURE", &format!("Created container {container}"));
                Ok(())
            }
            StatusCode::CONFLICT => Ok(()),
            s => Err(Error::Upload(format!("creating container {container}: HTTP {s}"))),
        }
    }
}

impl ObjectStore for AzureBlobStore {
    fn upload(&self, container: &str, local: &Path, object: &str) -> Result<(), Error> {
        let body = fs::read(local)?;
        let url = self.url(&[container, object], None)?;
        let response = self
            .client
            .put(url)
            .header("x-ms-version", "2021-08-06")
            .header("x-ms-blob-type", "BlockBlob")
            .body(body)
            .send()
            .map_err(|e| Error::Upload(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(Error::Upload(format!("{object}: HTTP {status} {text}")));
        }
        internal::debug("AZURE", &format!("Uploaded {object} to {container}"));
        Ok(())
    }
}
