//! Where content files are retrieved from

use std::path::PathBuf;
use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;

/// Why a content file could not be retrieved
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{path} responded with status {status}")]
    Status { path: String, status: u16 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("request for {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid content URL {0}")]
    Url(String),
}

/// Origin of the content files
#[derive(Debug, Clone)]
pub enum ContentSource {
    /// Paths resolved against a local directory
    Directory(PathBuf),
    /// Paths resolved against a base URL
    Http { base: Url, client: Client },
}

impl ContentSource {
    /// Build an HTTP source. The base is treated as a directory URL.
    pub fn http(base: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{}/", base)
        };
        let base = Url::parse(&base).map_err(|_| FetchError::Url(base.clone()))?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|source| FetchError::Transport {
            path: base.to_string(),
            source,
        })?;

        Ok(ContentSource::Http { base, client })
    }

    /// Retrieve the raw text of one content file
    pub async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        match self {
            ContentSource::Directory(dir) => {
                let full_path = dir.join(path);
                // Invalid UTF-8 is replaced, as for HTTP bodies
                match tokio::fs::read(&full_path).await {
                    Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        Err(FetchError::Status {
                            path: path.to_string(),
                            status: 404,
                        })
                    }
                    Err(source) => Err(FetchError::Io {
                        path: path.to_string(),
                        source,
                    }),
                }
            }
            ContentSource::Http { base, client } => {
                let url = base
                    .join(path)
                    .map_err(|_| FetchError::Url(format!("{}{}", base, path)))?;

                let transport = |source| FetchError::Transport {
                    path: path.to_string(),
                    source,
                };

                let response = client.get(url).send().await.map_err(transport)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        path: path.to_string(),
                        status: status.as_u16(),
                    });
                }

                response.text().await.map_err(transport)
            }
        }
    }

    /// Human-readable origin, for logs
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Directory(dir) => dir.display().to_string(),
            ContentSource::Http { base, .. } => base.to_string(),
        }
    }
}
