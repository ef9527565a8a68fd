//! Local-file host
//!
//! Implements the node's host interface over files on disk: one input
//! item per file, parameters taken from CLI flags, credentials from the
//! CLI configuration, and real (tokio) sleeps between polls.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::Config;
use voxflow_node::{BinaryPayload, Credentials, InputItem, NodeHost, NodeParameters};

/// Guess a video MIME type from the file extension
///
/// Unknown extensions yield `None`; the node then falls back to its
/// `video/mp4` default.
fn guess_mime_type(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "mp4" => Some("video/mp4"),
        "mov" => Some("video/quicktime"),
        "webm" => Some("video/webm"),
        "mkv" => Some("video/x-matroska"),
        "avi" => Some("video/x-msvideo"),
        _ => None,
    }
}

/// Host over a list of local files
pub struct FileHost {
    items: Vec<InputItem>,
    parameters: NodeParameters,
    credentials: Credentials,
    continue_on_fail: bool,
}

impl FileHost {
    /// Reads each file into an input item
    pub fn load(
        paths: &[impl AsRef<Path>],
        parameters: NodeParameters,
        config: &Config,
        continue_on_fail: bool,
    ) -> Result<Self> {
        let mut items = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;

            let mut payload = BinaryPayload::new(data);
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                payload = payload.with_file_name(name);
            }
            if let Some(mime) = guess_mime_type(path) {
                payload = payload.with_mime_type(mime);
            }

            items.push(InputItem::new().with_binary(parameters.binary_property.clone(), payload));
        }

        Ok(Self {
            items,
            parameters,
            credentials: Credentials::new(config.api_url.clone(), config.api_key.clone()),
            continue_on_fail,
        })
    }
}

#[async_trait]
impl NodeHost for FileHost {
    fn items(&self) -> Vec<InputItem> {
        self.items.clone()
    }

    fn parameters(&self, _item_index: usize) -> NodeParameters {
        self.parameters.clone()
    }

    fn credentials(&self) -> voxflow_node::Result<Credentials> {
        Ok(self.credentials.clone())
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime_type() {
        assert_eq!(guess_mime_type(Path::new("a.mp4")), Some("video/mp4"));
        assert_eq!(guess_mime_type(Path::new("a.webm")), Some("video/webm"));
        assert_eq!(guess_mime_type(Path::new("a.txt")), None);
        assert_eq!(guess_mime_type(Path::new("noext")), None);
    }
}
