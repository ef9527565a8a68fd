//! Host collaborator interface
//!
//! The node runs inside a workflow host that owns item delivery,
//! parameter resolution, credential storage, and scheduling. Everything
//! the node needs from the host is expressed here as a trait so any host
//! (workflow engine, CLI, test harness) can drive the same core.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{Credentials, NodeParameters};
use crate::error::Result;

/// A named binary payload attached to an input item
#[derive(Debug, Clone)]
pub struct BinaryPayload {
    /// Raw file contents
    pub data: Vec<u8>,
    /// File name embedded by whatever produced the payload
    pub file_name: Option<String>,
    /// MIME type embedded by whatever produced the payload
    pub mime_type: Option<String>,
}

impl BinaryPayload {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            file_name: None,
            mime_type: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

/// One unit of work handed to the node by the host
#[derive(Debug, Clone, Default)]
pub struct InputItem {
    binary: HashMap<String, BinaryPayload>,
}

impl InputItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a binary payload under the given property name
    pub fn with_binary(mut self, property: impl Into<String>, payload: BinaryPayload) -> Self {
        self.binary.insert(property.into(), payload);
        self
    }

    /// Looks up a binary payload by property name
    pub fn binary(&self, property: &str) -> Option<&BinaryPayload> {
        self.binary.get(property)
    }
}

/// Services the workflow host provides to the node
///
/// The node processes items strictly sequentially and suspends only via
/// [`sleep`](NodeHost::sleep), so a host controls all timing. Tests mock
/// this trait to script batches and count suspensions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NodeHost: Send + Sync {
    /// The batch of input items, in processing order
    fn items(&self) -> Vec<InputItem>;

    /// Parameters resolved for one item
    fn parameters(&self, item_index: usize) -> NodeParameters;

    /// Stored credentials, fetched once per batch
    fn credentials(&self) -> Result<Credentials>;

    /// Whether an item-level failure becomes an error row instead of
    /// aborting the batch
    fn continue_on_fail(&self) -> bool;

    /// Cooperative delay between status polls
    async fn sleep(&self, duration: Duration);
}
