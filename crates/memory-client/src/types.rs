//! Caller-facing options and the wire parameters built from them.
//!
//! Every optional field is `#[serde(skip_serializing_if = "Option::is_none")]`
//! on the wire struct, so an option the caller left unset never shows up as
//! a key (not even as `null`). Defaults are applied when the wire struct is
//! built, never by the transport.

use mnemo_domain::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier the service assigns to a memory.
pub type MemoryId = i64;

/// Free-form metadata attached to a memory.
pub type Metadata = Map<String, Value>;

pub const DEFAULT_MEMORY_TYPE: &str = "note";
pub const DEFAULT_LIST_LIMIT: u32 = 50;
pub const DEFAULT_LIST_OFFSET: u32 = 0;
pub const DEFAULT_SEARCH_LIMIT: u32 = 10;
pub const DEFAULT_EDGE_TYPE: &str = "related_to";

/// Tool names understood by the memory service.
pub mod tools {
    pub const MEMORY_CREATE: &str = "memory_create";
    pub const MEMORY_GET: &str = "memory_get";
    pub const MEMORY_UPDATE: &str = "memory_update";
    pub const MEMORY_DELETE: &str = "memory_delete";
    pub const MEMORY_LIST: &str = "memory_list";
    pub const MEMORY_SEARCH: &str = "memory_search";
    pub const MEMORY_RELATED: &str = "memory_related";
    pub const MEMORY_LINK: &str = "memory_link";
    pub const MEMORY_STATS: &str = "memory_stats";
}

/// Serialize a parameter struct into the `arguments` object of a call.
pub fn to_arguments<P: Serialize>(params: &P) -> Result<Map<String, Value>> {
    match serde_json::to_value(params)? {
        Value::Object(map) => Ok(map),
        other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
            "tool arguments must be a JSON object, got {other}"
        ))
        .into()),
    }
}

/// JSON has no NaN or infinity; serde_json would write them as `null`.
fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Options
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Optional fields for [`create`](crate::MemoryClient::create).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOptions {
    /// Defaults to `"note"`.
    pub memory_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub workspace: Option<String>,
    pub metadata: Option<Metadata>,
    pub importance: Option<f64>,
}

impl CreateOptions {
    pub fn with_memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = Some(memory_type.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Non-finite values are dropped when the request is built.
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }
}

/// Fields to change in [`update`](crate::MemoryClient::update). Unset
/// fields are left untouched by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateOptions {
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub metadata: Option<Metadata>,
    pub importance: Option<f64>,
}

impl UpdateOptions {
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Non-finite values are dropped when the request is built.
    pub fn with_importance(mut self, importance: f64) -> Self {
        self.importance = Some(importance);
        self
    }
}

/// Paging and filters for [`list`](crate::MemoryClient::list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Defaults to 50.
    pub limit: Option<u32>,
    /// Defaults to 0.
    pub offset: Option<u32>,
    pub workspace: Option<String>,
    pub memory_type: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ListOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_memory_type(mut self, memory_type: impl Into<String>) -> Self {
        self.memory_type = Some(memory_type.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Defaults to 10.
    pub limit: Option<u32>,
    pub workspace: Option<String>,
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Wire parameters
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// `memory_create` arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateParams {
    pub content: String,
    pub memory_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
}

impl CreateParams {
    pub fn new(content: impl Into<String>, options: CreateOptions) -> Self {
        Self {
            content: content.into(),
            memory_type: options
                .memory_type
                .unwrap_or_else(|| DEFAULT_MEMORY_TYPE.to_owned()),
            tags: options.tags,
            workspace: options.workspace,
            metadata: options.metadata,
            importance: finite(options.importance),
        }
    }
}

/// Arguments for the single-id tools: `memory_get`, `memory_delete` and
/// `memory_related`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdParams {
    pub id: MemoryId,
}

/// `memory_update` arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateParams {
    pub id: MemoryId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
}

impl UpdateParams {
    pub fn new(id: MemoryId, options: UpdateOptions) -> Self {
        Self {
            id,
            content: options.content,
            tags: options.tags,
            metadata: options.metadata,
            importance: finite(options.importance),
        }
    }
}

/// `memory_list` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListParams {
    pub limit: u32,
    pub offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl From<ListOptions> for ListParams {
    fn from(options: ListOptions) -> Self {
        Self {
            limit: options.limit.unwrap_or(DEFAULT_LIST_LIMIT),
            offset: options.offset.unwrap_or(DEFAULT_LIST_OFFSET),
            workspace: options.workspace,
            memory_type: options.memory_type,
            tags: options.tags,
        }
    }
}

/// `memory_search` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    pub query: String,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>, options: SearchOptions) -> Self {
        Self {
            query: query.into(),
            limit: options.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
            workspace: options.workspace,
        }
    }
}

/// `memory_link` arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkParams {
    pub from_id: MemoryId,
    pub to_id: MemoryId,
    pub edge_type: String,
}

impl LinkParams {
    pub fn new(from_id: MemoryId, to_id: MemoryId, edge_type: Option<String>) -> Self {
        Self {
            from_id,
            to_id,
            edge_type: edge_type.unwrap_or_else(|| DEFAULT_EDGE_TYPE.to_owned()),
        }
    }
}

/// `memory_stats` takes no arguments; serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsParams {}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
