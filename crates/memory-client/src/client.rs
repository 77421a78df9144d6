//! HTTP implementation of the memory service client.
//!
//! `MemoryClient` turns each typed operation into one `tools/call`
//! JSON-RPC request posted to `<endpoint>/v1/mcp`, under a deadline scoped
//! to that single call.
//!
//! | Method    | Tool name        |
//! |-----------|------------------|
//! | `create`  | `memory_create`  |
//! | `get`     | `memory_get`     |
//! | `update`  | `memory_update`  |
//! | `delete`  | `memory_delete`  |
//! | `list`    | `memory_list`    |
//! | `search`  | `memory_search`  |
//! | `related` | `memory_related` |
//! | `link`    | `memory_link`    |
//! | `stats`   | `memory_stats`   |

use std::time::{Duration, Instant};

use mnemo_domain::config::ClientConfig;
use mnemo_domain::error::{Error, Result};
use mnemo_domain::trace::{CallOutcome, TraceEvent};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::protocol::{ToolCallRequest, ToolCallResponse};
use crate::types::{
    to_arguments, tools, CreateOptions, CreateParams, IdParams, LinkParams, ListOptions,
    ListParams, MemoryId, SearchOptions, SearchParams, StatsParams, UpdateOptions, UpdateParams,
};

/// Path of the JSON-RPC endpoint, appended to the configured base URL.
pub const MCP_PATH: &str = "/v1/mcp";

/// Header carrying the tenant slug.
pub const TENANT_HEADER: &str = "X-Tenant-Slug";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Client
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Client for the memory service.
///
/// Created once and shared; cloning is cheap and clones share the
/// connection pool. All state is read-only after [`MemoryClient::new`], so
/// concurrent calls never contend.
#[derive(Debug, Clone)]
pub struct MemoryClient {
    http: Client,
    /// Full request URL, `<endpoint>/v1/mcp`.
    url: String,
    timeout: Duration,
}

impl MemoryClient {
    /// Build a client from `cfg`. No network access happens here.
    ///
    /// Fails only if the API key or tenant cannot be encoded as an HTTP
    /// header value. A malformed endpoint surfaces on the first call.
    pub fn new(cfg: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))
            .map_err(|e| Error::Config(format!("invalid API key header: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let tenant = HeaderValue::from_str(&cfg.tenant)
            .map_err(|e| Error::Config(format!("invalid tenant header: {e}")))?;
        headers.insert(TENANT_HEADER, tenant);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client build failed: {e}")))?;

        let url = format!("{}{MCP_PATH}", cfg.base_url());

        TraceEvent::ClientCreated {
            endpoint: cfg.base_url().to_owned(),
            tenant: cfg.tenant.clone(),
            timeout_ms: cfg.timeout_ms,
        }
        .emit();

        Ok(Self {
            http,
            url,
            timeout: Duration::from_millis(cfg.timeout_ms),
        })
    }

    /// The URL every request is posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured per-call deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    // ── core primitive ───────────────────────────────────────────────

    /// Call `tool` with `arguments` and return the unwrapped `result`.
    ///
    /// A missing `result` comes back as [`Value::Null`]. If the deadline
    /// passes first, the in-flight request is dropped (closing its
    /// connection) and [`Error::Timeout`] is returned.
    pub async fn invoke(&self, tool: &str, arguments: Map<String, Value>) -> Result<Value> {
        let request = ToolCallRequest::new(tool, arguments);
        let start = Instant::now();

        let (status, result) = match tokio::time::timeout(self.timeout, self.round_trip(&request))
            .await
        {
            Ok(done) => done,
            Err(_elapsed) => (0, Err(Error::Timeout(self.timeout_ms()))),
        };

        let outcome = match &result {
            Ok(_) => CallOutcome::Ok,
            Err(Error::Transport { .. }) => CallOutcome::TransportError,
            Err(Error::Application(_)) => CallOutcome::ApplicationError,
            Err(Error::Timeout(_)) => CallOutcome::Timeout,
            Err(_) => CallOutcome::Failed,
        };
        TraceEvent::MemoryToolCall {
            tool: tool.to_owned(),
            status,
            duration_ms: start.elapsed().as_millis() as u64,
            outcome,
        }
        .emit();

        result
    }

    /// One POST plus envelope decoding. Returns the HTTP status seen (0 if
    /// none) alongside the outcome so the caller can trace it.
    async fn round_trip(&self, request: &ToolCallRequest) -> (u16, Result<Value>) {
        let tool = &request.params.name;
        tracing::debug!(tool = %tool, url = %self.url, "sending memory tool call");

        let resp = match self.http.post(&self.url).json(request).send().await {
            Ok(resp) => resp,
            Err(e) => return (0, Err(from_reqwest(e))),
        };

        let status = resp.status();
        if !status.is_success() {
            return (
                status.as_u16(),
                Err(Error::Transport {
                    status: status.as_u16(),
                    status_text: status.canonical_reason().unwrap_or("Unknown").to_owned(),
                }),
            );
        }

        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(e) => return (status.as_u16(), Err(from_reqwest(e))),
        };

        let result = serde_json::from_slice::<ToolCallResponse>(&body)
            .map_err(|e| {
                tracing::warn!(
                    tool = %tool,
                    body_len = body.len(),
                    error = %e,
                    "memory response parse error"
                );
                Error::from(e)
            })
            .and_then(ToolCallResponse::into_result);

        (status.as_u16(), result)
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    async fn call<P: Serialize>(&self, tool: &str, params: &P) -> Result<Value> {
        let arguments = to_arguments(params)?;
        self.invoke(tool, arguments).await
    }

    // ── typed operations ─────────────────────────────────────────────

    /// Store a new memory. `memory_type` defaults to `"note"`.
    pub async fn create(
        &self,
        content: impl Into<String>,
        options: CreateOptions,
    ) -> Result<Value> {
        self.call(tools::MEMORY_CREATE, &CreateParams::new(content, options))
            .await
    }

    pub async fn get(&self, id: MemoryId) -> Result<Value> {
        self.call(tools::MEMORY_GET, &IdParams { id }).await
    }

    /// Change the fields set in `options`; the rest stay as they are.
    pub async fn update(&self, id: MemoryId, options: UpdateOptions) -> Result<Value> {
        self.call(tools::MEMORY_UPDATE, &UpdateParams::new(id, options))
            .await
    }

    /// Delete a memory. Whatever `result` the service sends is discarded.
    pub async fn delete(&self, id: MemoryId) -> Result<()> {
        self.call(tools::MEMORY_DELETE, &IdParams { id }).await?;
        Ok(())
    }

    /// Page through memories; `limit` defaults to 50 and `offset` to 0.
    pub async fn list(&self, options: ListOptions) -> Result<Value> {
        self.call(tools::MEMORY_LIST, &ListParams::from(options)).await
    }

    /// Search memories; `limit` defaults to 10.
    pub async fn search(
        &self,
        query: impl Into<String>,
        options: SearchOptions,
    ) -> Result<Value> {
        self.call(tools::MEMORY_SEARCH, &SearchParams::new(query, options))
            .await
    }

    /// Memories connected to `id` in the service's graph.
    pub async fn related(&self, id: MemoryId) -> Result<Value> {
        self.call(tools::MEMORY_RELATED, &IdParams { id }).await
    }

    /// Add an edge between two memories. `edge_type` defaults to
    /// `"related_to"`.
    pub async fn link(
        &self,
        from_id: MemoryId,
        to_id: MemoryId,
        edge_type: Option<&str>,
    ) -> Result<Value> {
        let params = LinkParams::new(from_id, to_id, edge_type.map(str::to_owned));
        self.call(tools::MEMORY_LINK, &params).await
    }

    pub async fn stats(&self) -> Result<Value> {
        self.call(tools::MEMORY_STATS, &StatsParams::default()).await
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Error conversion helper
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Convert a `reqwest::Error` raised below the HTTP status level (connect,
/// send, body read, bad URL) into a domain `Error`.
fn from_reqwest(e: reqwest::Error) -> Error {
    Error::Http(e.to_string())
}
