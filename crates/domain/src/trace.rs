use serde::Serialize;

/// Structured trace events emitted across all mnemo crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    /// One `tools/call` round-trip against the memory service.
    MemoryToolCall {
        tool: String,
        /// HTTP status, or 0 when no response was received.
        status: u16,
        duration_ms: u64,
        outcome: CallOutcome,
    },
    ClientCreated {
        endpoint: String,
        tenant: String,
        timeout_ms: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CallOutcome {
    Ok,
    TransportError,
    ApplicationError,
    Timeout,
    Failed,
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "mnemo_event");
    }
}
