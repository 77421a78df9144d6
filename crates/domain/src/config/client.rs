use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Memory service connection
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Connection settings for one memory service client.
///
/// `endpoint`, `api_key` and `tenant` are required; `timeout_ms` falls
/// back to 30 seconds when omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the service, e.g. `https://memory.example.com`.
    /// A trailing slash is tolerated.
    pub endpoint: String,
    /// Bearer credential sent as `Authorization: Bearer <api_key>`.
    pub api_key: String,
    /// Tenant slug sent on every request.
    pub tenant: String,
    #[serde(default = "d_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        tenant: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            tenant: tenant.into(),
            timeout_ms: d_timeout_ms(),
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The endpoint without its trailing slash.
    pub fn base_url(&self) -> &str {
        self.endpoint.strip_suffix('/').unwrap_or(&self.endpoint)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: d_endpoint(),
            api_key: String::new(),
            tenant: d_tenant(),
            timeout_ms: d_timeout_ms(),
        }
    }
}

// ── default helpers ─────────────────────────────────────────────────

fn d_endpoint() -> String {
    "http://localhost:8080".into()
}
fn d_tenant() -> String {
    "default".into()
}

fn d_timeout_ms() -> u64 {
    super::DEFAULT_TIMEOUT_MS
}
