//! `mnemo-client` — typed client for the memory service's JSON-RPC API.
//!
//! Every operation becomes one `tools/call` request posted to
//! `<endpoint>/v1/mcp` with a bearer credential and the tenant slug. The
//! response envelope is unwrapped into its `result`, or into a single
//! [`Error`] for transport, application and timeout failures.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use mnemo_client::{ClientConfig, CreateOptions, MemoryClient, SearchOptions};
//!
//! # async fn example() -> mnemo_client::Result<()> {
//! let cfg = ClientConfig::new("https://memory.example.com", "sk-live-123", "acme");
//! let client = MemoryClient::new(&cfg)?;
//!
//! let created = client
//!     .create("prefers tea over coffee", CreateOptions::default().with_tags(["prefs"]))
//!     .await?;
//! let hits = client.search("tea", SearchOptions::default().with_limit(5)).await?;
//! println!("{created} / {hits}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod protocol;
pub mod provider;
pub mod types;

// ── Re-exports for ergonomic imports ─────────────────────────────────

pub use client::MemoryClient;
pub use mnemo_domain::config::ClientConfig;
pub use mnemo_domain::error::{Error, Result};
pub use provider::MemoryProvider;
pub use types::{CreateOptions, ListOptions, MemoryId, Metadata, SearchOptions, UpdateOptions};
