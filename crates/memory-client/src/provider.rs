//! The `MemoryProvider` trait defines the interface for memory service
//! backends (the HTTP client, or a test double).

use async_trait::async_trait;
use mnemo_domain::error::Result;
use serde_json::Value;

use crate::client::MemoryClient;
use crate::types::{CreateOptions, ListOptions, MemoryId, SearchOptions, UpdateOptions};

/// Abstraction over the memory service's tool surface.
///
/// Hold an `Arc<dyn MemoryProvider>` to swap the real [`MemoryClient`] for
/// an in-memory fake in tests.
#[async_trait]
pub trait MemoryProvider: Send + Sync {
    /// Store a new memory (`memory_create`).
    async fn create(&self, content: String, options: CreateOptions) -> Result<Value>;

    /// Fetch one memory (`memory_get`).
    async fn get(&self, id: MemoryId) -> Result<Value>;

    /// Patch a memory (`memory_update`).
    async fn update(&self, id: MemoryId, options: UpdateOptions) -> Result<Value>;

    /// Remove a memory (`memory_delete`).
    async fn delete(&self, id: MemoryId) -> Result<()>;

    /// Page through memories (`memory_list`).
    async fn list(&self, options: ListOptions) -> Result<Value>;

    /// Search memories (`memory_search`).
    async fn search(&self, query: String, options: SearchOptions) -> Result<Value>;

    /// Neighbours of a memory (`memory_related`).
    async fn related(&self, id: MemoryId) -> Result<Value>;

    /// Connect two memories (`memory_link`).
    async fn link(
        &self,
        from_id: MemoryId,
        to_id: MemoryId,
        edge_type: Option<String>,
    ) -> Result<Value>;

    /// Service-wide counters (`memory_stats`).
    async fn stats(&self) -> Result<Value>;
}

#[async_trait]
impl MemoryProvider for MemoryClient {
    async fn create(&self, content: String, options: CreateOptions) -> Result<Value> {
        MemoryClient::create(self, content, options).await
    }

    async fn get(&self, id: MemoryId) -> Result<Value> {
        MemoryClient::get(self, id).await
    }

    async fn update(&self, id: MemoryId, options: UpdateOptions) -> Result<Value> {
        MemoryClient::update(self, id, options).await
    }

    async fn delete(&self, id: MemoryId) -> Result<()> {
        MemoryClient::delete(self, id).await
    }

    async fn list(&self, options: ListOptions) -> Result<Value> {
        MemoryClient::list(self, options).await
    }

    async fn search(&self, query: String, options: SearchOptions) -> Result<Value> {
        MemoryClient::search(self, query, options).await
    }

    async fn related(&self, id: MemoryId) -> Result<Value> {
        MemoryClient::related(self, id).await
    }

    async fn link(
        &self,
        from_id: MemoryId,
        to_id: MemoryId,
        edge_type: Option<String>,
    ) -> Result<Value> {
        MemoryClient::link(self, from_id, to_id, edge_type.as_deref()).await
    }

    async fn stats(&self) -> Result<Value> {
        MemoryClient::stats(self).await
    }
}
