//! Store traits for the bills backend

use crate::core::bill::Bill;
use crate::core::error::StoreError;
use async_trait::async_trait;
use std::sync::Arc;

/// Bills collection exposed by a store
///
/// Implementations are free to hit a remote API or answer from memory.
#[async_trait]
pub trait BillsResource: Send + Sync {
    /// List the bills of the connected user, in backend order
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;
}

/// Entry point to the backend collections
pub trait Store: Send + Sync {
    /// Access the bills collection
    fn bills(&self) -> Arc<dyn BillsResource>;
}
