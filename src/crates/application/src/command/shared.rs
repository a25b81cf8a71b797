use crate::error::AppError;
use async_trait::async_trait;

/// Process-wide id source for new aggregates.
#[async_trait]
pub trait IdGenerator: Send + Sync {
    async fn next_id(&self) -> Result<i64, AppError>;
}
