//! Resume persistence behind a swappable backend.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`, picked at startup from config.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord};

pub use memory::MemoryResumeStore;
pub use postgres::PgResumeStore;

/// Implement this to add a storage backend without touching the handlers.
/// Lookups of ids that do not exist return `AppError::NotFound`.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn create(&self, input: ResumeInput) -> Result<ResumeRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<ResumeRecord, AppError>;

    async fn update(&self, id: Uuid, input: ResumeInput) -> Result<ResumeRecord, AppError>;

    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// All resumes, most recently updated first.
    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError>;
}

pub(crate) fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Resume {id} not found"))
}
