use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord};
use crate::store::{not_found, ResumeStore};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryResumeStore {
    resumes: RwLock<HashMap<Uuid, ResumeRecord>>,
}

impl MemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn create(&self, input: ResumeInput) -> Result<ResumeRecord, AppError> {
        let now = Utc::now();
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            title: input.title,
            data: input.data,
            created_at: now,
            updated_at: now,
        };

        self.resumes
            .write()
            .await
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<ResumeRecord, AppError> {
        self.resumes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: Uuid, input: ResumeInput) -> Result<ResumeRecord, AppError> {
        let mut resumes = self.resumes.write().await;
        let record = resumes.get_mut(&id).ok_or_else(|| not_found(id))?;
        record.title = input.title;
        record.data = input.data;
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.resumes
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError> {
        let mut records: Vec<ResumeRecord> = self.resumes.read().await.values().cloned().collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }
}
