use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord, ResumeRow};
use crate::store::{not_found, ResumeStore};

/// Stores each resume as one JSONB document in the `resumes` table.
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        PgResumeStore { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn create(&self, input: ResumeInput) -> Result<ResumeRecord, AppError> {
        let data = serde_json::to_value(&input.data)?;

        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, title, data)
            VALUES ($1, $2, $3)
            RETURNING id, title, data, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&input.title)
        .bind(&data)
        .fetch_one(&self.pool)
        .await?;

        info!("Created resume {}", row.id);
        Ok(ResumeRecord::try_from(row)?)
    }

    async fn get(&self, id: Uuid) -> Result<ResumeRecord, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, title, data, created_at, updated_at FROM resumes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(ResumeRecord::try_from(row)?)
    }

    async fn update(&self, id: Uuid, input: ResumeInput) -> Result<ResumeRecord, AppError> {
        let data = serde_json::to_value(&input.data)?;

        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            UPDATE resumes
            SET title = $2, data = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, title, data, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&data)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        info!("Updated resume {id}");
        Ok(ResumeRecord::try_from(row)?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        info!("Deleted resume {id}");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ResumeRecord>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, title, data, created_at, updated_at FROM resumes ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| ResumeRecord::try_from(row).map_err(AppError::from))
            .collect()
    }
}
