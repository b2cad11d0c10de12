use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::schema::ResumeData;

/// Raw `resumes` table row; `data` is the document as stored JSONB.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub title: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored resume with its decoded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub title: String,
    pub data: ResumeData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for create and replace.
#[derive(Debug, Clone, Deserialize)]
pub struct ResumeInput {
    pub title: String,
    #[serde(default)]
    pub data: ResumeData,
}

impl TryFrom<ResumeRow> for ResumeRecord {
    type Error = serde_json::Error;

    fn try_from(row: ResumeRow) -> Result<Self, Self::Error> {
        Ok(ResumeRecord {
            id: row.id,
            title: row.title,
            data: serde_json::from_value(row.data)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}
