use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_RESUMES: &str = r#"
CREATE TABLE IF NOT EXISTS resumes (
    id          UUID PRIMARY KEY,
    title       TEXT NOT NULL,
    data        JSONB NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the tables the resume store needs, if missing.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_RESUMES).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}
