//! Schema creation and category seeding

use sqlx::PgPool;

use crate::models::DEFAULT_CATEGORIES;

/// Create the trivia tables if absent, optionally seeding categories.
///
/// `questions.category` is a plain integer column. Whether it must point at
/// an existing category is decided by the add-question route.
pub async fn run(pool: &PgPool, seed_categories: bool) -> Result<(), sqlx::Error> {
    tracing::info!("Running trivia migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id SERIAL PRIMARY KEY,
            type TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id SERIAL PRIMARY KEY,
            question TEXT,
            answer TEXT,
            category INTEGER,
            difficulty INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)")
        .execute(pool)
        .await?;

    if seed_categories {
        seed(pool).await?;
    }

    tracing::info!("Trivia migrations complete");
    Ok(())
}

async fn seed(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for (id, label) in DEFAULT_CATEGORIES {
        sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .bind(label)
            .execute(&mut *tx)
            .await?;
    }

    // Explicit ids bypass the sequence; move it past them
    sqlx::query(
        "SELECT setval(pg_get_serial_sequence('categories', 'id'), \
         (SELECT MAX(id) FROM categories))",
    )
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    tracing::debug!(count = DEFAULT_CATEGORIES.len(), "Categories seeded");
    Ok(())
}
