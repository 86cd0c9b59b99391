//! Database Operations for Users
//!
//! Postgres mirror of the user directory. Writes happen best-effort after
//! the in-memory insert; loads happen once at boot.

use sqlx::PgPool;

use crate::backend::auth::users::User;

/// Save a user to the database
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user` - User to save
///
/// # Returns
/// Result indicating success or failure
pub async fn save_user(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(user.id)
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load all users from the database
///
/// # Arguments
/// * `pool` - Database connection pool
///
/// # Returns
/// Vector of users, or error
pub async fn load_users(pool: &PgPool) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, created_at
        FROM users
        ORDER BY created_at ASC
        "#,
    )
    .fetch_all(pool)
    .await
}
