//! Database Operations for Messages
//!
//! Best-effort mirror of the per-channel message logs. The sender's
//! username is denormalized into the row so a boot restore rebuilds the
//! enriched message without joining against users.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::{ChatMessage, MessageSender};

/// Save a message row. Idempotent on the message id.
pub async fn save_message(pool: &PgPool, message: &ChatMessage) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO messages (id, channel_id, sender_id, sender_username, content, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(message.id)
    .bind(message.channel_id)
    .bind(message.sender.id)
    .bind(&message.sender.username)
    .bind(&message.content)
    .bind(message.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load every message across all channels, in ascending creation order with
/// the id tie-break, ready to re-append channel by channel.
pub async fn load_messages(pool: &PgPool) -> Result<Vec<ChatMessage>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct MessageRow {
        id: Uuid,
        channel_id: Uuid,
        sender_id: Uuid,
        sender_username: String,
        content: String,
        created_at: DateTime<Utc>,
    }

    let rows = sqlx::query_as::<_, MessageRow>(
        r#"
        SELECT id, channel_id, sender_id, sender_username, content, created_at
        FROM messages
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let messages = rows
        .into_iter()
        .map(|row| ChatMessage {
            id: row.id,
            channel_id: row.channel_id,
            sender: MessageSender {
                id: row.sender_id,
                username: row.sender_username,
            },
            content: row.content,
            created_at: row.created_at,
        })
        .collect();

    Ok(messages)
}
