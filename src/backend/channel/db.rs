//! Database Operations for Channels
//!
//! Best-effort mirror of the in-memory channel directory, written after the
//! in-memory commit and read once at boot. Member rows are keyed on
//! `(channel_id, user_id)` so replays cannot duplicate a membership.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashSet;
use uuid::Uuid;

use crate::backend::channel::store::Channel;

/// Save a channel row. Member rows are saved separately.
pub async fn save_channel(pool: &PgPool, channel: &Channel) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO channels (id, workspace_id, name, created_by, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(channel.id)
    .bind(channel.workspace_id)
    .bind(&channel.name)
    .bind(channel.created_by)
    .bind(channel.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Save one channel membership. Idempotent on `(channel_id, user_id)`.
pub async fn save_channel_member(
    pool: &PgPool,
    channel_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO channel_members (channel_id, user_id, joined_at)
        VALUES ($1, $2, NOW())
        ON CONFLICT (channel_id, user_id) DO NOTHING
        "#,
    )
    .bind(channel_id)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load all channels with their member sets, oldest channel first.
pub async fn load_channels(pool: &PgPool) -> Result<Vec<Channel>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct ChannelRow {
        id: Uuid,
        workspace_id: Uuid,
        name: String,
        created_by: Uuid,
        created_at: DateTime<Utc>,
    }

    #[derive(sqlx::FromRow)]
    struct MemberRow {
        channel_id: Uuid,
        user_id: Uuid,
    }

    let channel_rows = sqlx::query_as::<_, ChannelRow>(
        r#"
        SELECT id, workspace_id, name, created_by, created_at
        FROM channels
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let member_rows = sqlx::query_as::<_, MemberRow>(
        r#"
        SELECT channel_id, user_id
        FROM channel_members
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut channels: Vec<Channel> = channel_rows
        .into_iter()
        .map(|row| Channel {
            id: row.id,
            workspace_id: row.workspace_id,
            name: row.name,
            created_by: row.created_by,
            members: HashSet::new(),
            created_at: row.created_at,
        })
        .collect();

    for row in member_rows {
        if let Some(channel) = channels.iter_mut().find(|c| c.id == row.channel_id) {
            channel.members.insert(row.user_id);
        }
    }

    Ok(channels)
}
