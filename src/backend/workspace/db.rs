//! Database Operations for Workspaces
//!
//! Best-effort mirror of the in-memory workspace directory. Writes happen
//! after the in-memory commit; reads happen once at boot to rebuild the
//! directory. Member rows live in `workspace_members` keyed on
//! `(workspace_id, user_id)`, which backs the at-most-once membership
//! invariant on the database side as well.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::workspace::store::{Member, Role, Workspace};

/// Save a workspace row. Member rows are saved separately.
pub async fn save_workspace(pool: &PgPool, workspace: &Workspace) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO workspaces (id, name, description, created_by, invite_code, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(workspace.id)
    .bind(&workspace.name)
    .bind(&workspace.description)
    .bind(workspace.created_by)
    .bind(&workspace.invite_code)
    .bind(workspace.created_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Save one membership entry. Idempotent on `(workspace_id, user_id)`.
pub async fn save_workspace_member(
    pool: &PgPool,
    workspace_id: Uuid,
    user_id: Uuid,
    role: Role,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO workspace_members (workspace_id, user_id, role, joined_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (workspace_id, user_id) DO NOTHING
        "#,
    )
    .bind(workspace_id)
    .bind(user_id)
    .bind(role.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

/// Load all workspaces with their member lists, oldest workspace first.
///
/// Channel links are not loaded here; the channel loader re-attaches them so
/// that both sides agree on creation order.
pub async fn load_workspaces(pool: &PgPool) -> Result<Vec<Workspace>, sqlx::Error> {
    #[derive(sqlx::FromRow)]
    struct WorkspaceRow {
        id: Uuid,
        name: String,
        description: Option<String>,
        created_by: Uuid,
        invite_code: String,
        created_at: DateTime<Utc>,
    }

    #[derive(sqlx::FromRow)]
    struct MemberRow {
        workspace_id: Uuid,
        user_id: Uuid,
        role: String,
    }

    let workspace_rows = sqlx::query_as::<_, WorkspaceRow>(
        r#"
        SELECT id, name, description, created_by, invite_code, created_at
        FROM workspaces
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let member_rows = sqlx::query_as::<_, MemberRow>(
        r#"
        SELECT workspace_id, user_id, role
        FROM workspace_members
        ORDER BY joined_at ASC, user_id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut workspaces: Vec<Workspace> = workspace_rows
        .into_iter()
        .map(|row| Workspace {
            id: row.id,
            name: row.name,
            description: row.description,
            created_by: row.created_by,
            invite_code: row.invite_code,
            members: Vec::new(),
            channels: Vec::new(),
            created_at: row.created_at,
        })
        .collect();

    for row in member_rows {
        if let Some(workspace) = workspaces.iter_mut().find(|w| w.id == row.workspace_id) {
            workspace.members.push(Member {
                user_id: row.user_id,
                role: Role::parse(&row.role),
            });
        }
    }

    Ok(workspaces)
}
