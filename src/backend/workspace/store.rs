//! Workspace Model and Directory
//!
//! Workspaces are the top-level tenant: a named group of users joined via an
//! invite code, holding a list of channels. Membership is append-only; there
//! is no removal path.
//!
//! The directory keeps an invite-code index next to the id index so that
//! `join_by_invite_code` can run its membership check and append under a
//! single write lock. Two concurrent joins by the same user against the same
//! code resolve to exactly one member entry; the loser sees `AlreadyMember`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Charset for invite codes: uppercase A-Z plus digits.
const INVITE_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Invite code length in characters.
const INVITE_CODE_LEN: usize = 8;

/// Membership role inside a workspace. Advisory only: nothing in the core
/// gates on it yet, but it is stored and surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Member => "Member",
        }
    }

    pub fn parse(s: &str) -> Role {
        match s {
            "Admin" => Role::Admin,
            _ => Role::Member,
        }
    }
}

/// One workspace membership entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub user_id: Uuid,
    pub role: Role,
}

/// A workspace: tenant grouping users via invite code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_by: Uuid,
    /// Opaque join token, unique per workspace, never rotated.
    pub invite_code: String,
    /// Append-only member list in join order. A user appears at most once.
    pub members: Vec<Member>,
    /// Channels created in this workspace, in creation order.
    pub channels: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Workspace {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|m| m.user_id == user_id)
    }
}

/// Outcome of an invite-code join.
#[derive(Debug, Clone)]
pub enum InviteJoin {
    /// First join: the caller is now a member.
    Joined(Workspace),
    /// The caller was already a member. Benign, not a failure.
    AlreadyMember,
    /// No workspace carries this code.
    UnknownCode,
}

#[derive(Default)]
struct DirectoryInner {
    by_id: HashMap<Uuid, Workspace>,
    by_invite_code: HashMap<String, Uuid>,
}

/// In-memory workspace store with an invite-code index.
pub struct WorkspaceDirectory {
    inner: RwLock<DirectoryInner>,
}

impl WorkspaceDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner::default()),
        }
    }

    /// Create a workspace. The creator becomes the sole `Admin` member and a
    /// fresh invite code is generated (regenerated on the off chance of a
    /// collision with an existing one).
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
        created_by: Uuid,
    ) -> Workspace {
        let mut inner = self.inner.write().await;

        let mut invite_code = generate_invite_code();
        while inner.by_invite_code.contains_key(&invite_code) {
            invite_code = generate_invite_code();
        }

        let workspace = Workspace {
            id: Uuid::new_v4(),
            name,
            description,
            created_by,
            invite_code: invite_code.clone(),
            members: vec![Member {
                user_id: created_by,
                role: Role::Admin,
            }],
            channels: Vec::new(),
            created_at: Utc::now(),
        };
        inner.by_invite_code.insert(invite_code, workspace.id);
        inner.by_id.insert(workspace.id, workspace.clone());
        workspace
    }

    /// Join a workspace by invite code.
    ///
    /// Lookup, membership check, and append all happen under one write lock,
    /// so concurrent joins by the same user cannot produce two entries.
    pub async fn join_by_invite_code(&self, user_id: Uuid, invite_code: &str) -> InviteJoin {
        let mut inner = self.inner.write().await;
        let Some(&workspace_id) = inner.by_invite_code.get(invite_code) else {
            return InviteJoin::UnknownCode;
        };
        let Some(workspace) = inner.by_id.get_mut(&workspace_id) else {
            return InviteJoin::UnknownCode;
        };
        if workspace.is_member(user_id) {
            return InviteJoin::AlreadyMember;
        }
        workspace.members.push(Member {
            user_id,
            role: Role::Member,
        });
        InviteJoin::Joined(workspace.clone())
    }

    /// Append a member directly, bypassing the invite-code path.
    /// No-op when the user is already present.
    pub async fn add_member(&self, workspace_id: Uuid, user_id: Uuid, role: Role) -> bool {
        let mut inner = self.inner.write().await;
        let Some(workspace) = inner.by_id.get_mut(&workspace_id) else {
            return false;
        };
        if workspace.is_member(user_id) {
            return false;
        }
        workspace.members.push(Member { user_id, role });
        true
    }

    /// Record a channel under its workspace, in creation order.
    pub async fn add_channel_link(&self, workspace_id: Uuid, channel_id: Uuid) {
        let mut inner = self.inner.write().await;
        if let Some(workspace) = inner.by_id.get_mut(&workspace_id) {
            if !workspace.channels.contains(&channel_id) {
                workspace.channels.push(channel_id);
            }
        }
    }

    pub async fn get(&self, id: Uuid) -> Option<Workspace> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    pub async fn is_member(&self, workspace_id: Uuid, user_id: Uuid) -> bool {
        self.inner
            .read()
            .await
            .by_id
            .get(&workspace_id)
            .map(|w| w.is_member(user_id))
            .unwrap_or(false)
    }

    /// Workspaces the user belongs to, oldest first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Vec<Workspace> {
        let inner = self.inner.read().await;
        let mut workspaces: Vec<Workspace> = inner
            .by_id
            .values()
            .filter(|w| w.is_member(user_id))
            .cloned()
            .collect();
        workspaces.sort_by_key(|w| (w.created_at, w.id));
        workspaces
    }

    /// Re-insert a workspace loaded from the database mirror at boot.
    pub async fn restore(&self, workspace: Workspace) {
        let mut inner = self.inner.write().await;
        inner
            .by_invite_code
            .insert(workspace.invite_code.clone(), workspace.id);
        inner.by_id.insert(workspace.id, workspace);
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.by_id.len()
    }
}

impl Default for WorkspaceDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate an 8-char uppercase alphanumeric invite code.
///
/// Draws randomness from a v4 UUID so no extra RNG dependency is needed; the
/// slight modulo bias is irrelevant for an opaque join token.
fn generate_invite_code() -> String {
    let bytes = *Uuid::new_v4().as_bytes();
    bytes
        .iter()
        .take(INVITE_CODE_LEN)
        .map(|b| INVITE_CODE_ALPHABET[(*b as usize) % INVITE_CODE_ALPHABET.len()] as char)
        .collect()
}
