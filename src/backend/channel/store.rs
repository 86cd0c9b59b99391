//! Channel Model and Directory
//!
//! Channels are named rooms inside a workspace. Channel membership is the
//! canonical authority for reading history, posting, and joining the live
//! room; it is kept as a hash set so the per-message authorization check is
//! a constant-time lookup under a read lock.
//!
//! Membership is append-only. The creator is the first member; everyone else
//! arrives through the member-add endpoint.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A channel: a named message room inside a workspace.
#[derive(Debug, Clone)]
pub struct Channel {
    pub id: Uuid,
    pub name: String,
    pub workspace_id: Uuid,
    pub created_by: Uuid,
    /// Users allowed to read, post, and join the live room.
    pub members: HashSet<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Channel {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.contains(&user_id)
    }
}

/// In-memory channel store.
pub struct ChannelDirectory {
    inner: RwLock<HashMap<Uuid, Channel>>,
}

impl ChannelDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    /// Create a channel. The creator becomes the first member.
    pub async fn create(&self, name: String, workspace_id: Uuid, created_by: Uuid) -> Channel {
        let mut inner = self.inner.write().await;
        let channel = Channel {
            id: Uuid::new_v4(),
            name,
            workspace_id,
            created_by,
            members: HashSet::from([created_by]),
            created_at: Utc::now(),
        };
        inner.insert(channel.id, channel.clone());
        channel
    }

    pub async fn get(&self, id: Uuid) -> Option<Channel> {
        self.inner.read().await.get(&id).cloned()
    }

    /// Membership in one lookup: `None` when the channel does not exist,
    /// otherwise whether the user is a member.
    pub async fn membership(&self, channel_id: Uuid, user_id: Uuid) -> Option<bool> {
        self.inner
            .read()
            .await
            .get(&channel_id)
            .map(|c| c.is_member(user_id))
    }

    /// Add a member. `None` when the channel does not exist; otherwise
    /// `true` when newly added, `false` when the user was already a member.
    pub async fn add_member(&self, channel_id: Uuid, user_id: Uuid) -> Option<bool> {
        let mut inner = self.inner.write().await;
        let channel = inner.get_mut(&channel_id)?;
        Some(channel.members.insert(user_id))
    }

    /// Channels of a workspace in creation order.
    pub async fn list_for_workspace(&self, workspace_id: Uuid) -> Vec<Channel> {
        let inner = self.inner.read().await;
        let mut channels: Vec<Channel> = inner
            .values()
            .filter(|c| c.workspace_id == workspace_id)
            .cloned()
            .collect();
        channels.sort_by_key(|c| (c.created_at, c.id));
        channels
    }

    /// Re-insert a channel loaded from the database mirror at boot.
    pub async fn restore(&self, channel: Channel) {
        self.inner.write().await.insert(channel.id, channel);
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.len()
    }
}

impl Default for ChannelDirectory {
    fn default() -> Self {
        Self::new()
    }
}
