//! Presence integration tests
//!
//! Online state is per user, not per session: the first session brings a
//! user online, only the last one leaving takes them offline, and every
//! transition broadcasts a full snapshot to all connected sessions.

use assert_matches::assert_matches;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use huddle::backend::server::AppState;
use huddle::shared::ServerEvent;

fn drain(rx: &mut UnboundedReceiver<ServerEvent>) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// The `online` sets of every presence snapshot in the batch.
fn snapshots(events: &[ServerEvent]) -> Vec<Vec<Uuid>> {
    events
        .iter()
        .filter_map(|event| match event {
            ServerEvent::PresenceSnapshot { online } => Some(online.clone()),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_connect_delivers_initial_snapshot() {
    let state = AppState::new(None);
    let alice = Uuid::new_v4();

    let (_session, mut rx) = state.hub.connect(alice, "alice".to_string()).await;

    let events = drain(&mut rx);
    assert_eq!(events.len(), 1);
    assert_matches!(&events[0], ServerEvent::PresenceSnapshot { online } if online == &vec![alice]);
}

#[tokio::test]
async fn test_transitions_broadcast_to_everyone() {
    let state = AppState::new(None);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let (_alice_session, mut alice_rx) = state.hub.connect(alice, "alice".to_string()).await;
    drain(&mut alice_rx);

    let (bob_session, mut bob_rx) = state.hub.connect(bob, "bob".to_string()).await;

    // Both sides see the same two-user snapshot.
    let mut expected = vec![alice, bob];
    expected.sort();
    assert_eq!(snapshots(&drain(&mut alice_rx)), [expected.clone()]);
    assert_eq!(snapshots(&drain(&mut bob_rx)), [expected]);

    state.hub.disconnect(bob_session).await;
    assert_eq!(snapshots(&drain(&mut alice_rx)), [vec![alice]]);
    assert!(!state.hub.is_online(bob));
}

#[tokio::test]
async fn test_extra_sessions_cause_no_broadcasts() {
    let state = AppState::new(None);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let (first, mut first_rx) = state.hub.connect(alice, "alice".to_string()).await;
    let (_bob_session, mut bob_rx) = state.hub.connect(bob, "bob".to_string()).await;
    drain(&mut first_rx);
    drain(&mut bob_rx);

    // A second session for alice: she is already online, so nobody else
    // hears about it, but the new session still gets its own snapshot.
    let (second, mut second_rx) = state.hub.connect(alice, "alice".to_string()).await;
    assert_eq!(snapshots(&drain(&mut bob_rx)).len(), 0);
    assert_eq!(snapshots(&drain(&mut second_rx)).len(), 1);

    // Closing the extra session changes nothing either.
    state.hub.disconnect(second).await;
    assert_eq!(snapshots(&drain(&mut bob_rx)).len(), 0);
    assert!(state.hub.is_online(alice));

    // Only the last session going away takes alice offline, exactly once.
    state.hub.disconnect(first).await;
    let offline_snapshots = snapshots(&drain(&mut bob_rx));
    assert_eq!(offline_snapshots, [vec![bob]]);
}

#[tokio::test]
async fn test_disconnect_is_idempotent() {
    let state = AppState::new(None);
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    let (alice_session, _alice_rx) = state.hub.connect(alice, "alice".to_string()).await;
    let (_bob_session, mut bob_rx) = state.hub.connect(bob, "bob".to_string()).await;
    drain(&mut bob_rx);

    state.hub.disconnect(alice_session).await;
    state.hub.disconnect(alice_session).await;

    // Exactly one offline broadcast despite the repeated disconnect.
    assert_eq!(snapshots(&drain(&mut bob_rx)), [vec![bob]]);
    assert_eq!(state.hub.session_count(), 1);
}
