//! Fan-out integration tests
//!
//! End to end: messages submitted over HTTP (or straight into the ingest
//! pipeline) must reach exactly the sessions subscribed to that channel's
//! room, in durable-log order.

use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use huddle::backend::messaging::submit_message;
use huddle::shared::ServerEvent;

use crate::assert_ok;
use crate::common::auth_helpers::signup_user;
use crate::common::fixtures::{
    create_channel, create_workspace, id_of, send_message, test_server_with_state,
};

/// Collects everything currently queued on a session receiver.
///
/// Delivery happens synchronously while the pipeline holds the channel log
/// guard, so once a submit has returned its frames are already here.
fn drain(rx: &mut UnboundedReceiver<ServerEvent>) -> Vec<ServerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn message_ids(events: &[ServerEvent]) -> Vec<Uuid> {
    events
        .iter()
        .filter_map(|event| match event {
            ServerEvent::Message(message) => Some(message.id),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn test_room_subscriber_receives_http_submitted_message() {
    let (server, state) = test_server_with_state();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel = create_channel(&server, &alice, id_of(&workspace), "general").await;
    let channel_id = id_of(&channel);

    let (session, mut rx) = state.hub.connect(alice.id, alice.username.clone()).await;
    assert!(state.hub.join_room(session, channel_id));
    drain(&mut rx); // initial presence snapshot

    let sent = send_message(&server, &alice, channel_id, "over the wire").await;

    let events = drain(&mut rx);
    let ids = message_ids(&events);
    assert_eq!(ids, [id_of(&sent)]);
}

#[tokio::test]
async fn test_messages_stay_inside_their_channel_room() {
    let (server, state) = test_server_with_state();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let general = id_of(&create_channel(&server, &alice, id_of(&workspace), "general").await);
    let random = id_of(&create_channel(&server, &alice, id_of(&workspace), "random").await);

    let (session, mut rx) = state.hub.connect(alice.id, alice.username.clone()).await;
    state.hub.join_room(session, general);
    drain(&mut rx);

    send_message(&server, &alice, random, "elsewhere").await;
    assert!(message_ids(&drain(&mut rx)).is_empty());

    let here = send_message(&server, &alice, general, "here").await;
    assert_eq!(message_ids(&drain(&mut rx)), [id_of(&here)]);
}

#[tokio::test]
async fn test_leaving_the_room_stops_delivery() {
    let (server, state) = test_server_with_state();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel_id = id_of(&create_channel(&server, &alice, id_of(&workspace), "general").await);

    let (session, mut rx) = state.hub.connect(alice.id, alice.username.clone()).await;
    state.hub.join_room(session, channel_id);
    drain(&mut rx);

    send_message(&server, &alice, channel_id, "while subscribed").await;
    assert_eq!(message_ids(&drain(&mut rx)).len(), 1);

    state.hub.leave_room(session, channel_id);
    send_message(&server, &alice, channel_id, "after leaving").await;
    assert!(message_ids(&drain(&mut rx)).is_empty());
}

#[tokio::test]
async fn test_concurrent_submissions_deliver_in_log_order() {
    let (server, state) = test_server_with_state();
    let alice = signup_user(&server, "alice").await;
    let workspace = create_workspace(&server, &alice, "Acme").await;
    let channel_id = id_of(&create_channel(&server, &alice, id_of(&workspace), "general").await);

    let (session, mut rx) = state.hub.connect(alice.id, alice.username.clone()).await;
    state.hub.join_room(session, channel_id);
    drain(&mut rx);

    let mut tasks = Vec::new();
    for task in 0..3 {
        let state = state.clone();
        let sender_id = alice.id;
        tasks.push(tokio::spawn(async move {
            for i in 0..10 {
                let content = format!("task {} message {}", task, i);
                assert_ok!(submit_message(&state, sender_id, channel_id, &content).await);
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let delivered = message_ids(&drain(&mut rx));
    assert_eq!(delivered.len(), 30);

    // Live delivery order must equal raw append order, whatever
    // interleaving the tasks produced.
    let log = state.messages.log_handle(channel_id);
    let appended: Vec<Uuid> = log.lock().await.iter().map(|m| m.id).collect();
    assert_eq!(delivered, appended);
}
