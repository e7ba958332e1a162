//! Optimistic Mutations
//!
//! The UI applies a tentative local change before the server responds, then
//! reconciles: substitute the authoritative entity on success, restore the
//! exact pre-mutation snapshot on failure. Every helper here no-ops when the
//! entity disappeared locally while the call was in flight, so a late
//! response never reinserts stale state.

use std::collections::HashSet;

use crate::models::{Message, MessageId, Task};

/// Entities with a mutation currently in flight.
///
/// One mutation per entity at a time: a second intent for the same id is
/// ignored until the first settles, which is what makes rapid double-clicks
/// on a toggle safe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight(HashSet<String>);

impl InFlight {
    /// Claim the entity; `false` means a mutation is already in flight
    pub fn try_begin(&mut self, id: &str) -> bool {
        self.0.insert(id.to_string())
    }

    pub fn finish(&mut self, id: &str) {
        self.0.remove(id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }
}

/// Flip `is_completed` on the matching task, returning the exact
/// pre-mutation copy for a possible revert. `None` if the id is unknown.
pub fn apply_toggle(tasks: &mut [Task], id: &str) -> Option<Task> {
    let task = tasks.iter_mut().find(|t| t.id == id)?;
    let snapshot = task.clone();
    task.is_completed = !task.is_completed;
    Some(snapshot)
}

/// Substitute the server's authoritative task back into the list
pub fn apply_confirmed(tasks: &mut [Task], confirmed: Task) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == confirmed.id) {
        *task = confirmed;
    }
}

/// Exact snapshot restore after a failed mutation
pub fn restore_snapshot(tasks: &mut [Task], snapshot: Task) {
    if let Some(task) = tasks.iter_mut().find(|t| t.id == snapshot.id) {
        *task = snapshot;
    }
}

/// Reconcile a successful send: the tentative user message keeps its
/// position and the reply is appended after existing entries. Returns
/// `false` without touching the list when the pending entry is gone
/// (conversation switched or cleared while the call was in flight).
pub fn confirm_send(messages: &mut Vec<Message>, pending: &MessageId, reply: Message) -> bool {
    if !messages.iter().any(|m| &m.id == pending) {
        return false;
    }
    messages.push(reply);
    true
}

/// Drop the tentative entry after a failed send, restoring the list to its
/// pre-send state
pub fn discard_pending(messages: &mut Vec<Message>, pending: &MessageId) {
    messages.retain(|m| &m.id != pending);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn make_task(id: &str, completed: bool) -> Task {
        Task {
            id: id.to_string(),
            title: format!("Task {}", id),
            description: Some("details".to_string()),
            is_completed: completed,
            created_at: Some("2025-01-01T00:00:00Z".to_string()),
            owner_id: Some("u1".to_string()),
        }
    }

    fn make_reply(id: &str) -> Message {
        Message {
            id: MessageId::Confirmed(id.to_string()),
            role: Role::Assistant,
            content: "sure".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_double_toggle_returns_to_original() {
        let mut tasks = vec![make_task("a", false), make_task("b", true)];
        let original = tasks.clone();

        let first = apply_toggle(&mut tasks, "a").unwrap();
        assert!(tasks[0].is_completed);
        apply_confirmed(&mut tasks, {
            let mut confirmed = first.clone();
            confirmed.is_completed = true;
            confirmed
        });

        let second = apply_toggle(&mut tasks, "a").unwrap();
        assert!(second.is_completed);
        apply_confirmed(&mut tasks, {
            let mut confirmed = second.clone();
            confirmed.is_completed = false;
            confirmed
        });

        assert_eq!(tasks, original);
    }

    #[test]
    fn test_failed_toggle_restores_exact_snapshot() {
        let mut tasks = vec![make_task("a", false), make_task("b", true)];
        let before = tasks.clone();

        let snapshot = apply_toggle(&mut tasks, "b").unwrap();
        assert_ne!(tasks, before);

        restore_snapshot(&mut tasks, snapshot);
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut tasks = vec![make_task("a", false)];
        let before = tasks.clone();
        assert!(apply_toggle(&mut tasks, "missing").is_none());
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_restore_after_local_delete_is_noop() {
        let mut tasks = vec![make_task("a", false), make_task("b", false)];
        let snapshot = apply_toggle(&mut tasks, "b").unwrap();

        // the task was deleted locally while the update was in flight
        tasks.retain(|t| t.id != "b");
        restore_snapshot(&mut tasks, snapshot);

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "a");
    }

    #[test]
    fn test_confirmed_after_local_delete_is_noop() {
        let mut tasks = vec![make_task("a", false)];
        tasks.clear();
        apply_confirmed(&mut tasks, make_task("a", true));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_send_reconciliation_preserves_order() {
        let mut messages = Vec::new();
        let pending = MessageId::Pending(1);
        messages.push(Message::pending_user(1, "hello", None));

        assert!(confirm_send(&mut messages, &pending, make_reply("m2")));

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[0].content, "hello");
        assert_eq!(messages[1].role, Role::Assistant);
    }

    #[test]
    fn test_confirm_send_noops_when_pending_is_gone() {
        // conversation was switched before the response landed
        let mut messages = vec![make_reply("other")];
        let pending = MessageId::Pending(7);
        assert!(!confirm_send(&mut messages, &pending, make_reply("m9")));
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_failed_send_restores_previous_list() {
        let mut messages = vec![make_reply("m1")];
        let before = messages.clone();

        let pending = MessageId::Pending(3);
        messages.push(Message::pending_user(3, "oops", None));
        discard_pending(&mut messages, &pending);

        assert_eq!(messages, before);
    }

    #[test]
    fn test_in_flight_guard_blocks_second_mutation() {
        let mut guard = InFlight::default();
        assert!(guard.try_begin("t1"));
        assert!(!guard.try_begin("t1"));
        assert!(guard.try_begin("t2"));

        guard.finish("t1");
        assert!(guard.try_begin("t1"));
    }
}
