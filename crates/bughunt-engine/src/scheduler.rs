//! Deferred hit feedback, keyed by anchor identity.
//!
//! A shot does not remove its target immediately: the hit sound and the
//! anchor removal fire together after a fixed delay. Entries are drained
//! by the frame loop against frame timestamps, so the behavior is
//! deterministic under test and cancellable on scene teardown.

use bughunt_core::commands::HostCommand;
use bughunt_core::enums::Sound;
use bughunt_core::types::AnchorId;

/// One scheduled feedback entry.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRemoval {
    anchor: AnchorId,
    /// Timestamp (seconds, host clock) at which the feedback fires.
    due_at: f64,
}

/// Table of pending hit feedback, at most one entry per anchor.
#[derive(Debug, Default)]
pub struct PendingRemovals {
    entries: Vec<PendingRemoval>,
}

impl PendingRemovals {
    /// Schedule feedback for `anchor` at `due_at`. Re-scheduling the same
    /// anchor replaces the earlier entry.
    pub fn schedule(&mut self, anchor: AnchorId, due_at: f64) {
        self.cancel(anchor);
        self.entries.push(PendingRemoval { anchor, due_at });
    }

    /// Cancel pending feedback for one anchor. No-op if none is scheduled.
    pub fn cancel(&mut self, anchor: AnchorId) {
        self.entries.retain(|e| e.anchor != anchor);
    }

    /// Cancel everything (scene-exit contract).
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emit the composite feedback for every entry that has come due: the
    /// hit sound and the anchor removal land in the same batch, adjacent.
    /// The removal is emitted even if the anchor has since vanished from
    /// the session; the host's remove is idempotent.
    pub fn drain_due(&mut self, now: f64, commands: &mut Vec<HostCommand>) {
        let mut due = Vec::new();
        self.entries.retain(|e| {
            if e.due_at <= now {
                due.push(*e);
                false
            } else {
                true
            }
        });
        for entry in due {
            commands.push(HostCommand::PlaySound { sound: Sound::Hit });
            commands.push(HostCommand::RemoveAnchor { id: entry.anchor });
        }
    }
}
