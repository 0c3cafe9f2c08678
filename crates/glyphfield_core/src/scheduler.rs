//! One-shot frame callbacks
//!
//! Models a display-refresh primitive: a task requested now runs once on the
//! next frame. Loops re-request themselves from inside their own callback,
//! and hold on to the returned [`FrameKey`] so they can be cancelled.

use glyphfield_math::Vec2;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle to a pending frame callback
    ///
    /// Generational: once a callback has run or been cancelled, its key is
    /// dead and cancelling it again does nothing.
    pub struct FrameKey;
}

/// Work queued for the next frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameTask {
    /// Integrate and draw every particle
    Animate,
    /// Apply one round of repulsion impulses around `origin`
    Repulse { origin: Vec2 },
}

#[derive(Debug)]
struct Pending {
    task: FrameTask,
    sequence: u64,
}

/// Queue of one-shot frame callbacks
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: SlotMap<FrameKey, Pending>,
    next_sequence: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` for the next frame
    pub fn request(&mut self, task: FrameTask) -> FrameKey {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.insert(Pending { task, sequence })
    }

    /// Cancel a pending callback
    ///
    /// Returns true if the callback was still pending.
    pub fn cancel(&mut self, key: FrameKey) -> bool {
        self.pending.remove(key).is_some()
    }

    /// Cancel every pending callback
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Whether `key` refers to a callback that has not run yet
    pub fn is_pending(&self, key: FrameKey) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of callbacks waiting for the next frame
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return everything due this frame, in request order
    ///
    /// Tasks requested while the returned batch is being processed land in
    /// the following frame.
    pub fn take_due(&mut self) -> Vec<(FrameKey, FrameTask)> {
        let mut due: Vec<(FrameKey, Pending)> = self.pending.drain().collect();
        due.sort_by_key(|(_, pending)| pending.sequence);
        due.into_iter().map(|(key, pending)| (key, pending.task)).collect()
    }
}
