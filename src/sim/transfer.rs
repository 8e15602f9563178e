//! Ball transfer requests between black holes
//!
//! A hole that swallows the ball posts a request; any other hole may claim it
//! on its own update, pick an exit and hand the relocation back. The manager
//! applies completed transfers to the ball.

use std::collections::VecDeque;

use glam::Vec2;

use super::entity::EntityId;

/// Pending "someone take this ball" request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferRequest {
    pub sender: EntityId,
    /// Ball position at the moment it was swallowed
    pub entry_position: Vec2,
}

/// Relocation produced by the receiving hole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallTransfer {
    pub sender: EntityId,
    pub receiver: EntityId,
    pub exit_position: Vec2,
    pub exit_direction: Vec2,
}

#[derive(Debug, Clone, Default)]
pub struct TransferQueue {
    pending: VecDeque<TransferRequest>,
    completed: VecDeque<BallTransfer>,
}

impl TransferQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a transfer. Only one may be in flight; returns false if rejected.
    pub fn request(&mut self, sender: EntityId, entry_position: Vec2) -> bool {
        if !self.pending.is_empty() || !self.completed.is_empty() {
            return false;
        }
        self.pending.push_back(TransferRequest {
            sender,
            entry_position,
        });
        true
    }

    /// Oldest request that `receiver` did not send itself
    pub fn claim(&mut self, receiver: EntityId) -> Option<TransferRequest> {
        let idx = self.pending.iter().position(|r| r.sender != receiver)?;
        self.pending.remove(idx)
    }

    pub fn complete(&mut self, transfer: BallTransfer) {
        self.completed.push_back(transfer);
    }

    pub fn take_completed(&mut self) -> Option<BallTransfer> {
        self.completed.pop_front()
    }

    /// True while a request is waiting for a receiver
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Current sender, if any
    pub fn sender(&self) -> Option<EntityId> {
        self.pending.front().map(|r| r.sender)
    }

    /// Drop requests nobody claimed this frame
    pub fn expire_unclaimed(&mut self) -> usize {
        let dropped = self.pending.len();
        for request in self.pending.drain(..) {
            log::warn!(
                "Ball transfer from hole {} was never claimed",
                request.sender.0
            );
        }
        dropped
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.completed.clear();
    }
}
