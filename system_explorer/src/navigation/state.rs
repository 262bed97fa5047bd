//! Navigation state machine: `Idle` accepts commands, `Transitioning` ignores them.

use bevy::prelude::Resource;

/// A single hop between two bodies, by catalogue index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Leg {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning(Leg),
}

#[derive(Resource, Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    active: usize,
    phase: Phase,
    body_count: usize,
}

impl NavigationState {
    pub fn new(home: usize, body_count: usize) -> Self {
        Self {
            active: home,
            phase: Phase::Idle,
            body_count,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.phase, Phase::Transitioning(_))
    }

    /// Starts a transition `offset` bodies away from the active one.
    /// `None` while locked or when the target falls outside the sequence.
    pub fn select_offset(&mut self, offset: isize) -> Option<Leg> {
        if self.is_locked() {
            return None;
        }
        let target = self
            .active
            .checked_add_signed(offset)
            .filter(|&target| target < self.body_count)?;
        let leg = Leg {
            from: self.active,
            to: target,
        };
        self.phase = Phase::Transitioning(leg);
        Some(leg)
    }

    /// Same as [`select_offset`](Self::select_offset) with the offset to `target`.
    pub fn select_index(&mut self, target: usize) -> Option<Leg> {
        let offset = target as isize - self.active as isize;
        self.select_offset(offset)
    }

    /// Ends the in-flight transition: the target becomes active and input unlocks.
    pub fn finish(&mut self) -> Option<Leg> {
        let Phase::Transitioning(leg) = self.phase else {
            return None;
        };
        self.active = leg.to;
        self.phase = Phase::Idle;
        Some(leg)
    }
}
