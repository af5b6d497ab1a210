//! Delayed transitions driven by frame time.
//!
//! The engine has at most one pending continuation. Scheduling a new one
//! replaces whatever was pending, so a restarted game can never be resumed
//! by a timer left over from the previous one.

use std::time::Duration;

/// A continuation the engine runs once its delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Begin a turn: check the round cap, then show the prepare banner.
    BeginTurn { regenerate: bool },
    /// Prepare delay over: (re)draw the sequence and accept input.
    Present { regenerate: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    remaining: Duration,
    transition: Transition,
}

/// Single-slot scheduler for [`Transition`]s.
#[derive(Debug, Clone, Default)]
pub struct TransitionTimer {
    pending: Option<Pending>,
}

impl TransitionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `transition` after `delay`, superseding any pending one.
    /// Returns the transition that was cancelled, if any.
    pub fn schedule(&mut self, delay: Duration, transition: Transition) -> Option<Transition> {
        self.pending
            .replace(Pending {
                remaining: delay,
                transition,
            })
            .map(|p| p.transition)
    }

    /// Drop the pending transition, if any.
    pub fn cancel(&mut self) -> Option<Transition> {
        self.pending.take().map(|p| p.transition)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.pending.map(|p| p.remaining)
    }

    /// Spend up to `*budget` of elapsed time on the pending delay.
    ///
    /// When the delay runs out the transition is returned and `*budget` keeps
    /// whatever time was left over, so the caller can feed it to the next
    /// transition it schedules.
    pub fn advance(&mut self, budget: &mut Duration) -> Option<Transition> {
        let pending = self.pending.as_mut()?;
        if *budget < pending.remaining {
            pending.remaining -= *budget;
            *budget = Duration::ZERO;
            return None;
        }
        *budget -= pending.remaining;
        self.pending.take().map(|p| p.transition)
    }
}
