//! Input seam
//!
//! A platform layer implements `InputSource` by polling its devices once per
//! tick. `ScriptedInput` replays a queue of inputs against a fake clock, for
//! tests and the headless demo.

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::TICKS_PER_SECOND;
use crate::sim::TickInput;

/// Anything that can produce one tick's worth of input
pub trait InputSource {
    fn poll(&mut self) -> TickInput;
}

/// Queue of inputs replayed one per tick
///
/// The clock advances by one tick each poll and overwrites `now_ms` on every
/// input. Once the queue is empty, polls return an idle input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
    ticks: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one input
    pub fn push(&mut self, input: TickInput) -> &mut Self {
        self.queue.push_back(input);
        self
    }

    /// Queue the same input for `count` ticks
    pub fn repeat(&mut self, input: TickInput, count: usize) -> &mut Self {
        self.queue.extend(std::iter::repeat_n(input, count));
        self
    }

    /// Queue a single click at `point`
    pub fn confirm_at(&mut self, point: Vec2) -> &mut Self {
        self.push(TickInput {
            confirm: Some(point),
            ..Default::default()
        })
    }

    /// Inputs still queued
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Fake wall clock for the next poll
    pub fn now_ms(&self) -> u64 {
        self.ticks * 1000 / TICKS_PER_SECOND as u64
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        let mut input = self.queue.pop_front().unwrap_or_default();
        input.now_ms = self.now_ms();
        self.ticks += 1;
        input
    }
}
