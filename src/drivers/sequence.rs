// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Full-step commutation sequence for a two-winding stepper on a dual H-bridge.
//!
//! Wiring: IN1/IN2 drive winding A through bridge A, IN3/IN4 drive winding B through bridge B.
//! Each row energizes both windings (two-phase-on); from one row to the next exactly one winding
//! reverses polarity, so walking the rows forward turns the shaft one way and walking them
//! backwards turns it the other way.

use embedded_hal::digital::PinState::{High, Low};

use crate::hw::Pattern;

/// Rows in one commutation cycle.
pub const ROWS: usize = 4;

/// The fixed drive table, indexed `[row][pin]` with pins in IN1..IN4 order.
pub static FULL_STEP: [Pattern; ROWS] = [
    [High, Low, High, Low],
    [Low, High, High, Low],
    [Low, High, Low, High],
    [High, Low, Low, High],
];

/// Rotation direction, as seen from the shaft end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Rows applied 0 -> 1 -> 2 -> 3.
    Clockwise,
    /// Rows applied 3 -> 2 -> 1 -> 0.
    CounterClockwise,
}

impl Direction {
    /// Direction for a signed step count, `None` for zero.
    pub fn from_signed(count: i32) -> Option<Self> {
        match count {
            0 => None,
            c if c > 0 => Some(Direction::Clockwise),
            _ => Some(Direction::CounterClockwise),
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Table row to apply at position `i` (0..4) of one cycle.
    #[inline]
    pub fn row_index(self, i: usize) -> usize {
        match self {
            Direction::Clockwise => i % ROWS,
            Direction::CounterClockwise => ROWS - 1 - (i % ROWS),
        }
    }

    /// One cycle of the table in this direction's order.
    pub fn cycle(self) -> impl Iterator<Item = &'static Pattern> {
        (0..ROWS).map(move |i| &FULL_STEP[self.row_index(i)])
    }
}
