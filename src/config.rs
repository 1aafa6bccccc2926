// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Timing constants and construction-time configuration for [`StepperL298N`].
//!
//! [`StepperL298N`]: crate::drivers::StepperL298N

/// Hold time per commutation row until the first `set_speed` call.
pub const DEFAULT_STEP_INTERVAL_MS: u32 = 50;

/// Floor applied to every computed or requested hold time.
pub const MIN_STEP_INTERVAL_MS: u32 = 1;

pub const MS_PER_MINUTE: u64 = 60_000;

/// Commutation rows applied per caller-visible step.
pub const ROWS_PER_STEP: u32 = 4;

/// Motor geometry and initial timing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepperConfig {
    /// Full commutation steps per shaft revolution (200 for a 1.8° motor).
    pub steps_per_revolution: u32,
    /// Milliseconds each commutation row is held.
    pub step_interval_ms: u32,
}

impl StepperConfig {
    /// Config for a motor with the given geometry and the default interval.
    pub const fn new(steps_per_revolution: u32) -> Self {
        Self {
            steps_per_revolution,
            step_interval_ms: DEFAULT_STEP_INTERVAL_MS,
        }
    }

    /// Set the initial hold time, floored at [`MIN_STEP_INTERVAL_MS`].
    pub const fn with_step_interval_ms(mut self, ms: u32) -> Self {
        self.step_interval_ms = if ms < MIN_STEP_INTERVAL_MS {
            MIN_STEP_INTERVAL_MS
        } else {
            ms
        };
        self
    }

    /// Row hold time for `rpm`, or `None` when `rpm` is not positive.
    ///
    /// `60000 / (steps_per_revolution * rpm * 4)` with truncating division, floored at 1 ms.
    /// A zero `steps_per_revolution` yields `None` as well.
    pub fn interval_for_rpm(&self, rpm: i32) -> Option<u32> {
        if rpm <= 0 || self.steps_per_revolution == 0 {
            return None;
        }

        let rows_per_minute = (self.steps_per_revolution as u64)
            .saturating_mul(rpm as u64)
            .saturating_mul(ROWS_PER_STEP as u64);
        let ms = (MS_PER_MINUTE / rows_per_minute) as u32;

        Some(ms.max(MIN_STEP_INTERVAL_MS))
    }
}

impl Default for StepperConfig {
    /// 200 steps per revolution (1.8° per step).
    fn default() -> Self {
        Self::new(200)
    }
}
