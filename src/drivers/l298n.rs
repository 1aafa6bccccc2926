// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Blocking full-step driver for a four-wire stepper on an L298N dual H-bridge.
//!
//! Wiring:
//! - IN1, IN2: bridge A inputs (winding A, coil ends A+ / A-)
//! - IN3, IN4: bridge B inputs (winding B, coil ends B+ / B-)
//! - ENA, ENB: tied high (jumpers fitted)
//!
//! One caller-visible step is one full pass over the four rows of
//! [`FULL_STEP`](crate::drivers::sequence::FULL_STEP), so the motor sees four commutations per
//! step. Every motion blocks for `count * 4 * step_interval_ms` milliseconds and leaves the
//! windings de-energized.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, trace};

use crate::config::{StepperConfig, MIN_STEP_INTERVAL_MS, ROWS_PER_STEP};
use crate::drivers::sequence::Direction;
use crate::error::Error;
use crate::hw::{Coils, Pattern};

/// L298N stepper driver owning IN1..IN4 and a blocking delay.
///
/// The pins must already be configured as push-pull outputs; the board layer does that when it
/// builds them (e.g. `into_push_pull_output()`).
pub struct StepperL298N<PIN: OutputPin, D: DelayNs> {
    coils: Coils<PIN>,
    delay: D,
    config: StepperConfig,
}

impl<PIN, D> StepperL298N<PIN, D>
where
    PIN: OutputPin,
    D: DelayNs,
{
    /// Construct a driver for a motor with `steps_per_revolution` full steps per turn.
    ///
    /// All four inputs are driven low before this returns. The hold time starts at
    /// [`DEFAULT_STEP_INTERVAL_MS`](crate::config::DEFAULT_STEP_INTERVAL_MS).
    pub fn new(
        steps_per_revolution: u32,
        pins: [PIN; 4],
        delay: D,
    ) -> Result<Self, Error<PIN::Error>> {
        Self::with_config(StepperConfig::new(steps_per_revolution), pins, delay)
    }

    /// Construct a driver from an explicit [`StepperConfig`].
    ///
    /// A zero `steps_per_revolution` is rejected before any pin is written.
    pub fn with_config(
        config: StepperConfig,
        pins: [PIN; 4],
        delay: D,
    ) -> Result<Self, Error<PIN::Error>> {
        if config.steps_per_revolution == 0 {
            return Err(Error::ZeroStepsPerRevolution);
        }

        let coils = Coils::new(pins)?;
        let config = StepperConfig {
            step_interval_ms: config.step_interval_ms.max(MIN_STEP_INTERVAL_MS),
            ..config
        };

        debug!(
            "l298n: {} steps/rev, {} ms per row",
            config.steps_per_revolution, config.step_interval_ms
        );

        Ok(Self {
            coils,
            delay,
            config,
        })
    }

    /// Set the rotation speed in revolutions per minute.
    ///
    /// Non-positive values are ignored and the current hold time is kept.
    pub fn set_speed(&mut self, rpm: i32) {
        match self.config.interval_for_rpm(rpm) {
            Some(ms) => {
                debug!("l298n: {} rpm -> {} ms per row", rpm, ms);
                self.config.step_interval_ms = ms;
            }
            None => debug!(
                "l298n: ignoring {} rpm, keeping {} ms per row",
                rpm, self.config.step_interval_ms
            ),
        }
    }

    /// Set the hold time per commutation row directly, floored at 1 ms.
    pub fn set_step_interval_ms(&mut self, ms: u32) {
        self.config.step_interval_ms = ms.max(MIN_STEP_INTERVAL_MS);
    }

    /// Move `count` steps: positive is clockwise, negative counter-clockwise.
    ///
    /// Zero does nothing at all, not even a stop.
    pub fn step(&mut self, count: i32) -> Result<(), Error<PIN::Error>> {
        match Direction::from_signed(count) {
            Some(direction) => self.step_in(direction, count.unsigned_abs()),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn step_clockwise(&mut self, count: u32) -> Result<(), Error<PIN::Error>> {
        self.step_in(Direction::Clockwise, count)
    }

    #[inline]
    pub fn step_counter_clockwise(&mut self, count: u32) -> Result<(), Error<PIN::Error>> {
        self.step_in(Direction::CounterClockwise, count)
    }

    /// Run `count` full commutation cycles in `direction`, then de-energize.
    ///
    /// The windings are released even for `count == 0` and even when a pin write fails part way
    /// through; in that case the first error is returned.
    pub fn step_in(&mut self, direction: Direction, count: u32) -> Result<(), Error<PIN::Error>> {
        debug!(
            "l298n: {:?} x{} ({} ms)",
            direction,
            count,
            self.motion_duration_ms(count)
        );

        let motion = self.commutate(direction, count);
        let stopped = self.stop();

        motion?;
        stopped
    }

    /// De-energize both windings. Safe to call any number of times.
    pub fn stop(&mut self) -> Result<(), Error<PIN::Error>> {
        trace!("l298n: release");
        self.coils.release()?;
        Ok(())
    }

    fn commutate(&mut self, direction: Direction, count: u32) -> Result<(), PIN::Error> {
        for _ in 0..count {
            for row in direction.cycle() {
                self.hold(row)?;
            }
        }
        Ok(())
    }

    /// Apply one table row and hold it for the current interval.
    fn hold(&mut self, row: &Pattern) -> Result<(), PIN::Error> {
        trace!("l298n: row {:?}", row);
        self.coils.apply(row)?;
        self.delay.delay_ms(self.config.step_interval_ms);
        Ok(())
    }

    /// Time a motion of `count` steps blocks for, at the current speed.
    #[inline]
    pub fn motion_duration_ms(&self, count: u32) -> u64 {
        (count as u64)
            .saturating_mul(ROWS_PER_STEP as u64)
            .saturating_mul(self.config.step_interval_ms as u64)
    }

    #[inline]
    pub fn steps_per_revolution(&self) -> u32 {
        self.config.steps_per_revolution
    }

    #[inline]
    pub fn step_interval_ms(&self) -> u32 {
        self.config.step_interval_ms
    }

    #[inline]
    pub fn config(&self) -> StepperConfig {
        self.config
    }

    /// Levels last written to IN1..IN4.
    #[inline]
    pub fn pattern(&self) -> Pattern {
        self.coils.pattern()
    }

    #[inline]
    pub fn is_energized(&self) -> bool {
        self.coils.is_energized()
    }

    /// Release the pins and the delay.
    pub fn free(self) -> ([PIN; 4], D) {
        (self.coils.free(), self.delay)
    }
}
