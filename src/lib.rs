// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # L298N Stepper Driver
//!
//! Blocking full-step driver for four-wire stepper motors wired through an L298N (or similar)
//! dual H-bridge. The driver owns four `embedded-hal` output pins (IN1..IN4) and a blocking delay,
//! and turns "rotate N steps at R RPM" into a timed sequence of pin patterns.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | Pin-level wrappers (the four-pin coil bank) |
//! | [`drivers`] | The commutation table and the [`StepperL298N`] driver |
//! | [`config`] | Default timing constants and [`StepperConfig`] |
//! | [`error`] | Crate error type |
//!
//! ## Getting Started
//!
//! ```ignore
//! use l298n_stepper::StepperL298N;
//!
//! let mut motor = StepperL298N::new(200, [in1, in2, in3, in4], delay)?;
//! motor.set_speed(30);
//! motor.step(50)?;   // clockwise
//! motor.step(-50)?;  // counter-clockwise
//! ```
//!
//! Run the host-side tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! ## Features
//!
//! - **`defmt`**: derive `defmt::Format` on the public error, direction and config types.
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod drivers;
pub mod error;
pub mod hw;

pub use config::StepperConfig;
pub use drivers::{Direction, StepperL298N};
pub use error::Error;
