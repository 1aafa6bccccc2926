// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! This module contains the stepper driver that sits above the pin-level `hw/` layer and below
//! the application logic.
//!
//! ## Existing drivers
//!
//! - [`sequence`] – full-step commutation table and rotation direction
//! - [`l298n`] – four-wire stepper on an L298N dual H-bridge

pub mod l298n;
pub mod sequence;

pub use l298n::StepperL298N;
pub use sequence::Direction;
