// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin map and HAL glue for an L298N module on a NUCLEO-F767ZI.
//!
//! | L298N | MCU  |
//! | ----- | ---- |
//! | IN1   | PD12 |
//! | IN2   | PD13 |
//! | IN3   | PD14 |
//! | IN4   | PD15 |
//!
//! ENA/ENB jumpers fitted, logic GND shared with the board.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use stm32f7xx_hal::gpio::{gpiod, ErasedPin, Output, PushPull};

/// 1.8° motor, full-step.
pub const STEPS_PER_REV: u32 = 200;
pub const DEMO_RPM: i32 = 30;

/// L298N input pins, already switched to push-pull outputs.
pub struct L298nPins {
    pub in1: gpiod::PD12<Output<PushPull>>,
    pub in2: gpiod::PD13<Output<PushPull>>,
    pub in3: gpiod::PD14<Output<PushPull>>,
    pub in4: gpiod::PD15<Output<PushPull>>,
}

impl L298nPins {
    pub fn new(gpiod: gpiod::Parts) -> Self {
        Self {
            in1: gpiod.pd12.into_push_pull_output(),
            in2: gpiod.pd13.into_push_pull_output(),
            in3: gpiod.pd14.into_push_pull_output(),
            in4: gpiod.pd15.into_push_pull_output(),
        }
    }

    /// Erase the pin numbers so the driver can hold all four as one type.
    pub fn into_coils(self) -> [CoilPin; 4] {
        [
            CoilPin(self.in1.erase()),
            CoilPin(self.in2.erase()),
            CoilPin(self.in3.erase()),
            CoilPin(self.in4.erase()),
        ]
    }
}

/// `embedded-hal` 1.0 output wrapper around a type-erased F7 pin.
pub struct CoilPin(ErasedPin<Output<PushPull>>);

impl ErrorType for CoilPin {
    type Error = Infallible;
}

impl OutputPin for CoilPin {
    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.set_low();
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.set_high();
        Ok(())
    }
}

/// `embedded-hal` 1.0 delay on top of the cortex-m SysTick delay.
pub struct SysTickDelay(cortex_m::delay::Delay);

impl SysTickDelay {
    pub fn new(delay: cortex_m::delay::Delay) -> Self {
        Self(delay)
    }
}

impl DelayNs for SysTickDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.delay_us(ns.div_ceil(1_000));
    }

    #[inline]
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
