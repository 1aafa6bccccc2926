// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the driver and the pin layer.

use core::fmt;

/// Driver error, generic over the HAL pin error `E`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Writing a level to one of IN1..IN4 failed.
    Pin(E),
    /// The motor was configured with zero steps per revolution.
    ZeroStepsPerRevolution,
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Pin(e)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "coil pin write failed: {:?}", e),
            Error::ZeroStepsPerRevolution => f.write_str("steps per revolution must be non-zero"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
