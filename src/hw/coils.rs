use embedded_hal::digital::{OutputPin, PinState};

/// Levels for IN1..IN4, in wiring order.
pub type Pattern = [PinState; 4];

/// All four inputs low: both H-bridges off, no holding torque.
pub const DE_ENERGIZED: Pattern = [PinState::Low; 4];

/// Bank of the four H-bridge inputs that remembers the last pattern written.
pub struct Coils<PIN: OutputPin> {
    pins: [PIN; 4],
    pattern: Pattern,
}

impl<PIN: OutputPin> Coils<PIN> {
    /// Take ownership of IN1..IN4 and de-energize them.
    pub fn new(pins: [PIN; 4]) -> Result<Self, PIN::Error> {
        let mut coils = Self {
            pins,
            pattern: DE_ENERGIZED,
        };
        coils.release()?;
        Ok(coils)
    }

    /// Drive IN1..IN4 to `pattern`, in wiring order.
    ///
    /// On a failed write the remaining pins are left untouched and the recorded pattern keeps
    /// the levels that did land.
    pub fn apply(&mut self, pattern: &Pattern) -> Result<(), PIN::Error> {
        for (i, (pin, &level)) in self.pins.iter_mut().zip(pattern.iter()).enumerate() {
            pin.set_state(level)?;
            self.pattern[i] = level;
        }
        Ok(())
    }

    /// Drive all four inputs low. Every pin is written, whatever the last pattern was.
    #[inline]
    pub fn release(&mut self) -> Result<(), PIN::Error> {
        self.apply(&DE_ENERGIZED)
    }

    #[inline]
    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    #[inline]
    pub fn is_energized(&self) -> bool {
        self.pattern != DE_ENERGIZED
    }

    pub fn free(self) -> [PIN; 4] {
        self.pins
    }
}
