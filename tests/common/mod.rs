//! Recording doubles for the `embedded-hal` pin and delay traits.
//!
//! Every pin and the delay of one rig push into the same event log, so tests can check the exact
//! interleaving of writes and holds.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Write { pin: usize, level: PinState },
    DelayMs(u32),
    DelayNs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinFault {
    pub pin: usize,
}

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockPin {
    id: usize,
    log: Log,
    /// Refuse to go high (e.g. a shorted bridge input).
    pub stuck_low: bool,
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), PinFault> {
        self.set_state(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        self.set_state(PinState::High)
    }

    fn set_state(&mut self, level: PinState) -> Result<(), PinFault> {
        if self.stuck_low && level == PinState::High {
            return Err(PinFault { pin: self.id });
        }
        self.log.borrow_mut().push(Event::Write { pin: self.id, level });
        Ok(())
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

/// Four pins and a delay sharing one log.
pub fn rig() -> (Log, [MockPin; 4], MockDelay) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let pins = [0, 1, 2, 3].map(|id| MockPin {
        id,
        log: log.clone(),
        stuck_low: false,
    });
    let delay = MockDelay { log: log.clone() };
    (log, pins, delay)
}

pub fn take(log: &Log) -> Vec<Event> {
    log.borrow_mut().drain(..).collect()
}

pub fn write_count(events: &[Event]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, Event::Write { .. }))
        .count()
}

/// Pin levels in force at every hold, with the hold length.
pub fn holds(events: &[Event]) -> Vec<([PinState; 4], u32)> {
    let mut levels = [PinState::Low; 4];
    let mut out = Vec::new();
    for event in events {
        match *event {
            Event::Write { pin, level } => levels[pin] = level,
            Event::DelayMs(ms) => out.push((levels, ms)),
            Event::DelayNs(_) => panic!("driver should only hold in whole milliseconds"),
        }
    }
    out
}

/// Level of each pin after the last write, `None` if never written.
pub fn final_levels(events: &[Event]) -> [Option<PinState>; 4] {
    let mut levels = [None; 4];
    for event in events {
        if let Event::Write { pin, level } = *event {
            levels[pin] = Some(level);
        }
    }
    levels
}

pub const ALL_LOW: [Option<PinState>; 4] = [Some(PinState::Low); 4];
