//! Recording fakes for the display lines, shared by the integration tests.
#![expect(dead_code, reason = "Each test crate uses a different subset")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};
use led4_counter::{CELL_COUNT, DIGIT_BASE, Led4, OutputArray, SEGMENT_COUNT, pattern_for};

/// A physical line of the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Cell(usize),
    Segment(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, PinState),
    Delay(u32),
}

/// Shared, ordered log of everything the fakes were asked to do.
#[derive(Clone, Default)]
pub struct Trace {
    events: Rc<RefCell<Vec<Event>>>,
    writes_left: Rc<Cell<Option<usize>>>,
    fail_once: Rc<Cell<bool>>,
}

impl Trace {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// After `writes` more successful pin writes, every write fails.
    pub fn fail_after(&self, writes: usize) {
        self.writes_left.set(Some(writes));
    }

    /// After `writes` more successful pin writes, exactly one write fails.
    pub fn fail_once_after(&self, writes: usize) {
        self.writes_left.set(Some(writes));
        self.fail_once.set(true);
    }

    pub fn allow_all(&self) {
        self.writes_left.set(None);
        self.fail_once.set(false);
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }

    fn allow_write(&self) -> bool {
        match self.writes_left.get() {
            None => true,
            Some(0) => {
                if self.fail_once.get() {
                    self.allow_all();
                }
                false
            }
            Some(left) => {
                self.writes_left.set(Some(left - 1));
                true
            }
        }
    }
}

#[derive(Debug)]
pub struct FakePinError;

impl embedded_hal::digital::Error for FakePinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct FakePin {
    line: Line,
    trace: Trace,
}

impl FakePin {
    fn set(&mut self, state: PinState) -> Result<(), FakePinError> {
        if !self.trace.allow_write() {
            return Err(FakePinError);
        }
        self.trace.push(Event::Set(self.line, state));
        Ok(())
    }
}

impl ErrorType for FakePin {
    type Error = FakePinError;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(PinState::High)
    }
}

pub struct FakeDelay {
    trace: Trace,
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.trace.push(Event::Delay(ns));
    }
}

pub type FakeDisplay = Led4<FakePin, FakeDelay>;

pub fn try_fake_display(trace: &Trace, hold: Duration) -> led4_counter::Result<FakeDisplay> {
    let cells = OutputArray::new(core::array::from_fn(|index| FakePin {
        line: Line::Cell(index),
        trace: trace.clone(),
    }));
    let segments = OutputArray::new(core::array::from_fn(|index| FakePin {
        line: Line::Segment(index),
        trace: trace.clone(),
    }));
    let delay = FakeDelay {
        trace: trace.clone(),
    };
    Led4::new(cells, segments, delay, hold)
}

/// A display with a 1 ms hold whose setup writes are already cleared from `trace`.
pub fn fake_display(trace: &Trace) -> FakeDisplay {
    let display = try_fake_display(trace, Duration::from_millis(1)).expect("valid display");
    trace.clear();
    display
}

// ============================================================================
// Replay
// ============================================================================

/// One digit lit for one hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse {
    pub cell: usize,
    pub segments: [bool; SEGMENT_COUNT],
    pub hold_ns: u32,
}

/// Line levels reconstructed from a trace.
#[derive(Debug)]
pub struct Replay {
    pub cells: [PinState; CELL_COUNT],
    pub segments: [PinState; SEGMENT_COUNT],
    pub pulses: Vec<Pulse>,
    pub max_cells_on: usize,
}

impl Replay {
    pub fn all_cells_off(&self) -> bool {
        self.cells.iter().all(|&level| level == PinState::High)
    }

    /// The value each group of four pulses showed.
    pub fn rendered_values(&self) -> Vec<u16> {
        assert_eq!(self.pulses.len() % CELL_COUNT, 0, "partial render");
        self.pulses
            .chunks(CELL_COUNT)
            .map(|chunk| {
                chunk.iter().enumerate().fold(0, |value, (position, pulse)| {
                    assert_eq!(pulse.cell, position, "digits out of order");
                    value * 10 + u16::from(digit_for(&pulse.segments))
                })
            })
            .collect()
    }
}

/// Replays `events` from the rest state: every cell off (HIGH), every segment LOW.
pub fn replay(events: &[Event]) -> Replay {
    let mut replay = Replay {
        cells: [PinState::High; CELL_COUNT],
        segments: [PinState::Low; SEGMENT_COUNT],
        pulses: Vec::new(),
        max_cells_on: 0,
    };
    for event in events {
        match *event {
            Event::Set(Line::Cell(index), level) => {
                *replay.cells.get_mut(index).expect("cell index") = level;
            }
            Event::Set(Line::Segment(index), level) => {
                *replay.segments.get_mut(index).expect("segment index") = level;
            }
            Event::Delay(hold_ns) => {
                let lit: Vec<usize> = cells_on(&replay.cells).collect();
                assert_eq!(lit.len(), 1, "hold with cells {lit:?} on");
                replay.pulses.push(Pulse {
                    cell: *lit.first().expect("one cell on"),
                    segments: replay.segments.map(|level| level == PinState::High),
                    hold_ns,
                });
            }
        }
        replay.max_cells_on = replay.max_cells_on.max(cells_on(&replay.cells).count());
    }
    replay
}

fn cells_on(cells: &[PinState; CELL_COUNT]) -> impl Iterator<Item = usize> + '_ {
    cells
        .iter()
        .enumerate()
        .filter(|&(_, &level)| level == PinState::Low)
        .map(|(index, _)| index)
}

/// The digit whose table pattern equals `segments`.
pub fn digit_for(segments: &[bool; SEGMENT_COUNT]) -> u8 {
    (0..DIGIT_BASE)
        .find(|&digit| pattern_for(digit).expect("digit in range").levels() == *segments)
        .unwrap_or_else(|| panic!("no digit lights {segments:?}"))
}
