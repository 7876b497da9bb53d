use core::time::Duration;

// The display is a 4-digit, 8-segment (A-G plus decimal point) common-anode module.
pub const CELL_COUNT: usize = 4;
pub const SEGMENT_COUNT: usize = 8;
pub const DIGIT_BASE: u8 = 10;

/// How long each digit stays lit during one multiplex pass.
pub const MULTIPLEX_HOLD: Duration = Duration::from_millis(1);

/// How many full passes each value gets before the counter advances.
pub const REPEAT_COUNT: u16 = 10;

/// Slowest full 4-digit scan that still looks steady (about 60 Hz).
pub const FLICKER_FUSION_BUDGET: Duration = Duration::from_millis(16);

/// BCM pin numbers of the segment lines, in order A, B, C, D, E, F, G, DP.
pub const SEGMENT_PINS: [u8; SEGMENT_COUNT] = [23, 6, 20, 5, 24, 19, 12, 21];

/// BCM pin numbers of the digit enable lines, left to right.
pub const CELL_PINS: [u8; CELL_COUNT] = [18, 13, 26, 25];

const _: () = assert!(
    MULTIPLEX_HOLD.as_nanos() * CELL_COUNT as u128 <= FLICKER_FUSION_BUDGET.as_nanos(),
    "default hold does not fit the flicker-fusion budget"
);
