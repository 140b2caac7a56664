use crate::grid::Grid;

pub fn init_test() {
    drop(env_logger::try_init());
}

pub fn make_grid(rows: &[&[u8]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

pub const SMALL_BOX: &[&[u8]] = &[
    &[0, 1, 1, 1, 0],
    &[0, 1, 0, 1, 0],
    &[0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0],
    &[0, 0, 0, 0, 0],
];

// A box with an extra chamber hanging off its lower right.
pub const NOTCHED: &[&[u8]] = &[
    &[1, 1, 1, 0, 0, 0],
    &[1, 0, 1, 0, 0, 0],
    &[1, 0, 1, 1, 1, 1],
    &[1, 0, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1, 1],
];

pub const HOOK: &[&[u8]] = &[
    &[0, 1, 1, 1, 1],
    &[0, 1, 0, 0, 1],
    &[0, 1, 1, 0, 1],
    &[0, 0, 1, 0, 1],
    &[0, 0, 1, 1, 1],
];

pub const C_SHAPE: &[&[u8]] = &[
    &[0, 0, 0, 0, 0, 0],
    &[0, 1, 1, 1, 1, 0],
    &[0, 1, 0, 0, 1, 0],
    &[0, 1, 1, 1, 1, 0],
    &[0, 0, 0, 0, 0, 0],
];

// Row 2 runs along a Z: wall below at column 1, wall above at column 3.
pub const Z_TURN: &[&[u8]] = &[
    &[0, 0, 0, 1, 1, 1, 1],
    &[0, 0, 0, 1, 0, 0, 1],
    &[0, 1, 1, 1, 0, 0, 1],
    &[0, 1, 0, 0, 0, 0, 1],
    &[0, 1, 1, 1, 1, 1, 1],
];

pub const ALL_FENCES: &[&[&[u8]]] = &[SMALL_BOX, NOTCHED, HOOK, C_SHAPE, Z_TURN];
