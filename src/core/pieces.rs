//! Shape geometry and the wall-kick rotation tables.
//!
//! Cell offsets are relative to the piece anchor, y-up, one row of four
//! offsets per rotation index (0..4 in 90-degree clockwise increments).
//! Wall kicks follow the standard rotation system: when a rotation's base
//! position collides, a fixed sequence of small offsets is tried in order.
//! The I piece uses its own kick table because its center of rotation
//! differs from the other six shapes.

use crate::types::Shape;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i32, i32);

/// The four cells of one rotation
pub type ShapeCells = [CellOffset; 4];

/// Number of rotation indices
pub const ROTATION_COUNT: i32 = 4;

/// Cell offsets for a shape at a rotation index (0..4)
pub fn shape_cells(shape: Shape, rotation: i32) -> &'static ShapeCells {
    let table: &'static [ShapeCells; 4] = match shape {
        Shape::I => &I_CELLS,
        Shape::O => &O_CELLS,
        Shape::T => &T_CELLS,
        Shape::J => &J_CELLS,
        Shape::L => &L_CELLS,
        Shape::S => &S_CELLS,
        Shape::Z => &Z_CELLS,
    };
    &table[rotation as usize]
}

const I_CELLS: [ShapeCells; 4] = [
    [(-1, 1), (0, 1), (1, 1), (2, 1)],
    [(1, 2), (1, 1), (1, 0), (1, -1)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, 2), (0, 1), (0, 0), (0, -1)],
];

const J_CELLS: [ShapeCells; 4] = [
    [(-1, 1), (-1, 0), (0, 0), (1, 0)],
    [(0, 1), (1, 1), (0, 0), (0, -1)],
    [(-1, 0), (0, 0), (1, 0), (1, -1)],
    [(0, 1), (0, 0), (-1, -1), (0, -1)],
];

const L_CELLS: [ShapeCells; 4] = [
    [(1, 1), (-1, 0), (0, 0), (1, 0)],
    [(0, 1), (0, 0), (0, -1), (1, -1)],
    [(-1, 0), (0, 0), (1, 0), (-1, -1)],
    [(-1, 1), (0, 1), (0, 0), (0, -1)],
];

// O occupies the same cells at every rotation index.
const O_CELLS: [ShapeCells; 4] = [
    [(0, 1), (1, 1), (0, 0), (1, 0)],
    [(0, 1), (1, 1), (0, 0), (1, 0)],
    [(0, 1), (1, 1), (0, 0), (1, 0)],
    [(0, 1), (1, 1), (0, 0), (1, 0)],
];

const S_CELLS: [ShapeCells; 4] = [
    [(0, 1), (1, 1), (-1, 0), (0, 0)],
    [(0, 1), (0, 0), (1, 0), (1, -1)],
    [(0, 0), (1, 0), (-1, -1), (0, -1)],
    [(-1, 1), (-1, 0), (0, 0), (0, -1)],
];

const T_CELLS: [ShapeCells; 4] = [
    [(0, 1), (-1, 0), (0, 0), (1, 0)],
    [(0, 1), (0, 0), (1, 0), (0, -1)],
    [(-1, 0), (0, 0), (1, 0), (0, -1)],
    [(0, 1), (-1, 0), (0, 0), (0, -1)],
];

const Z_CELLS: [ShapeCells; 4] = [
    [(-1, 1), (0, 1), (0, 0), (1, 0)],
    [(1, 1), (0, 0), (1, 0), (0, -1)],
    [(-1, 0), (0, 0), (0, -1), (1, -1)],
    [(0, 1), (-1, 0), (0, 0), (-1, -1)],
];

/// Wall-kick offsets: 8 transition rows of 5 translations each, tried in
/// order. Row selection is `kick_index` below. The first entry is always
/// (0, 0), the unkicked rotation.
pub type KickTable = [[CellOffset; 5]; 8];

/// Kick table for a shape (I is special; the other six share one table)
pub fn kick_table(shape: Shape) -> &'static KickTable {
    match shape {
        Shape::I => &I_KICKS,
        _ => &JLOSTZ_KICKS,
    }
}

const I_KICKS: KickTable = [
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
];

const JLOSTZ_KICKS: KickTable = [
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
];

/// Kick-table row for a rotation that just set `new_rotation`.
///
/// `direction` is +1 for clockwise, -1 for counter-clockwise.
pub fn kick_index(new_rotation: i32, direction: i32) -> usize {
    let mut index = new_rotation * 2;
    if direction < 0 {
        index -= 1;
    }
    wrap(index, 0, 8) as usize
}

/// Floored-modulo wrap of `input` into [min, max).
///
/// Unlike `%`, this is correct for negative inputs: wrap(-1, 0, 4) == 3.
pub fn wrap(input: i32, min: i32, max: i32) -> i32 {
    min + (input - min).rem_euclid(max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_SHAPES;

    #[test]
    fn test_wrap_covers_all_integers() {
        for x in -100..100 {
            let wrapped = wrap(x, 0, 4);
            assert!((0..4).contains(&wrapped), "wrap({}) = {}", x, wrapped);
        }
        assert_eq!(wrap(-1, 0, 4), 3);
        assert_eq!(wrap(-4, 0, 4), 0);
        assert_eq!(wrap(4, 0, 4), 0);
        assert_eq!(wrap(5, 0, 4), 1);
    }

    #[test]
    fn test_every_rotation_has_four_cells() {
        for shape in ALL_SHAPES {
            for rotation in 0..ROTATION_COUNT {
                assert_eq!(shape_cells(shape, rotation).len(), 4);
            }
        }
    }

    #[test]
    fn test_o_cells_identical_across_rotations() {
        let base = shape_cells(Shape::O, 0);
        for rotation in 1..ROTATION_COUNT {
            assert_eq!(shape_cells(Shape::O, rotation), base);
        }
    }

    #[test]
    fn test_kick_rows_start_with_zero_offset() {
        for shape in ALL_SHAPES {
            for row in kick_table(shape) {
                assert_eq!(row[0], (0, 0));
            }
        }
    }

    #[test]
    fn test_kick_index_selection() {
        // Clockwise into rotation 1 uses row 2, counter-clockwise row 1.
        assert_eq!(kick_index(1, 1), 2);
        assert_eq!(kick_index(1, -1), 1);
        // Counter-clockwise into rotation 0 wraps to the last row.
        assert_eq!(kick_index(0, -1), 7);
        assert_eq!(kick_index(0, 1), 0);
    }
}
