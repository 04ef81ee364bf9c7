//! Rotation-system integration tests: wrap, kicks, and timer interplay.

use blockfall::config::GameConfig;
use blockfall::core::pieces::{kick_table, shape_cells, wrap};
use blockfall::core::{Grid, Piece};
use blockfall::types::{GameEvent, Shape, Tile, ALL_SHAPES};

fn empty_grid() -> Grid {
    Grid::new(&GameConfig::default())
}

#[test]
fn test_wrap_floored_modulo() {
    assert_eq!(wrap(-1, 0, 4), 3);
    assert_eq!(wrap(-5, 0, 4), 3);
    assert_eq!(wrap(7, 0, 4), 3);
    for x in -1000..1000 {
        let w = wrap(x, 0, 4);
        assert!((0..4).contains(&w));
        // Consistent with adding any multiple of the range
        assert_eq!(wrap(x + 4, 0, 4), w);
    }
}

#[test]
fn test_full_rotation_cycle_returns_to_spawn_shape() {
    let grid = empty_grid();
    let mut events = Vec::new();

    for shape in ALL_SHAPES {
        for direction in [1, -1] {
            let mut piece = Piece::spawn(shape, 0, 0, false);
            let spawn_cells = *piece.cells();
            for _ in 0..4 {
                assert!(piece.try_rotate(&grid, direction, &mut events));
            }
            assert_eq!(piece.rotation(), 0, "{:?} direction {}", shape, direction);
            assert_eq!(*piece.cells(), spawn_cells);
        }
    }
}

#[test]
fn test_rotation_then_inverse_restores_state() {
    let grid = empty_grid();
    let mut events = Vec::new();

    for shape in ALL_SHAPES {
        let mut piece = Piece::spawn(shape, 1, -2, false);
        let before = (piece.rotation(), *piece.cells());
        assert!(piece.try_rotate(&grid, 1, &mut events));
        assert!(piece.try_rotate(&grid, -1, &mut events));
        assert_eq!((piece.rotation(), *piece.cells()), before);
    }
}

#[test]
fn test_i_piece_uses_its_own_kick_table() {
    assert_ne!(
        kick_table(Shape::I) as *const _,
        kick_table(Shape::T) as *const _
    );
    // The other six share one table
    assert_eq!(
        kick_table(Shape::T) as *const _,
        kick_table(Shape::O) as *const _
    );
}

#[test]
fn test_failed_rotation_is_atomic() {
    let config = GameConfig::default();
    let mut grid = Grid::new(&config);
    let mut events = Vec::new();

    // A vertical I in a one-column slot: no kick can make horizontal fit
    let mut piece = Piece::spawn(Shape::I, 0, 0, false);
    assert!(piece.try_rotate(&grid, 1, &mut events));
    let (x, y) = piece.position();
    let before = (piece.rotation(), *piece.cells(), (x, y));

    for gx in grid.x_min()..grid.x_max() {
        for gy in grid.y_min()..grid.y_max() {
            let own = piece.cells().iter().any(|&(dx, dy)| (gx, gy) == (x + dx, y + dy));
            if !own {
                grid.set(gx, gy, Some(Tile::new(Shape::O)));
            }
        }
    }

    events.clear();
    assert!(!piece.try_rotate(&grid, 1, &mut events));
    assert!(!piece.try_rotate(&grid, -1, &mut events));
    assert_eq!((piece.rotation(), *piece.cells(), piece.position()), before);
    assert!(events.is_empty(), "a reverted rotation emits nothing");
}

#[test]
fn test_successful_move_resets_lock_window() {
    let grid = empty_grid();
    let mut piece = Piece::spawn(Shape::J, 0, 0, false);
    let mut events = Vec::new();

    piece.accumulate_lock_time(10.0);
    assert!(piece.lock_expired(0.5));
    assert!(piece.try_move(&grid, 0, -1, &mut events));
    assert!(!piece.lock_expired(0.5));
}

#[test]
fn test_shape_tables_stay_inside_bounding_box() {
    // Every offset fits a 4x4 neighborhood of the anchor; guards against
    // table typos that would make spawn validation meaningless.
    for shape in ALL_SHAPES {
        for rotation in 0..4 {
            for &(dx, dy) in shape_cells(shape, rotation) {
                assert!((-2..=2).contains(&dx), "{:?} r{} dx {}", shape, rotation, dx);
                assert!((-2..=2).contains(&dy), "{:?} r{} dy {}", shape, rotation, dy);
            }
        }
    }
}

#[test]
fn test_hard_drop_is_lowest_reachable_position() {
    let grid = empty_grid();
    let mut events = Vec::new();

    for shape in ALL_SHAPES {
        let mut piece = Piece::spawn(shape, -1, 8, false);

        // Expected landing: the largest drop that still validates
        let (x, y) = piece.position();
        let mut drop = 0;
        while grid.is_valid_position(piece.cells(), x, y - drop - 1) {
            drop += 1;
        }

        piece.hard_drop(&grid, &mut events);
        assert_eq!(piece.position(), (x, y - drop), "{:?}", shape);
        assert!(!piece.try_move(&grid, 0, -1, &mut events));
    }
}

#[test]
fn test_moved_events_fire_per_successful_move() {
    let grid = empty_grid();
    let mut piece = Piece::spawn(Shape::Z, 0, 0, false);
    let mut events = Vec::new();

    assert!(piece.try_move(&grid, 1, 0, &mut events));
    assert!(piece.try_move(&grid, 0, -1, &mut events));
    assert_eq!(events, vec![GameEvent::Moved, GameEvent::Moved]);
}
