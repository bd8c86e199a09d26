use std::collections::VecDeque;

use discomaze_core::maze::generate;
use discomaze_core::{Frame, PcgRng, Position};

fn open_cells(walls: &Frame<bool>) -> usize {
    walls.as_slice().iter().filter(|&&wall| !wall).count()
}

fn flood(walls: &Frame<bool>, start: Position) -> usize {
    let mut seen = Frame::new(walls.rows(), walls.cols(), false);
    let mut queue = VecDeque::from([start]);
    seen[start] = true;
    let mut reached = 0;
    while let Some(at) = queue.pop_front() {
        reached += 1;
        for direction in discomaze_core::Direction::ALL {
            let Some(next) = at.step(direction) else {
                continue;
            };
            if walls.get(next) == Some(&false) && !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}

#[test]
fn carved_connections_form_a_spanning_tree() {
    for (rows, cols, seed) in [(1, 1, 0), (1, 7, 1), (5, 1, 2), (4, 6, 3), (10, 10, 4)] {
        let walls = generate(rows, cols, &mut PcgRng::new(seed));
        assert_eq!(walls.shape(), (2 * rows + 1, 2 * cols + 1));

        let connections = open_cells(&walls) - rows * cols;
        assert_eq!(connections, rows * cols - 1, "{rows}x{cols}");

        // a connected graph with n - 1 edges is a tree
        assert_eq!(flood(&walls, Position::new(1, 1)), open_cells(&walls));
    }
}

#[test]
fn every_logical_cell_is_open() {
    let walls = generate(6, 4, &mut PcgRng::new(77));
    for i in 0..6 {
        for j in 0..4 {
            assert!(!walls[Position::new(2 * i + 1, 2 * j + 1)]);
        }
    }
}

#[test]
fn outer_ring_is_always_wall() {
    for seed in 0..16 {
        let walls = generate(5, 7, &mut PcgRng::new(seed));
        let (rows, cols) = walls.shape();
        for (position, &wall) in walls.iter() {
            let on_ring = position.row == 0
                || position.col == 0
                || position.row + 1 == rows
                || position.col + 1 == cols;
            if on_ring {
                assert!(wall, "seed {seed}: ring cell {position} is open");
            }
        }
    }
}

#[test]
fn same_seed_same_maze() {
    let a = generate(8, 8, &mut PcgRng::new(123));
    let b = generate(8, 8, &mut PcgRng::new(123));
    let c = generate(8, 8, &mut PcgRng::new(124));
    assert_eq!(a, b);
    assert_ne!(a, c);
}
