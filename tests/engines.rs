use regionlife::{
    naive_step, CachePolicy, Config, Engine, Grid, MemoEngine, NaiveEngine, ParallelMemoEngine,
};
use std::num::NonZeroUsize;

const SEED: u64 = 42;

fn engines() -> Vec<Box<dyn Engine>> {
    vec![
        Box::new(NaiveEngine::new()),
        Box::new(MemoEngine::default()),
        Box::new(ParallelMemoEngine::new(
            &Config::default().with_parallel_levels(2),
        )),
        Box::new(MemoEngine::new(&Config {
            cache: CachePolicy::Lru(NonZeroUsize::new(64).unwrap()),
            ..Config::default()
        })),
    ]
}

fn assert_fields_equal(expected: &Grid, actual: &Grid) {
    assert_eq!(expected.size(), actual.size());
    if expected == actual {
        return;
    }
    let (w, h) = expected.size();
    const K: usize = 10;
    for y in 0..h {
        for x in 0..w {
            if expected.get(x, y) == actual.get(x, y) {
                continue;
            }
            let (x1, y1) = (x.saturating_sub(K), y.saturating_sub(K));
            let (x2, y2) = ((x + K).min(w), (y + K).min(h));
            let mut picture = String::new();
            for y in y1..y2 {
                for grid in [expected, actual] {
                    picture.push('|');
                    picture.extend((x1..x2).map(|x| if grid.get(x, y) { '#' } else { ' ' }));
                }
                picture.push_str("|\n");
            }
            panic!("Mismatch at ({}, {}):\n{}", x, y, picture);
        }
    }
}

#[test]
fn test_single_updates() {
    for (w, h) in [(4, 4), (8, 8), (32, 32), (128, 128), (8, 32), (64, 16), (12, 8), (4, 16)] {
        let grid = Grid::random(w, h, Some(SEED), 0.4).unwrap();
        let expected = naive_step(&grid);
        for mut engine in engines() {
            assert_fields_equal(&expected, &engine.step(&grid).unwrap());
        }
    }
}

#[test]
fn test_repetitive_updates() {
    let mut engines = engines();
    let mut grids = vec![Grid::random(64, 64, Some(SEED), 0.3).unwrap(); engines.len()];
    for _ in 0..50 {
        for (engine, grid) in engines.iter_mut().zip(grids.iter_mut()) {
            *grid = engine.step(grid).unwrap();
        }
        for grid in grids.iter().skip(1) {
            assert_fields_equal(&grids[0], grid);
        }
    }
}

#[test]
fn test_repetitive_updates_with_gc() {
    let grid = Grid::random(32, 32, Some(SEED), 0.5).unwrap();
    let expected = NaiveEngine::new().run(&grid, 20).unwrap();
    for mut engine in engines() {
        let mut curr = grid.clone();
        for _ in 0..20 {
            curr = engine.step(&curr).unwrap();
            engine.run_gc();
        }
        assert_fields_equal(&expected, &curr);
    }
}

#[test]
fn warm_cache_gives_same_result() {
    let mut engine = MemoEngine::default();
    for seed in 0..8 {
        let grid = Grid::random(32, 32, Some(seed), 0.5).unwrap();
        let cold = engine.step(&grid).unwrap();
        let misses = engine.cache().misses();
        let warm = engine.step(&grid).unwrap();
        assert_eq!(cold, warm);
        // the whole padded field is found at once
        assert_eq!(engine.cache().misses(), misses);
    }
}

#[test]
fn block_is_still() {
    let block = Grid::from_rows(&[
        "........",
        "........",
        "........",
        "...##...",
        "...##...",
        "........",
        "........",
        "........",
    ])
    .unwrap();
    let mut engine = MemoEngine::default();
    assert_eq!(engine.run(&block, 10).unwrap(), block);
}

#[test]
fn corner_cells_wrap_to_opposite_edges() {
    let mut grid = Grid::blank(8, 8).unwrap();
    for (x, y) in [(0, 0), (7, 0), (0, 7)] {
        grid.set(x, y, true);
    }
    let next = MemoEngine::default().step(&grid).unwrap();
    // all four corners touch each other across the seams
    assert!(next.get(7, 7));
    assert_eq!(next.population(), 4);
    assert_fields_equal(&naive_step(&grid), &next);
}

/// Steps an 8x8 field containing `cells` and returns the next state of (2, 2).
fn next_center(cells: &[(usize, usize)]) -> bool {
    let mut grid = Grid::blank(8, 8).unwrap();
    for &(x, y) in cells {
        grid.set(x, y, true);
    }
    let next = MemoEngine::default().step(&grid).unwrap();
    assert_fields_equal(&naive_step(&grid), &next);
    next.get(2, 2)
}

#[test]
fn birth_on_exactly_three() {
    assert!(next_center(&[(1, 1), (2, 1), (3, 1)]));
    assert!(!next_center(&[(1, 1), (3, 1)]));
    assert!(!next_center(&[(1, 1), (2, 1), (3, 1), (1, 3)]));
}

#[test]
fn survival_on_two_or_three() {
    assert!(next_center(&[(2, 2), (1, 1), (3, 3)]));
    assert!(next_center(&[(2, 2), (1, 1), (3, 3), (1, 3)]));
    assert!(!next_center(&[(2, 2)]));
    assert!(!next_center(&[(2, 2), (1, 1)]));
    assert!(!next_center(&[(2, 2), (1, 1), (3, 1), (1, 3), (3, 3)]));
}

#[test]
fn lru_cache_stays_bounded() {
    let cap = NonZeroUsize::new(16).unwrap();
    let mut engine = MemoEngine::new(&Config::default().with_cache_capacity(Some(cap.get())));
    let mut grid = Grid::random(64, 64, Some(SEED), 0.4).unwrap();
    for _ in 0..10 {
        let expected = naive_step(&grid);
        grid = engine.step(&grid).unwrap();
        assert_fields_equal(&expected, &grid);
        assert!(engine.cache().len() <= cap.get());
    }
    assert!(engine.cache().evictions() > 0);
}
