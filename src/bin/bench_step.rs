use regionlife::{naive_step, Config, Engine, Grid, MemoEngine, ParallelMemoEngine};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    const SIDE: usize = 1 << 9;
    const GENERATIONS: u64 = 100;

    let grid = Grid::random(SIDE, SIDE, Some(42), 0.3)?;

    let timer = Instant::now();
    let mut expected = grid.clone();
    for _ in 0..GENERATIONS {
        expected = naive_step(&expected);
    }
    println!("Time spent on naive updates: {:?}", timer.elapsed());

    let mut engine = MemoEngine::new(&Config::default());
    let timer = Instant::now();
    let cold = engine.run(&grid, GENERATIONS)?;
    println!("Time spent on cold-cache updates: {:?}", timer.elapsed());
    let timer = Instant::now();
    let warm = engine.run(&grid, GENERATIONS)?;
    println!("Time spent on warm-cache updates: {:?}", timer.elapsed());
    println!("{}", engine.statistics());
    assert!(cold == expected && warm == expected);

    let mut engine = ParallelMemoEngine::new(&Config::default().with_parallel_levels(2));
    let timer = Instant::now();
    let parallel = engine.run(&grid, GENERATIONS)?;
    println!("Time spent on parallel updates: {:?}", timer.elapsed());
    println!("{}", engine.statistics());
    assert!(parallel == expected);
    Ok(())
}
