use anyhow::{ensure, Context};
use common::*;
use iceslide_solver::{solve, Game, MoveOutcome};

mod common;

fn main() {
    run_tests("solve", |content| {
        let map = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let mut game = map.parse::<Game>().context("Invalid map")?;

        let steps = solve::bfs(&game, || {}).context("No solution")?;

        // Validate.
        for &dir in &steps {
            ensure!(
                matches!(game.go(dir), MoveOutcome::Moved { .. }),
                "Invalid move in solution"
            );
        }
        ensure!(game.is_solved(), "Invalid solution");

        let steps = steps.iter().map(ToString::to_string).collect::<String>();

        Ok(format!("{map}\n\n{SEPARATOR}{steps}\n"))
    });
}
