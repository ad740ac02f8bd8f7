use std::fmt::Write;

use anyhow::{ensure, Context};
use common::*;
use iceslide_solver::{Direction, Game};

mod common;

fn main() {
    run_tests("move", |content| {
        let input = content
            .split_once(SEPARATOR)
            .map_or(content, |(input, _)| input)
            .trim();
        let (actions, map) = input.split_once('\n').context("No actions")?;
        ensure!(!actions.is_empty(), "No actions");

        let mut game = map.parse::<Game>().context("Invalid map")?;
        let mut got = format!("{input}\n\n{SEPARATOR}");
        for (ch, i) in actions.chars().zip(1..) {
            let dir = Direction::try_from(ch)
                .with_context(|| format!("Invalid action {ch:?} at step {i}"))?;
            // Blocked slides are snapshotted too; the counters must not move.
            game.go(dir);
            writeln!(
                got,
                "{game}moves={} remaining={}",
                game.move_count(),
                game.remaining_cells()
            )
            .unwrap();
            got.push_str(SEPARATOR);
        }

        Ok(got)
    });
}
