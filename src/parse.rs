use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use crate::{Board, Cell, Game, Vec2};

impl Board {
    /// Builds a board from numeric rows, `0` = empty and `1` = wall.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        ensure!(!rows.is_empty(), "Empty board");
        let width = rows[0].len();
        ensure!(width != 0, "Empty board row");
        ensure!(
            rows.len() <= u8::MAX as usize && width <= u8::MAX as usize,
            "Board dimensions exceed {}",
            u8::MAX,
        );

        let mut grid = Vec::with_capacity(rows.len() * width);
        for (i, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == width,
                "Width mismatch at row {i}, expecting width {width}"
            );
            for &value in row {
                grid.push(match value {
                    0 => Cell::Empty,
                    1 => Cell::Wall,
                    _ => bail!("Invalid cell value: {value}"),
                });
            }
        }
        Ok(Self {
            height: rows.len() as _,
            width: width as _,
            grid: grid.into(),
        })
    }
}

impl FromStr for Game {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut player = None;
        let mut covered = Vec::new();
        let mut grid = Vec::new();
        let mut height = 0usize;
        let mut width = None;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let line_width = line.chars().count();
            match width {
                None => width = Some(line_width),
                Some(width) => ensure!(
                    line_width == width,
                    "Width mismatch at line {height}, expecting width {width}"
                ),
            }
            for (j, ch) in line.chars().enumerate() {
                let pos = Vec2(height as _, j as _);
                let cell = match ch {
                    '.' => Cell::Empty,
                    '#' => Cell::Wall,
                    'x' => {
                        covered.push(pos);
                        Cell::Empty
                    }
                    'p' => {
                        ensure!(player.is_none(), "Multiple players");
                        player = Some(pos);
                        Cell::Empty
                    }
                    _ => bail!("Invalid cell: {ch:?}"),
                };
                grid.push(cell);
            }
            height += 1;
        }

        let width = width.context("Empty map")?;
        ensure!(
            height <= u8::MAX as usize && width <= u8::MAX as usize,
            "Board dimensions exceed {}",
            u8::MAX,
        );
        let board = Board {
            height: height as _,
            width: width as _,
            grid: grid.into(),
        };
        let player = player.context("Missing player")?;

        let mut game = Game::new(board, player)?;
        for pos in covered {
            let idx = game.board.idx(pos);
            game.coverage.mark(idx);
        }
        Ok(game)
    }
}
