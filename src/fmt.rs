use std::fmt;

use crate::{Cell, Direction, Game, InvalidDirection, InvalidStart, Vec2};

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, cell) in self.board.cells() {
            if pos == self.player {
                "p".fmt(f)?;
            } else if cell == Cell::Empty && self.coverage.is_covered(self.board.idx(pos)) {
                "x".fmt(f)?;
            } else {
                cell.fmt(f)?;
            }
            if pos.1 + 1 == self.board.width() {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => ".".fmt(f),
            Cell::Wall => "#".fmt(f),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Right => "R".fmt(f),
            Direction::Down => "D".fmt(f),
            Direction::Left => "L".fmt(f),
            Direction::Up => "U".fmt(f),
        }
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Display for InvalidStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start cell {} is a wall or out of bounds", self.0)
    }
}

impl std::error::Error for InvalidStart {}

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid direction symbol: {:?}", self.0)
    }
}

impl std::error::Error for InvalidDirection {}
