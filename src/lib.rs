use std::ops::Index;

use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod solve;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vec2(pub u8, pub u8);

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Down,
    Left,
    Up,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];
}

/// Construction failed because the start cell is a wall or out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStart(pub Vec2);

/// A symbol that does not name one of the four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidDirection(pub char);

impl TryFrom<char> for Direction {
    type Error = InvalidDirection;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Ok(match ch {
            'R' | 'd' => Self::Right,
            'D' | 's' => Self::Down,
            'L' | 'a' => Self::Left,
            'U' | 'w' => Self::Up,
            _ => return Err(InvalidDirection(ch)),
        })
    }
}

/// The immutable original layout. Coverage lives separately in [`Coverage`];
/// nothing here changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: u8,
    width: u8,
    grid: Box<[Cell]>,
}

impl Index<Vec2> for Board {
    type Output = Cell;
    fn index(&self, pos: Vec2) -> &Self::Output {
        &self.grid[self.idx(pos)]
    }
}

impl Board {
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    fn idx(&self, pos: Vec2) -> usize {
        pos.0 as usize * self.width as usize + pos.1 as usize
    }

    fn cell_count(&self) -> usize {
        self.grid.len()
    }

    /// The sole blocking predicate: out of bounds counts the same as a wall.
    pub fn is_wall(&self, pos: Vec2) -> bool {
        self.height <= pos.0 || self.width <= pos.1 || self[pos] == Cell::Wall
    }

    fn sibling_pos(&self, pos: Vec2, dir: Direction) -> Option<Vec2> {
        const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        let x = pos.0.checked_add_signed(DIRECTIONS[dir as usize].0)?;
        let y = pos.1.checked_add_signed(DIRECTIONS[dir as usize].1)?;
        if self.height <= x || self.width <= y {
            return None;
        }
        Some(Vec2(x, y))
    }

    fn open_step(&self, pos: Vec2, dir: Direction) -> Option<Vec2> {
        self.sibling_pos(pos, dir).filter(|&p| self[p] == Cell::Empty)
    }

    /// Last open cell reached sliding from `pos`, possibly `pos` itself.
    /// Pure function of the original layout.
    pub fn slide_stop(&self, mut pos: Vec2, dir: Direction) -> Vec2 {
        while let Some(next) = self.open_step(pos, dir) {
            pos = next;
        }
        pos
    }

    /// Stop points of all four directions, deduplicated.
    pub fn stop_points(&self, pos: Vec2) -> ArrayVec<Vec2, 4> {
        let mut stops = ArrayVec::new();
        for dir in Direction::ALL {
            let stop = self.slide_stop(pos, dir);
            if !stops.contains(&stop) {
                stops.push(stop);
            }
        }
        stops
    }

    pub fn cells(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        let idx_iter = std::iter::successors(Some(Vec2(0, 0)), |&Vec2(x, y)| {
            Some(if y + 1 < self.width {
                Vec2(x, y + 1)
            } else {
                Vec2(x + 1, 0)
            })
        });
        idx_iter.zip(self.grid.iter().copied())
    }

    pub fn walkable(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.cells()
            .filter(|&(_, cell)| cell == Cell::Empty)
            .map(|(pos, _)| pos)
    }
}

/// Which cells the player has occupied so far. Grows monotonically; the
/// remaining count is cached so the goal test is O(1).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coverage {
    cells: Box<[bool]>,
    remaining: u32,
}

impl Coverage {
    fn new(board: &Board) -> Self {
        Self {
            cells: vec![false; board.cell_count()].into(),
            remaining: board.walkable().count() as u32,
        }
    }

    fn mark(&mut self, idx: usize) -> bool {
        if self.cells[idx] {
            return false;
        }
        self.cells[idx] = true;
        self.remaining -= 1;
        true
    }

    fn is_covered(&self, idx: usize) -> bool {
        self.cells[idx]
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Unrecognized direction symbol. No state change.
    Invalid,
    /// The immediate neighbor is blocked. No state change.
    Blocked,
    /// One full slide, counted as one move regardless of distance.
    Moved { newly_covered: u32 },
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player: Vec2,
    coverage: Coverage,
    moves: u32,
    reachability: solve::Reachability,
}

impl Game {
    pub fn new(board: Board, start: Vec2) -> Result<Self, InvalidStart> {
        if board.is_wall(start) {
            return Err(InvalidStart(start));
        }
        let reachability = solve::analyze(&board, start);
        let mut coverage = Coverage::new(&board);
        coverage.mark(board.idx(start));
        Ok(Self {
            board,
            player: start,
            coverage,
            moves: 0,
            reachability,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn position(&self) -> Vec2 {
        self.player
    }

    pub fn move_count(&self) -> u32 {
        self.moves
    }

    pub fn remaining_cells(&self) -> u32 {
        self.coverage.remaining()
    }

    pub fn is_covered(&self, pos: Vec2) -> bool {
        !self.board.is_wall(pos) && self.coverage.is_covered(self.board.idx(pos))
    }

    pub fn is_solved(&self) -> bool {
        self.coverage.is_complete()
    }

    /// Verdict of the construction-time reachability analysis. Refers to the
    /// initial position on the original layout, not the live state.
    pub fn is_solvable_from_start(&self) -> bool {
        self.reachability.all_coverable
    }

    pub fn unreachable_cells(&self) -> &[Vec2] {
        &self.reachability.unreachable
    }

    pub fn go(&mut self, dir: Direction) -> MoveOutcome {
        if self.board.open_step(self.player, dir).is_none() {
            return MoveOutcome::Blocked;
        }
        self.moves += 1;
        let mut newly_covered = 0;
        while let Some(next) = self.board.open_step(self.player, dir) {
            self.player = next;
            if self.coverage.mark(self.board.idx(next)) {
                newly_covered += 1;
            }
        }
        MoveOutcome::Moved { newly_covered }
    }

    pub fn go_symbol(&mut self, ch: char) -> MoveOutcome {
        match Direction::try_from(ch) {
            Ok(dir) => self.go(dir),
            Err(_) => MoveOutcome::Invalid,
        }
    }
}
