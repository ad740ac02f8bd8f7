use crate::{Board, Coverage, Direction, Game, Vec2};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;
type IndexSet<K> = indexmap::IndexSet<K, fxhash::FxBuildHasher>;

/// Result of the construction-time reachability analysis.
#[derive(Debug, Clone)]
pub struct Reachability {
    /// Every walkable cell lies on some slide path reachable from the start.
    pub all_coverable: bool,
    /// Walkable cells no slide from any reachable stop point passes over.
    pub unreachable: Box<[Vec2]>,
}

/// Breadth-first traversal of the stop-point graph from `start`, accumulating
/// every cell traversed by any explored slide. A cell can only ever be covered
/// if it lies on such a path, so the puzzle is coverable iff the accumulated
/// set equals the walkable set.
pub fn analyze(board: &Board, start: Vec2) -> Reachability {
    let mut stops = IndexSet::default();
    stops.insert(start);
    let mut on_path = vec![false; board.cell_count()];
    on_path[board.idx(start)] = true;

    let mut cursor = 0;
    while cursor < stops.len() {
        let pos = stops[cursor];
        for dir in Direction::ALL {
            let mut cur = pos;
            while let Some(next) = board.open_step(cur, dir) {
                cur = next;
                on_path[board.idx(cur)] = true;
            }
            if cur != pos {
                stops.insert(cur);
            }
        }
        cursor += 1;
    }

    let unreachable = board
        .walkable()
        .filter(|&pos| !on_path[board.idx(pos)])
        .collect::<Box<[_]>>();
    Reachability {
        all_coverable: unreachable.is_empty(),
        unreachable,
    }
}

/// One non-trivial slide out of a cell: where it stops, which cells it enters.
struct Slide {
    dir: Direction,
    stop: Vec2,
    path: Box<[usize]>,
}

#[derive(Clone, PartialEq, Eq, Hash)]
struct SearchState {
    player: Vec2,
    coverage: Coverage,
}

/// Shortest covering move sequence from the live state of `game`, or `None`
/// when no sequence of slides covers the remaining cells. `on_step` is called
/// once per examined transition.
///
/// States are keyed on the exact (position, coverage) pair, so the visited set
/// can grow exponentially in the number of walkable cells. The search is
/// exhaustive; the first goal state reached has minimum move count.
pub fn bfs(game: &Game, mut on_step: impl FnMut()) -> Option<Vec<Direction>> {
    if game.coverage.is_complete() {
        return Some(Vec::new());
    }

    let board = &game.board;

    // Slide transitions depend on the wall layout only, never on coverage.
    let mut slides = std::iter::repeat_with(Vec::new)
        .take(board.cell_count())
        .collect::<Vec<Vec<Slide>>>();
    for pos in board.walkable() {
        for dir in Direction::ALL {
            let mut cur = pos;
            let mut path = Vec::new();
            while let Some(next) = board.open_step(cur, dir) {
                cur = next;
                path.push(board.idx(next));
            }
            if !path.is_empty() {
                slides[board.idx(pos)].push(Slide {
                    dir,
                    stop: cur,
                    path: path.into(),
                });
            }
        }
    }

    let init = SearchState {
        player: game.player,
        coverage: game.coverage.clone(),
    };
    let mut state_parent = IndexMap::default();
    state_parent.insert(init, (!0usize, Direction::Right)); // Sentinel.

    let mut cursor = 0;
    let (goal_parent, final_dir) = 'bfs: loop {
        if cursor >= state_parent.len() {
            return None;
        }

        let player = state_parent.get_index(cursor).unwrap().0.player;
        for slide in &slides[board.idx(player)] {
            on_step();

            let mut state = state_parent.get_index(cursor).unwrap().0.clone();
            for &idx in slide.path.iter() {
                state.coverage.mark(idx);
            }
            state.player = slide.stop;

            if state.coverage.is_complete() {
                break 'bfs (cursor, slide.dir);
            }
            state_parent.entry(state).or_insert((cursor, slide.dir));
        }
        cursor += 1;
    };

    let mut steps = std::iter::successors(Some((goal_parent, final_dir)), |&(i, _)| {
        let (parent, dir) = state_parent[i];
        (parent != !0usize).then_some((parent, dir))
    })
    .map(|(_, dir)| dir)
    .collect::<Vec<_>>();
    steps.reverse();
    Some(steps)
}
