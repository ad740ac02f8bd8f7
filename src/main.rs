use anyhow::{Context, Result};
use console::{Key, Term};
use iceslide_solver::{solve, Direction, Game, MoveOutcome};
use indicatif::ProgressBar;

enum Action {
    Exit,
    Go(Direction),
    Hint,
    Undo,
    Reset,
}

impl TryFrom<Key> for Action {
    type Error = ();

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        Ok(match key {
            Key::ArrowLeft | Key::Char('a') => Self::Go(Direction::Left),
            Key::ArrowRight | Key::Char('d') => Self::Go(Direction::Right),
            Key::ArrowUp | Key::Char('w') => Self::Go(Direction::Up),
            Key::ArrowDown | Key::Char('s') => Self::Go(Direction::Down),
            Key::Escape | Key::Char('q') => Self::Exit,
            Key::Char('h') => Self::Hint,
            Key::Char('z') => Self::Undo,
            Key::Char('r') => Self::Reset,
            _ => return Err(()),
        })
    }
}

fn hint(game: &Game) {
    let bar = ProgressBar::new_spinner().with_message("Searching");
    let mut examined = 0u64;
    let solution = solve::bfs(game, || {
        examined += 1;
        if examined % 8192 == 0 {
            bar.set_message(format!("Searching, {examined} transitions examined"));
            bar.tick();
        }
    });
    bar.finish_and_clear();

    match solution {
        Some(steps) => {
            let steps = steps.iter().map(ToString::to_string).collect::<String>();
            eprintln!("Shortest covering sequence: {steps}");
        }
        None => eprintln!("No covering sequence exists from this state."),
    }
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("Missing map file argument")?;
    let map_data = std::fs::read_to_string(path).context("Failed to read the map")?;
    let init_game = map_data
        .parse::<Game>()
        .context("Failed to parse the map")?;

    if init_game.is_solvable_from_start() {
        eprintln!("Coverable from the start: yes");
    } else {
        eprintln!("Coverable from the start: no, unreachable cells:");
        for &pos in init_game.unreachable_cells() {
            eprintln!("  {pos}");
        }
    }

    let mut game = init_game.clone();
    let mut history = Vec::new();

    let term = Term::stderr();
    loop {
        eprintln!("{game}");
        eprintln!("Moves: {}", game.move_count());
        eprintln!("Remaining: {}\n", game.remaining_cells());

        if game.is_solved() {
            eprintln!("Covered every cell in {} moves!", game.move_count());
            break;
        }

        let action = loop {
            if let Ok(action) = Action::try_from(term.read_key()?) {
                break action;
            }
        };

        match action {
            Action::Exit => break,
            Action::Go(dir) => {
                let prev = game.clone();
                match game.go(dir) {
                    MoveOutcome::Moved { .. } => history.push(prev),
                    MoveOutcome::Blocked => eprintln!("Cannot slide that way."),
                    MoveOutcome::Invalid => {}
                }
            }
            Action::Hint => hint(&game),
            Action::Undo => {
                if let Some(last_game) = history.pop() {
                    game = last_game;
                }
            }
            Action::Reset => {
                history.push(game.clone());
                game = init_game.clone();
            }
        }
    }

    Ok(())
}
