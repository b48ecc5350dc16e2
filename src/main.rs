use anyhow::{Context, Result};
use gambit_core::{Color, Position};
use gambit_engine::{DepthPolicy, Outcome, Searcher};
use tracing::info;

const DEFAULT_MAX_PLIES: u32 = 40;
const DEFAULT_DEPTH: DepthPolicy = DepthPolicy::Fixed(3);

/// Engine-vs-engine game from the standard position.
///
/// Usage: `gambit [max_plies] [depth|auto|moves|pieces]`
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let max_plies = match args.next() {
        Some(arg) => arg
            .parse::<u32>()
            .with_context(|| format!("invalid ply limit: {arg}"))?,
        None => DEFAULT_MAX_PLIES,
    };
    let policy = match args.next() {
        Some(arg) => arg
            .parse::<DepthPolicy>()
            .with_context(|| format!("invalid depth setting: {arg}"))?,
        None => DEFAULT_DEPTH,
    };

    info!(max_plies, %policy, "gambit starting");

    let mut position = Position::initialize_standard();
    let mut searcher = Searcher::new();
    let mut side = Color::White;
    position.record_position(side);

    for ply in 1..=max_plies {
        let depth = policy.resolve(&position, side);
        match searcher.choose_and_apply(&mut position, side, depth) {
            Outcome::Moved {
                mv,
                piece,
                captured,
                score,
            } => match captured {
                Some(victim) => info!(ply, %side, %mv, ?piece, ?victim, score, depth, "capture"),
                None => info!(ply, %side, %mv, ?piece, score, depth, "move"),
            },
            Outcome::Checkmate { winner } => {
                info!(%winner, "checkmate");
                return Ok(());
            }
            Outcome::Stalemate => {
                info!("stalemate");
                return Ok(());
            }
        }
        side = !side;
        if position.is_threefold(side) {
            info!(ply, "draw by threefold repetition");
            return Ok(());
        }
        if position.is_in_check(side) {
            info!(%side, "check");
        }
    }

    info!(max_plies, fen = %position.to_fen(side), "ply limit reached");
    Ok(())
}
