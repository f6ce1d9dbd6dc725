//! Headless simulator: plays one session without a terminal and prints a
//! JSON summary line to stdout.
//!
//! ```text
//! crossing-sim --seed 7 --moves forward,forward,left,forward
//! crossing-sim --seed 7            # always hop forward until game over
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use serde::Serialize;

use tui_crossing::core::GameSession;
use tui_crossing::types::{Direction, GameAction, TICK_MS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a crossing session headlessly")]
struct Cli {
    #[arg(long, env = "CROSSING_SEED", default_value_t = 1)]
    seed: u32,
    /// Comma separated moves (forward, backward, left, right); each is sent
    /// as soon as the previous hop lands. Without it the player always hops
    /// forward.
    #[arg(long, value_delimiter = ',')]
    moves: Option<Vec<String>>,
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
}

/// How the simulated player picks its next hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Policy {
    Scripted,
    Forward,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u32,
    policy: Policy,
    score: u32,
    ticks: u64,
    elapsed_ms: u64,
    moves_sent: u32,
    moves_accepted: u32,
    game_over: bool,
    cause: Option<&'static str>,
}

fn parse_moves(raw: &[String]) -> Result<Vec<Direction>> {
    raw.iter()
        .map(|s| match GameAction::from_str(s) {
            Some(GameAction::Move(dir)) => Ok(dir),
            _ => bail!("unknown move {s:?}"),
        })
        .collect()
}

/// Play one session to game over, script end or `max_ticks`.
fn simulate(seed: u32, script: Option<Vec<Direction>>, max_ticks: u64) -> Summary {
    let policy = if script.is_some() {
        Policy::Scripted
    } else {
        Policy::Forward
    };
    let mut pending = script.unwrap_or_default().into_iter();

    let mut session = GameSession::new(seed);
    let mut moves_sent = 0;
    let mut moves_accepted = 0;

    while session.ticks() < max_ticks && !session.game_over() {
        if session.accepts_input() {
            let next = match policy {
                Policy::Forward => Some(Direction::Forward),
                Policy::Scripted => pending.next(),
            };
            match next {
                Some(dir) => {
                    moves_sent += 1;
                    if session.request_move(dir) {
                        moves_accepted += 1;
                    }
                }
                // Script finished and the last hop has landed.
                None => break,
            }
        }
        session.tick(TICK_MS);
    }

    Summary {
        seed,
        policy,
        score: session.score(),
        ticks: session.ticks(),
        elapsed_ms: session.elapsed_ms(),
        moves_sent,
        moves_accepted,
        game_over: session.game_over(),
        cause: session.death_cause().map(|c| c.as_str()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let script = cli.moves.as_deref().map(parse_moves).transpose()?;
    let summary = simulate(cli.seed, script, cli.max_ticks);
    log::info!("seed {} finished at score {}", summary.seed, summary.score);
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_picks_scripted_policy_and_stops_when_done() {
        // The first five lanes are always grass.
        let raw = ["forward", "a", "right"].map(String::from);
        let script = parse_moves(&raw).unwrap();
        let summary = simulate(3, Some(script), 10_000);
        assert_eq!(summary.policy, Policy::Scripted);
        assert_eq!(summary.moves_sent, 3);
        assert_eq!(summary.moves_accepted, 3);
        assert_eq!(summary.score, 1);
        assert!(!summary.game_over);
    }

    #[test]
    fn no_script_hops_forward_until_the_limit_or_death() {
        let summary = simulate(3, None, 2_000);
        assert_eq!(summary.policy, Policy::Forward);
        assert!(summary.score >= 4);
        assert!(summary.game_over || summary.ticks == 2_000);
        assert_eq!(summary.game_over, summary.cause.is_some());
    }

    #[test]
    fn unknown_moves_are_rejected() {
        assert!(parse_moves(&["jump".to_string()]).is_err());
        // Restart is an action but not a move.
        assert!(parse_moves(&["restart".to_string()]).is_err());
    }

    #[test]
    fn policy_serializes_in_snake_case() {
        let summary = simulate(1, Some(Vec::new()), 10);
        let line = serde_json::to_string(&summary).unwrap();
        assert!(line.contains("\"policy\":\"scripted\""), "{line}");
    }
}
