//! War - plays one seeded game of War to completion and prints each round.
//!
//! Set `RUST_LOG=debug` to see every card move.

use std::path::PathBuf;
use std::time::Duration;

use card_table::engine::{EngineOperations, Table};
use card_table::games::war::{Resolution, TiePolicy, WarConfig, WarGame};
use card_table::rules::{GameDriver, GamePhase};
use card_table::AceRank;
use clap::{Parser, ValueEnum};
use log::info;

/// How equal cards are settled
#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieArg {
    /// Bury cards face down and reveal again
    War,
    /// Flip a coin
    CoinFlip,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AceArg {
    High,
    Low,
}

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "Play a game of War on a card table", long_about = None)]
struct Cli {
    /// Load settings from a JSON file; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Random seed for the shuffle and coin flips
    #[arg(long)]
    seed: Option<u64>,

    /// Tie-break policy
    #[arg(long, value_enum)]
    tie: Option<TieArg>,

    /// Cards buried face down in each war
    #[arg(long)]
    hidden_cards: Option<usize>,

    /// Whether the ace is high (14) or low (1)
    #[arg(long, value_enum)]
    ace: Option<AceArg>,

    /// Round ceiling
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Pause between revealing and resolving each round, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Print the final table as JSON
    #[arg(long)]
    snapshot: bool,
}

impl Cli {
    fn war_config(&self) -> Result<WarConfig, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => WarConfig::default(),
        };

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        let hidden_cards = match (self.hidden_cards, config.tie_policy) {
            (Some(n), _) => n,
            (None, TiePolicy::War { hidden_cards }) => hidden_cards,
            (None, TiePolicy::CoinFlip) => 3,
        };
        match self.tie {
            Some(TieArg::War) => config = config.with_tie_policy(TiePolicy::War { hidden_cards }),
            Some(TieArg::CoinFlip) => config = config.with_tie_policy(TiePolicy::CoinFlip),
            None => {
                if let TiePolicy::War { .. } = config.tie_policy {
                    config = config.with_tie_policy(TiePolicy::War { hidden_cards });
                }
            }
        }
        if let Some(ace) = self.ace {
            config = config.with_ace(match ace {
                AceArg::High => AceRank::High,
                AceArg::Low => AceRank::Low,
            });
        }
        if let Some(rounds) = self.max_rounds {
            config = config.with_max_rounds(rounds);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_resolve_delay(Duration::from_millis(ms));
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.war_config()?;
    info!("Starting War with {config:?}");

    let mut table = Table::new(config.seed);
    let mut game = WarGame::new(config);
    game.setup(&mut table)?;

    while game.phase() == GamePhase::InProgress {
        let report = game.play_round(&mut table)?;
        let plays: Vec<_> = report
            .plays
            .iter()
            .filter_map(|play| table.card(play.card).map(|card| format!("{}: {card}", play.player)))
            .collect();

        let outcome = match (report.resolution, report.winner) {
            (Resolution::Stalemate, _) | (_, None) => "stalemate".to_owned(),
            (Resolution::CoinFlip, Some(winner)) => format!("{winner} wins the coin flip"),
            (Resolution::War { wars }, Some(winner)) => format!("{winner} wins after {wars} war(s)"),
            (Resolution::OutOfCards { player }, Some(winner)) => {
                format!("{player} ran out of cards, {winner} wins")
            }
            (Resolution::HigherCard, Some(winner)) => format!("{winner} wins"),
        };
        println!("Round {:>4}: {} -> {outcome} ({} cards)", report.round, plays.join(", "), report.collected);
        table.drain_events();
    }

    if let Some(result) = game.result() {
        let totals = game.card_totals(&table);
        println!(
            "Game over after {} rounds: {result} (cards {} / {})",
            game.rounds_played(),
            totals[0],
            totals[1]
        );
    }

    if cli.snapshot {
        println!("{}", table.snapshot().to_json()?);
    }

    Ok(())
}
