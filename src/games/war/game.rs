//! War game implementation.

use std::cmp::Ordering;
use std::thread;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Rank, Suit};
use crate::core::{CardId, GameStatus, GameWinner, PlayerId, RankValues, ZoneConfig, ZoneId};
use crate::engine::EngineOperations;
use crate::error::{EngineError, Result};
use crate::rules::{GameDriver, GamePhase, GameResult};

use super::config::{TiePolicy, WarConfig};

/// Zone names each seat owns.
pub const HAND: &str = "hand";
pub const BATTLE_PILE: &str = "battlePile";
pub const WON_CARDS: &str = "wonCards";

/// Zone IDs for one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarSeat {
    pub player: PlayerId,
    /// Face-down draw pile.
    pub hand: ZoneId,
    /// Cards committed this round.
    pub battle: ZoneId,
    /// Won cards, reshuffled into the hand when it runs out.
    pub reserve: ZoneId,
}

/// A face-up card revealed during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub player: PlayerId,
    pub card: CardId,
    pub value: i32,
}

/// How a round was settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The higher card took the battle.
    HigherCard,
    /// A tie settled by a coin flip.
    CoinFlip,
    /// A tie settled after `wars` war rounds.
    War { wars: u32 },
    /// `player` ran out of cards during a war and lost.
    OutOfCards { player: PlayerId },
    /// Nobody could take the battle: both players ran out, or the war
    /// depth bound was hit.
    Stalemate,
}

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    /// Revealed cards in order: the battle pair, then one pair per war.
    pub plays: SmallVec<[Play; 2]>,
    /// Comparison of the first revealed pair (seat 0 against seat 1).
    pub first_comparison: Option<Ordering>,
    pub resolution: Resolution,
    pub winner: Option<PlayerId>,
    /// Cards swept into the winner's reserve.
    pub collected: usize,
}

enum Reveal {
    Cards(CardId, CardId),
    /// Which seats had no card to commit.
    Out([bool; 2]),
}

/// A two-player game of War.
///
/// ## Usage
///
/// ```
/// use card_table::engine::Table;
/// use card_table::games::war::{WarConfig, WarGame};
/// use card_table::rules::{GameDriver, GamePhase};
///
/// let config = WarConfig::default().with_seed(7);
/// let mut table = Table::new(config.seed);
/// let mut game = WarGame::new(config);
///
/// let result = game.play_to_completion(&mut table)?;
/// assert_eq!(game.phase(), GamePhase::Finished);
/// assert!(game.rounds_played() <= 1000);
/// # let _ = result;
/// # Ok::<(), card_table::error::EngineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct WarGame {
    config: WarConfig,
    values: RankValues,
    seats: Option<[WarSeat; 2]>,
    phase: GamePhase,
    result: Option<GameResult>,
    rounds: u32,
    status: GameStatus,
}

impl WarGame {
    #[must_use]
    pub fn new(config: WarConfig) -> Self {
        Self {
            values: RankValues::new(config.ace),
            config,
            seats: None,
            phase: GamePhase::NotStarted,
            result: None,
            rounds: 0,
            status: GameStatus::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &WarConfig {
        &self.config
    }

    #[must_use]
    pub fn rank_values(&self) -> &RankValues {
        &self.values
    }

    /// Both seats, once the game is set up.
    #[must_use]
    pub fn seats(&self) -> Option<&[WarSeat; 2]> {
        self.seats.as_ref()
    }

    /// Per-player card totals, refreshed after every round.
    #[must_use]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Set up with fixed hands instead of a shuffled deck.
    ///
    /// Each hand is listed bottom first; the last card is played first.
    pub fn setup_with_hands<E: EngineOperations + ?Sized>(
        &mut self,
        engine: &mut E,
        hands: [&[(Suit, Rank)]; 2],
    ) -> Result<()> {
        let seats = self.seat_players(engine)?;
        for (seat, hand) in seats.iter().zip(hands) {
            for &(suit, rank) in hand {
                let card = engine.create_card(suit, rank, &self.values);
                engine.place_card(card, seat.hand)?;
            }
        }
        self.start(engine, seats);
        Ok(())
    }

    /// The winner if a player has no cards left in hand or reserve.
    ///
    /// Seat 0 is checked first, so if both are empty seat 1 wins.
    pub fn check_win_condition<E: EngineOperations + ?Sized>(&self, engine: &E) -> Option<GameResult> {
        let seats = self.seats.as_ref()?;
        for (i, seat) in seats.iter().enumerate() {
            if engine.card_amount_in_zone(seat.hand) == 0
                && engine.card_amount_in_zone(seat.reserve) == 0
            {
                return Some(GameResult::Winner(seats[1 - i].player));
            }
        }
        None
    }

    /// Cards each seat holds across hand and reserve.
    pub fn card_totals<E: EngineOperations + ?Sized>(&self, engine: &E) -> [usize; 2] {
        match &self.seats {
            Some(seats) => seats.map(|seat| {
                engine.card_amount_in_zone(seat.hand) + engine.card_amount_in_zone(seat.reserve)
            }),
            None => [0, 0],
        }
    }

    fn seat_players<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<[WarSeat; 2]> {
        if self.phase != GamePhase::NotStarted {
            return Err(EngineError::InvalidConfig("game already set up".into()));
        }
        self.config.validate()?;

        Ok([Self::seat(engine)?, Self::seat(engine)?])
    }

    fn seat<E: EngineOperations + ?Sized>(engine: &mut E) -> Result<WarSeat> {
        let player = engine.create_player(None);
        Ok(WarSeat {
            player,
            hand: engine.create_zone(ZoneConfig::new(HAND).with_owner(player).face_down())?,
            battle: engine.create_zone(ZoneConfig::new(BATTLE_PILE).with_owner(player).face_up())?,
            reserve: engine.create_zone(ZoneConfig::new(WON_CARDS).with_owner(player).face_up())?,
        })
    }

    fn start<E: EngineOperations + ?Sized>(&mut self, engine: &E, seats: [WarSeat; 2]) {
        for seat in &seats {
            self.status.create_status(seat.player);
        }
        self.seats = Some(seats);
        self.phase = GamePhase::InProgress;
        self.update_status(engine);

        let [a, b] = self.card_totals(engine);
        info!("War set up: {} holds {a} cards, {} holds {b}", seats[0].player, seats[1].player);

        if let Some(result) = self.check_win_condition(engine) {
            self.finish(result);
        }
    }

    fn finish(&mut self, result: GameResult) {
        if let Some(winner) = result.winner() {
            self.status.set_win_decider(winner);
        }
        info!("Game over after {} rounds: {result}", self.rounds);
        self.result = Some(result);
        self.phase = GamePhase::Finished;
    }

    fn update_status<E: EngineOperations + ?Sized>(&mut self, engine: &E) {
        let totals = self.card_totals(engine);
        if let Some(seats) = &self.seats {
            for (seat, total) in seats.iter().zip(totals) {
                self.status.set_status(seat.player, total as i64);
            }
        }
    }

    /// Decide the game on card totals.
    fn result_by_totals(&self, seats: &[WarSeat; 2]) -> GameResult {
        let score = |p| self.status.status(p).unwrap_or(0);
        match GameStatus::game_winner(score(seats[0].player), score(seats[1].player)) {
            GameWinner::PlayerOne => GameResult::Winner(seats[0].player),
            GameWinner::PlayerTwo => GameResult::Winner(seats[1].player),
            GameWinner::Tie => GameResult::Draw,
        }
    }

    /// Move the seat's top hand card onto its battle pile.
    ///
    /// An empty hand is refilled from the shuffled reserve first. `None`
    /// when the seat has no cards left.
    fn commit<E: EngineOperations + ?Sized>(
        engine: &mut E,
        seat: &WarSeat,
        face_up: bool,
    ) -> Result<Option<CardId>> {
        if engine.card_amount_in_zone(seat.hand) == 0 {
            if engine.card_amount_in_zone(seat.reserve) == 0 {
                return Ok(None);
            }
            engine.shuffle_zone(seat.reserve)?;
            let moved = engine.move_all(seat.reserve, seat.hand)?;
            debug!("{} takes {moved} won cards back into hand", seat.player);
        }

        let Some(card) = engine.top_card(seat.hand) else {
            return Ok(None);
        };
        engine.move_card_to_zone(card, Some(seat.hand), Some(seat.battle), face_up)?;
        Ok(Some(card))
    }

    fn reveal<E: EngineOperations + ?Sized>(
        engine: &mut E,
        seats: &[WarSeat; 2],
        plays: &mut SmallVec<[Play; 2]>,
    ) -> Result<Reveal> {
        let mut cards = [None; 2];
        for (slot, seat) in cards.iter_mut().zip(seats) {
            *slot = Self::commit(engine, seat, true)?;
            if let Some(card) = *slot {
                let value = engine.card_value(card).unwrap_or_default();
                debug!("{} plays {card} (value {value})", seat.player);
                plays.push(Play {
                    player: seat.player,
                    card,
                    value,
                });
            }
        }

        Ok(match cards {
            [Some(a), Some(b)] => Reveal::Cards(a, b),
            [a, b] => Reveal::Out([a.is_none(), b.is_none()]),
        })
    }

    /// Both seats bury `hidden` cards face down. Returns which seats ran out.
    fn bury<E: EngineOperations + ?Sized>(
        engine: &mut E,
        seats: &[WarSeat; 2],
        hidden: usize,
    ) -> Result<[bool; 2]> {
        let mut out = [false; 2];
        for (flag, seat) in out.iter_mut().zip(seats) {
            for _ in 0..hidden {
                if Self::commit(engine, seat, false)?.is_none() {
                    *flag = true;
                    break;
                }
            }
        }
        Ok(out)
    }

    fn pause(&self) {
        let delay = self.config.resolve_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

impl GameDriver for WarGame {
    type Round = RoundReport;

    /// Two players, a shuffled 52-card deck dealt alternately into two
    /// hands of 26.
    fn setup<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<()> {
        let seats = self.seat_players(engine)?;
        let deck = engine.build_standard_deck(None, &self.values)?;
        engine.shuffle_deck(deck)?;
        engine.deal_round_robin(deck, &[seats[0].hand, seats[1].hand], 26)?;
        self.start(engine, seats);
        Ok(())
    }

    fn play_round<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<RoundReport> {
        let seats = match (self.phase, self.seats) {
            (GamePhase::InProgress, Some(seats)) => seats,
            _ => return Err(EngineError::NotInProgress),
        };

        self.rounds += 1;
        debug!("round {}", self.rounds);

        let mut plays = SmallVec::new();
        let mut reveal = Self::reveal(engine, &seats, &mut plays)?;
        let first_comparison = match reveal {
            Reveal::Cards(a, b) => engine.compare_card_ids(a, b),
            Reveal::Out(_) => None,
        };
        self.pause();

        let mut wars = 0;
        let (winner, resolution) = loop {
            let (a, b) = match reveal {
                Reveal::Cards(a, b) => (a, b),
                Reveal::Out(out) => break out_of_cards(&seats, out),
            };
            let settled = if wars == 0 {
                Resolution::HigherCard
            } else {
                Resolution::War { wars }
            };

            match engine.compare_card_ids(a, b).ok_or(EngineError::UnknownCard(a))? {
                Ordering::Greater => break (Some(seats[0].player), settled),
                Ordering::Less => break (Some(seats[1].player), settled),
                Ordering::Equal => match self.config.tie_policy {
                    TiePolicy::CoinFlip => {
                        let winner = if engine.rng().coin_flip() { seats[0] } else { seats[1] };
                        info!("Tie! Coin flip goes to {}", winner.player);
                        break (Some(winner.player), Resolution::CoinFlip);
                    }
                    TiePolicy::War { hidden_cards } => {
                        if wars >= self.config.max_war_depth {
                            warn!("war depth bound {} reached", self.config.max_war_depth);
                            break (None, Resolution::Stalemate);
                        }
                        wars += 1;
                        info!("War! ({wars})");

                        let out = Self::bury(engine, &seats, hidden_cards)?;
                        reveal = if out.contains(&true) {
                            Reveal::Out(out)
                        } else {
                            Self::reveal(engine, &seats, &mut plays)?
                        };
                    }
                },
            }
        };

        let mut collected = 0;
        if let Some(winner) = winner {
            let pile = if winner == seats[0].player {
                seats[0].reserve
            } else {
                seats[1].reserve
            };
            for seat in &seats {
                collected += engine.move_all(seat.battle, pile)?;
            }
            info!("{winner} takes the round ({collected} cards)");
        }

        self.update_status(engine);

        if resolution == Resolution::Stalemate {
            self.finish(GameResult::Draw);
        } else if let Some(result) = self.check_win_condition(engine) {
            self.finish(result);
        } else if self.rounds >= self.config.max_rounds {
            warn!("round ceiling {} reached, deciding on card totals", self.config.max_rounds);
            let result = self.result_by_totals(&seats);
            self.finish(result);
        }

        Ok(RoundReport {
            round: self.rounds,
            plays,
            first_comparison,
            resolution,
            winner,
            collected,
        })
    }

    fn phase(&self) -> GamePhase {
        self.phase
    }

    fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    fn rounds_played(&self) -> u32 {
        self.rounds
    }
}

/// Settle a round where at least one seat could not commit a card.
fn out_of_cards(seats: &[WarSeat; 2], out: [bool; 2]) -> (Option<PlayerId>, Resolution) {
    match out {
        [true, false] => (
            Some(seats[1].player),
            Resolution::OutOfCards {
                player: seats[0].player,
            },
        ),
        [false, true] => (
            Some(seats[0].player),
            Resolution::OutOfCards {
                player: seats[1].player,
            },
        ),
        _ => (None, Resolution::Stalemate),
    }
}
