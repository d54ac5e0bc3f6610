//! Go Fish game implementation.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};
use crate::core::{CardId, PlayerId, RankValues, ZoneConfig, ZoneId};
use crate::engine::EngineOperations;
use crate::error::{EngineError, Result};
use crate::rules::{GameDriver, GamePhase, GameResult, TurnOrder};

use super::config::GoFishConfig;

/// Shared draw pile name.
pub const DRAW_PILE: &str = "deck";
pub const HAND: &str = "hand";
pub const BOOKS: &str = "books";

/// All thirteen ranks collected.
const TOTAL_BOOKS: i64 = 13;

/// Zone IDs for one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishSeat {
    pub player: PlayerId,
    pub hand: ZoneId,
    pub books: ZoneId,
}

/// Result of asking another player for a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AskOutcome {
    /// The asker holds no card of that rank; nothing happened.
    NotHoldingRank,
    /// The target handed over this many cards. The asker goes again.
    Received(usize),
    /// The target had none. The asker drew (if the pile wasn't empty) and
    /// the turn passed.
    GoFish { drew: Option<CardId> },
}

/// What the current player did on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FishAction {
    Asked {
        target: PlayerId,
        rank: Rank,
        outcome: AskOutcome,
    },
    /// Nobody to ask (empty hand, or every other hand empty): draw instead.
    Drew { card: Option<CardId> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishTurn {
    pub round: u32,
    pub player: PlayerId,
    pub action: FishAction,
    /// Books collected across all players after the turn.
    pub total_books: i64,
}

/// Go Fish for 2-6 players.
///
/// Books are counted in each player's score.
#[derive(Clone, Debug)]
pub struct GoFishGame {
    config: GoFishConfig,
    values: RankValues,
    draw_pile: Option<ZoneId>,
    seats: Vec<FishSeat>,
    turns: Option<TurnOrder>,
    phase: GamePhase,
    result: Option<GameResult>,
    rounds: u32,
}

impl GoFishGame {
    #[must_use]
    pub fn new(config: GoFishConfig) -> Self {
        Self {
            values: RankValues::new(config.ace),
            config,
            draw_pile: None,
            seats: Vec::new(),
            turns: None,
            phase: GamePhase::NotStarted,
            result: None,
            rounds: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GoFishConfig {
        &self.config
    }

    #[must_use]
    pub fn seats(&self) -> &[FishSeat] {
        &self.seats
    }

    #[must_use]
    pub fn draw_pile(&self) -> Option<ZoneId> {
        self.draw_pile
    }

    /// Whose turn it is, once the game is set up.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.turns.as_ref().map(TurnOrder::current)
    }

    /// Set up with fixed hands and draw pile (each listed bottom first)
    /// instead of a shuffled deck. One seat per hand.
    pub fn setup_with_hands<E: EngineOperations + ?Sized>(
        &mut self,
        engine: &mut E,
        hands: &[&[(Suit, Rank)]],
        draw_pile: &[(Suit, Rank)],
    ) -> Result<()> {
        self.config.player_count = hands.len();
        let pile = self.seat_players(engine)?;

        for &(suit, rank) in draw_pile {
            let card = engine.create_card(suit, rank, &self.values);
            engine.place_card(card, pile)?;
        }
        for (seat, hand) in self.seats.iter().zip(hands) {
            for &(suit, rank) in *hand {
                let card = engine.create_card(suit, rank, &self.values);
                engine.place_card(card, seat.hand)?;
            }
        }
        self.start(engine)
    }

    /// `asker` asks `target` for every card of `rank`.
    ///
    /// Only the current player may ask, and never themselves.
    pub fn ask_for_cards<E: EngineOperations + ?Sized>(
        &mut self,
        engine: &mut E,
        asker: PlayerId,
        target: PlayerId,
        rank: Rank,
    ) -> Result<AskOutcome> {
        if self.phase != GamePhase::InProgress {
            return Err(EngineError::NotInProgress);
        }
        if self.current_player() != Some(asker) {
            return Err(EngineError::IllegalMove(format!("it is not {asker}'s turn")));
        }
        if asker == target {
            return Err(EngineError::IllegalMove(format!("{asker} cannot ask themselves")));
        }
        let from = self.seat(target)?;
        let to = self.seat(asker)?;

        if cards_of_rank(engine, to.hand, rank).is_empty() {
            info!("{asker} holds no {rank}s to ask for");
            return Ok(AskOutcome::NotHoldingRank);
        }

        let matching = cards_of_rank(engine, from.hand, rank);
        let outcome = if matching.is_empty() {
            info!("{target}: \"Go Fish!\"");
            let drew = self.draw(engine, &to)?;
            if let Some(turns) = self.turns.as_mut() {
                turns.advance();
            }
            AskOutcome::GoFish { drew }
        } else {
            for &card in &matching {
                engine.move_card_to_zone(card, Some(from.hand), Some(to.hand), true)?;
            }
            info!("{target} gives {} {rank}(s) to {asker}", matching.len());
            AskOutcome::Received(matching.len())
        };

        self.check_for_books(engine)?;
        self.check_game_over(engine);
        Ok(outcome)
    }

    /// Move every four-of-a-kind from a hand to that player's books.
    ///
    /// Returns how many books were made.
    pub fn check_for_books<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<usize> {
        let mut made = 0;
        for seat in &self.seats {
            for rank in Rank::ALL {
                let cards = cards_of_rank(engine, seat.hand, rank);
                if cards.len() < 4 {
                    continue;
                }
                for card in cards {
                    engine.move_card_to_zone(card, Some(seat.hand), Some(seat.books), true)?;
                }
                engine.adjust_score(seat.player, 1)?;
                info!("{} collected a book of {rank}s", seat.player);
                made += 1;
            }
        }
        Ok(made)
    }

    /// Books collected by everyone.
    pub fn total_books<E: EngineOperations + ?Sized>(&self, engine: &E) -> i64 {
        self.seats.iter().map(|s| books_of(engine, s.player)).sum()
    }

    fn seat(&self, player: PlayerId) -> Result<FishSeat> {
        self.seats
            .iter()
            .find(|s| s.player == player)
            .copied()
            .ok_or(EngineError::UnknownPlayer(player))
    }

    /// Create players and zones. Returns the draw pile.
    fn seat_players<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<ZoneId> {
        if self.phase != GamePhase::NotStarted {
            return Err(EngineError::InvalidConfig("game already set up".into()));
        }
        self.config.validate()?;

        let pile = engine.create_zone(ZoneConfig::new(DRAW_PILE).face_down())?;
        for _ in 0..self.config.player_count {
            let player = engine.create_player(None);
            self.seats.push(FishSeat {
                player,
                hand: engine.create_zone(ZoneConfig::new(HAND).with_owner(player).face_up())?,
                books: engine.create_zone(ZoneConfig::new(BOOKS).with_owner(player).face_up())?,
            });
        }
        self.draw_pile = Some(pile);
        Ok(pile)
    }

    fn start<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<()> {
        self.check_for_books(engine)?;
        self.turns = Some(TurnOrder::new(self.seats.iter().map(|s| s.player)));
        self.phase = GamePhase::InProgress;
        info!("Go Fish set up for {} players", self.seats.len());
        self.check_game_over(engine);
        Ok(())
    }

    /// Top card of the draw pile into the seat's hand.
    fn draw<E: EngineOperations + ?Sized>(&self, engine: &mut E, seat: &FishSeat) -> Result<Option<CardId>> {
        let Some(pile) = self.draw_pile else {
            return Ok(None);
        };
        if engine.card_amount_in_zone(pile) == 0 {
            return Ok(None);
        }
        let card = engine.move_top_card(pile, seat.hand)?;
        debug!("{} draws {card}", seat.player);
        Ok(Some(card))
    }

    /// Finish when all books are out or the draw pile is empty.
    fn check_game_over<E: EngineOperations + ?Sized>(&mut self, engine: &E) {
        if self.phase != GamePhase::InProgress {
            return;
        }
        let pile_empty = self
            .draw_pile
            .map_or(true, |pile| engine.card_amount_in_zone(pile) == 0);
        if self.total_books(engine) >= TOTAL_BOOKS || pile_empty {
            let result = self.leader(engine);
            self.finish(result);
        }
    }

    /// Most books wins; the earliest seat wins a tie.
    fn leader<E: EngineOperations + ?Sized>(&self, engine: &E) -> GameResult {
        let mut best: Option<(PlayerId, i64)> = None;
        for seat in &self.seats {
            let books = books_of(engine, seat.player);
            if best.map_or(true, |(_, most)| books > most) {
                best = Some((seat.player, books));
            }
        }
        best.map_or(GameResult::Draw, |(player, _)| GameResult::Winner(player))
    }

    fn finish(&mut self, result: GameResult) {
        info!("Game over after {} rounds: {result}", self.rounds);
        self.result = Some(result);
        self.phase = GamePhase::Finished;
    }
}

impl GameDriver for GoFishGame {
    type Round = FishTurn;

    /// Shared face-down draw pile, a face-up hand and books pile per
    /// player, `hand_size` cards dealt to each.
    fn setup<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<()> {
        let pile = self.seat_players(engine)?;

        let deck = engine.build_standard_deck(None, &self.values)?;
        engine.shuffle_deck(deck)?;
        engine.deal_from_deck(deck, pile, 52)?;

        for _ in 0..self.config.hand_size {
            for seat in &self.seats {
                engine.move_top_card(pile, seat.hand)?;
            }
        }
        self.start(engine)
    }

    /// The current player asks the next player holding cards for the rank
    /// of their own top card, or draws if there is nobody to ask.
    fn play_round<E: EngineOperations + ?Sized>(&mut self, engine: &mut E) -> Result<FishTurn> {
        let player = match (&self.turns, self.phase) {
            (Some(turns), GamePhase::InProgress) => turns.current(),
            _ => return Err(EngineError::NotInProgress),
        };
        self.rounds += 1;
        let seat = self.seat(player)?;

        let rank = engine
            .top_card(seat.hand)
            .and_then(|card| engine.card(card))
            .map(|card| card.rank());
        let target = self.turns.as_ref().and_then(|turns| {
            turns
                .others(player)
                .find(|&p| self.seat(p).is_ok_and(|s| engine.card_amount_in_zone(s.hand) > 0))
        });

        let action = match (rank, target) {
            (Some(rank), Some(target)) => FishAction::Asked {
                target,
                rank,
                outcome: self.ask_for_cards(engine, player, target, rank)?,
            },
            _ => {
                let card = self.draw(engine, &seat)?;
                self.check_for_books(engine)?;
                if let Some(turns) = self.turns.as_mut() {
                    turns.advance();
                }
                self.check_game_over(engine);
                FishAction::Drew { card }
            }
        };

        if self.phase == GamePhase::InProgress && self.rounds >= self.config.max_rounds {
            let result = self.leader(engine);
            self.finish(result);
        }

        Ok(FishTurn {
            round: self.rounds,
            player,
            action,
            total_books: self.total_books(engine),
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

fn cards_of_rank<E: EngineOperations + ?Sized>(engine: &E, zone: ZoneId, rank: Rank) -> Vec<CardId> {
    engine
        .zone_cards(zone)
        .iter()
        .copied()
        .filter(|&id| engine.card(id).is_some_and(|c| c.rank() == rank))
        .collect()
}

fn books_of<E: EngineOperations + ?Sized>(engine: &E, player: PlayerId) -> i64 {
    engine.player(player).map_or(0, |p| p.score())
}
