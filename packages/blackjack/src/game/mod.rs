use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::hand::settle;
use crate::player::{House, Participant, Player};
use crate::table_io::{DecisionSource, TableDisplay};
use crate::{Deck, Error, HandOutcome, TableRules};

/// Where a round currently is. Phases run strictly in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Init,
    InitialDeal,
    RevealPlayers,
    PlayerTurns,
    DealerReveal,
    DealerTurn,
    Settle,
    Reset,
}

/// How one player finished a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatResult {
    pub name: String,
    pub total: u32,
    pub outcome: HandOutcome,
}

/// Summary of a finished round, taken before the hands are cleared
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub results: Vec<SeatResult>,
    pub house_total: u32,
    pub house_busted: bool,
    pub cards_remaining: usize,
}

/// A game session: one deck, the House and the seated players
#[derive(Debug)]
pub struct Game<R> {
    deck: Deck,
    house: House,
    players: Vec<Player>,
    rules: TableRules,
    rng: R,
    phase: RoundPhase,
    rounds_played: u32,
}

impl<R: Rng> Game<R> {
    /// Seats the players and prepares a freshly shuffled deck
    pub fn new<S: AsRef<str>>(names: &[S], rules: TableRules, mut rng: R) -> Result<Self, Error> {
        let mut deck = Deck::new();
        deck.populate();
        deck.shuffle(&mut rng);
        Self::with_deck(names, rules, rng, deck)
    }

    /// Seats the players in front of a deck prepared by the caller
    pub fn with_deck<S: AsRef<str>>(
        names: &[S],
        rules: TableRules,
        rng: R,
        deck: Deck,
    ) -> Result<Self, Error> {
        let count = names.len();
        if !(TableRules::MIN_PLAYERS..=rules.max_players).contains(&count) {
            return Err(Error::PlayerCount {
                count,
                min: TableRules::MIN_PLAYERS,
                max: rules.max_players,
            });
        }

        let players = names.iter().map(|n| Player::new(n.as_ref())).collect();
        let house = House::new(rules.house_name.clone());
        log::info!("Seated {count} player(s), {} cards in the deck", deck.remaining());

        Ok(Self {
            deck,
            house,
            players,
            rules,
            rng,
            phase: RoundPhase::Init,
            rounds_played: 0,
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn house(&self) -> &House {
        &self.house
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Plays one full round and leaves every hand empty afterwards
    pub fn play(
        &mut self,
        decisions: &mut dyn DecisionSource,
        display: &mut dyn TableDisplay,
    ) -> RoundReport {
        self.enter(RoundPhase::Init);
        self.prepare_deck();

        self.enter(RoundPhase::InitialDeal);
        self.initial_deal(display);

        self.enter(RoundPhase::RevealPlayers);
        self.flip_hole_card(display);
        for player in &self.players {
            display.show_hand(&player.seat().view());
        }
        display.show_hand(&self.house.seat().view());

        self.enter(RoundPhase::PlayerTurns);
        for player in &mut self.players {
            self.deck.additional_cards(player, decisions, display);
        }

        self.enter(RoundPhase::DealerReveal);
        self.flip_hole_card(display);
        display.show_hand(&self.house.seat().view());

        self.enter(RoundPhase::DealerTurn);
        self.deck.additional_cards(&mut self.house, decisions, display);

        self.enter(RoundPhase::Settle);
        let report = self.settle(display);

        self.enter(RoundPhase::Reset);
        self.reset();

        self.rounds_played += 1;
        self.enter(RoundPhase::Init);
        report
    }

    fn enter(&mut self, phase: RoundPhase) {
        log::debug!("Round {}: {:?} -> {:?}", self.rounds_played + 1, self.phase, phase);
        self.phase = phase;
    }

    fn prepare_deck(&mut self) {
        if self.rules.needs_reshuffle(self.deck.remaining()) {
            log::info!("Only {} cards left, reshuffling", self.deck.remaining());
            self.deck.populate();
            self.deck.shuffle(&mut self.rng);
        }
    }

    /// Two passes: one card to each player in seat order, then one to the House
    fn initial_deal(&mut self, display: &mut dyn TableDisplay) {
        for _ in 0..2 {
            for player in &mut self.players {
                self.deck.deal_or_report(player.seat_mut().hand_mut(), display);
            }
            self.deck.deal_or_report(self.house.seat_mut().hand_mut(), display);
        }
    }

    fn flip_hole_card(&mut self, display: &mut dyn TableDisplay) {
        if let Some(event) = self.house.flip_first_card() {
            display.announce(&event);
        }
    }

    fn settle(&self, display: &mut dyn TableDisplay) -> RoundReport {
        let house_cards = self.house.hand().cards();
        let results = self
            .players
            .iter()
            .map(|player| {
                let outcome = settle(player.hand().cards(), house_cards);
                match outcome {
                    HandOutcome::Win => display.announce(&player.win()),
                    HandOutcome::Loss => display.announce(&player.lose()),
                    HandOutcome::Push => display.announce(&player.push()),
                    // already announced during the player's turn
                    HandOutcome::Bust => {}
                }
                SeatResult {
                    name: player.name().to_string(),
                    total: player.hand().value(),
                    outcome,
                }
            })
            .collect();

        RoundReport {
            round: self.rounds_played + 1,
            results,
            house_total: self.house.hand().value(),
            house_busted: self.house.is_busted(),
            cards_remaining: self.deck.remaining(),
        }
    }

    fn reset(&mut self) {
        for player in &mut self.players {
            player.seat_mut().hand_mut().clear();
        }
        self.house.seat_mut().hand_mut().clear();
    }
}
