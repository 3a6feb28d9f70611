use rand::seq::SliceRandom;
use rand::Rng;

use crate::player::Participant;
use crate::table_io::{DecisionSource, TableDisplay, TableEvent};
use crate::{Card, Error, Hand, Rank, Suit};

pub const DECK_SIZE: usize = 52;

/// The undealt cards. The top of the deck is the end of the hand.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Hand,
}

impl Deck {
    /// An empty deck; call [`Deck::populate`] before dealing
    pub fn new() -> Self {
        Self {
            cards: Hand::with_capacity(DECK_SIZE),
        }
    }

    /// A deck stacked with the given cards. The last card is dealt first.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Hand::from_cards(cards),
        }
    }

    /// Replaces the contents with one face-up card of every rank and suit
    pub fn populate(&mut self) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.add_card(Card::new(rank, suit));
            }
        }
        log::debug!("Deck populated with {} cards", self.cards.len());
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.cards_mut().shuffle(rng);
        log::debug!("Deck shuffled ({} cards)", self.cards.len());
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Moves the top card into `hand`
    pub fn deal(&mut self, hand: &mut Hand) -> Result<(), Error> {
        let card = self.cards.take_top().ok_or(Error::OutOfCards)?;
        log::trace!("Dealt {card}, {} left", self.cards.len());
        hand.add_card(card);
        Ok(())
    }

    /// Deals one card, reporting an empty deck to the display instead of failing.
    /// Returns whether a card was dealt.
    pub fn deal_or_report(&mut self, hand: &mut Hand, display: &mut dyn TableDisplay) -> bool {
        match self.deal(hand) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("{err}");
                display.announce(&TableEvent::OutOfCards);
                false
            }
        }
    }

    /// Keeps dealing to `participant` while it is not busted and wants a hit.
    ///
    /// The hand is shown after every card and a bust is announced. An empty
    /// deck ends the turn.
    pub fn additional_cards(
        &mut self,
        participant: &mut dyn Participant,
        decisions: &mut dyn DecisionSource,
        display: &mut dyn TableDisplay,
    ) {
        while !participant.is_busted() && participant.is_hitting(decisions) {
            let seat = participant.seat_mut();
            if !self.deal_or_report(seat.hand_mut(), display) {
                break;
            }
            display.show_hand(&seat.view());

            if seat.is_busted() {
                log::debug!("{} busted with {}", seat.name(), seat.total());
                display.announce(&seat.bust_event());
            }
        }
    }
}
