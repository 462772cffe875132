//! Core types for the trivia viewer.

use serde::{Deserialize, Serialize};

/// Number of questions on every card.
pub const QUESTIONS_PER_CARD: usize = 6;

/// Number of cards in a day's file.
pub const CARDS_PER_SET: usize = 4;

/// Non-blank lines a day's file must contain.
pub const LINES_PER_SET: usize = CARDS_PER_SET * QUESTIONS_PER_CARD;

/// Tab-separated fields on every line.
pub const FIELDS_PER_LINE: usize = 7;

/// One trivia question, exactly as it appears in the source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub date: String,
    pub index: String,
    pub topic: String,
    pub sub_topic: String,
    pub question: String,
    pub answer: String,
    pub image: String,
}

/// A card of exactly six questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Card {
    questions: Vec<Question>,
}

impl Card {
    /// Only the parser builds cards, always from a full chunk.
    pub(crate) fn from_chunk(questions: Vec<Question>) -> Self {
        debug_assert_eq!(questions.len(), QUESTIONS_PER_CARD);
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Image shown for the card (taken from its first question).
    pub fn image(&self) -> &str {
        self.questions
            .first()
            .map(|q| q.image.as_str())
            .unwrap_or_default()
    }
}

/// All cards parsed for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardSet {
    cards: Vec<Card>,
}

impl CardSet {
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), CARDS_PER_SET);
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
