//! Session state for one loaded date: the active card and its reveal progress.

use serde::{Deserialize, Serialize};

use crate::date::DateKey;
use crate::types::{Card, CardSet, Question, QUESTIONS_PER_CARD};

/// One disclosed question of the active card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEntry {
    pub question_index: usize,
    pub answer_visible: bool,
}

/// Outcome of a single `reveal_next` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealStep {
    /// The answer to this question was shown.
    Answer { question_index: usize },
    /// This question was appended.
    Question { question_index: usize },
    /// Every answer on the card is already visible.
    Exhausted,
}

/// Progressive disclosure of a card's questions.
///
/// Always holds at least one entry. Indices are contiguous from 0 and only
/// the last entry may have its answer hidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RevealState {
    entries: Vec<RevealEntry>,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            entries: vec![RevealEntry {
                question_index: 0,
                answer_visible: false,
            }],
        }
    }
}

impl RevealState {
    pub fn entries(&self) -> &[RevealEntry] {
        &self.entries
    }

    pub fn last(&self) -> RevealEntry {
        // entries is never empty
        self.entries[self.entries.len() - 1]
    }

    /// The last question's answer is visible; nothing more to reveal.
    pub fn is_complete(&self) -> bool {
        let last = self.last();
        last.answer_visible && last.question_index + 1 >= QUESTIONS_PER_CARD
    }

    fn advance(&mut self) -> RevealStep {
        let last = self.last();
        if !last.answer_visible {
            if let Some(entry) = self.entries.last_mut() {
                entry.answer_visible = true;
            }
            RevealStep::Answer {
                question_index: last.question_index,
            }
        } else if last.question_index + 1 < QUESTIONS_PER_CARD {
            let question_index = last.question_index + 1;
            self.entries.push(RevealEntry {
                question_index,
                answer_visible: false,
            });
            RevealStep::Question { question_index }
        } else {
            RevealStep::Exhausted
        }
    }
}

/// A question as the rendering layer should show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedQuestion {
    /// 1-based position on the card.
    pub number: usize,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

/// Snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub date: String,
    /// 1-based.
    pub card_number: usize,
    pub card_count: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub can_reveal: bool,
    pub image_path: String,
    pub revealed: Vec<RevealedQuestion>,
}

/// An active session over one date's cards.
#[derive(Debug, Clone)]
pub struct Session {
    date: DateKey,
    cards: CardSet,
    active_card: usize,
    reveal: RevealState,
}

impl Session {
    pub fn new(date: DateKey, cards: CardSet) -> Self {
        Self {
            date,
            cards,
            active_card: 0,
            reveal: RevealState::default(),
        }
    }

    pub fn date(&self) -> &DateKey {
        &self.date
    }

    pub fn card_set(&self) -> &CardSet {
        &self.cards
    }

    pub fn active_card_index(&self) -> usize {
        self.active_card
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.active_card)
    }

    pub fn reveal_state(&self) -> &RevealState {
        &self.reveal
    }

    pub fn has_next_card(&self) -> bool {
        self.active_card + 1 < self.cards.len()
    }

    pub fn has_previous_card(&self) -> bool {
        self.active_card > 0
    }

    pub fn can_reveal(&self) -> bool {
        !self.reveal.is_complete()
    }

    /// Reveal the current answer, or advance to the next question.
    pub fn reveal_next(&mut self) -> RevealStep {
        let step = self.reveal.advance();
        tracing::debug!(card = self.active_card, ?step, "reveal");
        step
    }

    /// Move to the next card. Returns false at the last card.
    pub fn go_to_next_card(&mut self) -> bool {
        if !self.has_next_card() {
            return false;
        }
        self.focus(self.active_card + 1);
        true
    }

    /// Move to the previous card. Returns false at the first card.
    pub fn go_to_previous_card(&mut self) -> bool {
        if !self.has_previous_card() {
            return false;
        }
        self.focus(self.active_card - 1);
        true
    }

    fn focus(&mut self, index: usize) {
        self.active_card = index;
        self.reveal = RevealState::default();
        tracing::debug!(card = index, "focused card");
    }

    /// Revealed entries paired with their questions.
    pub fn revealed(&self) -> impl Iterator<Item = (RevealEntry, &Question)> + '_ {
        let card = self.current_card();
        self.reveal.entries().iter().filter_map(move |entry| {
            card.and_then(|c| c.question(entry.question_index))
                .map(|q| (*entry, q))
        })
    }

    pub fn view(&self) -> SessionView {
        let image = self.current_card().map(Card::image).unwrap_or_default();
        SessionView {
            date: self.date.to_string(),
            card_number: self.active_card + 1,
            card_count: self.card_count(),
            has_next: self.has_next_card(),
            has_previous: self.has_previous_card(),
            can_reveal: self.can_reveal(),
            image_path: self.date.image_path(image),
            revealed: self
                .revealed()
                .map(|(entry, q)| RevealedQuestion {
                    number: entry.question_index + 1,
                    question: q.question.clone(),
                    answer: entry.answer_visible.then(|| q.answer.clone()),
                })
                .collect(),
        }
    }
}
