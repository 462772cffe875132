//! Parser for daily trivia files.
//!
//! # Format
//! One question per line, seven tab-separated fields:
//! ```text
//! date<TAB>index<TAB>topic<TAB>sub_topic<TAB>question<TAB>answer<TAB>image
//! ```
//! A file holds exactly 24 non-blank lines. Lines 1-6 form the first card,
//! 7-12 the second, and so on. Blank lines are ignored anywhere.

use crate::error::{ParseError, Result};
use crate::types::{
    Card, CardSet, Question, FIELDS_PER_LINE, LINES_PER_SET, QUESTIONS_PER_CARD,
};

const DELIMITER: char = '\t';

/// Parse a day's file into its four cards.
///
/// Parsing is all-or-nothing: any structural problem fails the whole file.
pub fn parse(content: &str) -> Result<CardSet> {
    let lines: Vec<&str> = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if lines.len() != LINES_PER_SET {
        return Err(ParseError::LineCount {
            expected: LINES_PER_SET,
            actual: lines.len(),
        });
    }

    let mut cards = Vec::with_capacity(lines.len() / QUESTIONS_PER_CARD);
    for (chunk_idx, chunk) in lines.chunks_exact(QUESTIONS_PER_CARD).enumerate() {
        let questions = chunk
            .iter()
            .enumerate()
            .map(|(idx, line)| parse_line(line, chunk_idx * QUESTIONS_PER_CARD + idx))
            .collect::<Result<Vec<_>>>()?;
        cards.push(Card::from_chunk(questions));
    }

    tracing::debug!("Parsed {} cards from {} lines", cards.len(), lines.len());
    Ok(CardSet::from_cards(cards))
}

fn parse_line(line: &str, line_index: usize) -> Result<Question> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    let &[date, index, topic, sub_topic, question, answer, image] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            expected: FIELDS_PER_LINE,
            actual: fields.len(),
            line_index,
        });
    };

    Ok(Question {
        date: date.to_string(),
        index: index.to_string(),
        topic: topic.to_string(),
        sub_topic: sub_topic.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        image: image.to_string(),
    })
}
