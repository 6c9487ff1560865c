//! Legal questions view

use chrono::{DateTime, Utc};

use haven_common::filter::{matches_query, newest_first};
use haven_common::{Document, LegalQuestion};

use super::constants::NO_QUESTIONS_TEXT;
use super::{CardAction, ViewContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCard {
    pub id: String,
    pub from_name: String,
    pub created_at: DateTime<Utc>,
    pub question: String,
    /// None while unanswered
    pub answer: Option<String>,
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalView {
    pub cards: Vec<QuestionCard>,
    /// Set when no question matches
    pub empty_text: Option<&'static str>,
}

/// Build the legal view: matching questions, newest first
pub fn render(doc: &Document, ctx: &ViewContext) -> LegalView {
    let actions = if ctx.role.can_answer_questions() {
        vec![CardAction::Answer]
    } else {
        Vec::new()
    };

    let matching = doc.legal_questions.iter().filter(|q| {
        matches_query(&ctx.legal_query, &[&q.from_name, &q.question, &q.answer])
    });

    let cards: Vec<QuestionCard> = newest_first(matching, |q: &LegalQuestion| q.created_at)
        .into_iter()
        .map(|q| QuestionCard {
            id: q.id.clone(),
            from_name: q.from_name.clone(),
            created_at: q.created_at,
            question: q.question.clone(),
            answer: q.is_answered().then(|| q.answer.clone()),
            actions: actions.clone(),
        })
        .collect();

    let empty_text = cards.is_empty().then_some(NO_QUESTIONS_TEXT);
    LegalView { cards, empty_text }
}
