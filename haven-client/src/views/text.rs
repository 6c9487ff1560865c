//! Plain-text rendering of the view models for the terminal

use std::fmt::Write;

use chrono::{DateTime, Utc};

use super::constants::NO_ANSWER_TEXT;
use super::{
    CardAction, DashboardView, LegalView, RequestsView, ResourceCard, ResourcesView, UsersView,
};

/// Timestamp format for request and question cards
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn actions_line(out: &mut String, actions: &[CardAction]) {
    if actions.is_empty() {
        return;
    }
    let labels: Vec<String> = actions.iter().map(|a| format!("[{}]", a.label())).collect();
    let _ = writeln!(out, "    {}", labels.join(" "));
}

fn resource_card(out: &mut String, card: &ResourceCard, show_tags: bool) {
    let _ = writeln!(out, "  {}", card.title);
    if show_tags {
        let _ = writeln!(
            out,
            "    id: {}  kind: {}  gender: {}",
            card.id,
            card.kind.label(),
            card.gender.as_str()
        );
    }
    if !card.description.is_empty() {
        let _ = writeln!(out, "    {}", card.description);
    }
    if let Some(contact) = &card.contact {
        let _ = writeln!(out, "    contact: {}", contact);
    }
    if let Some(url) = &card.url {
        let _ = writeln!(out, "    link: {}", url);
    }
    actions_line(out, &card.actions);
}

pub fn dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.guidance.headline);
    for item in &view.guidance.items {
        if item.description.is_empty() {
            let _ = writeln!(out, "  - {}", item.title);
        } else {
            let _ = writeln!(out, "  - {} — {}", item.title, item.description);
        }
    }

    let _ = writeln!(out, "\nLatest resources");
    for card in &view.latest {
        resource_card(&mut out, card, false);
    }

    let _ = writeln!(out, "\nResources: {}", view.stats.resources);
    let _ = writeln!(out, "Help Requests: {}", view.stats.help_requests);
    let _ = writeln!(out, "Legal Questions: {}", view.stats.legal_questions);
    out
}

pub fn resources(view: &ResourcesView) -> String {
    let mut out = String::new();
    for card in &view.cards {
        resource_card(&mut out, card, true);
    }
    out
}

pub fn requests(view: &RequestsView) -> String {
    let mut out = String::new();
    if let Some(empty) = view.empty_text {
        let _ = writeln!(out, "{}", empty);
    }
    for card in &view.cards {
        let _ = writeln!(out, "  {} [{}]", card.from_name, card.status);
        let _ = writeln!(out, "    id: {}  {}", card.id, timestamp(&card.created_at));
        let _ = writeln!(out, "    {}", card.message);
        actions_line(&mut out, &card.actions);
    }
    out
}

pub fn legal(view: &LegalView) -> String {
    let mut out = String::new();
    if let Some(empty) = view.empty_text {
        let _ = writeln!(out, "{}", empty);
    }
    for card in &view.cards {
        let _ = writeln!(out, "  {}", card.from_name);
        let _ = writeln!(out, "    id: {}  {}", card.id, timestamp(&card.created_at));
        let _ = writeln!(out, "    {}", card.question);
        match &card.answer {
            Some(answer) => {
                let _ = writeln!(out, "    Answer: {}", answer);
            }
            None => {
                let _ = writeln!(out, "    {}", NO_ANSWER_TEXT);
            }
        }
        actions_line(&mut out, &card.actions);
    }
    out
}

pub fn users(view: &UsersView) -> String {
    let mut out = String::new();
    for row in &view.rows {
        let _ = writeln!(out, "  {} ({})", row.name, row.role);
    }
    out
}
