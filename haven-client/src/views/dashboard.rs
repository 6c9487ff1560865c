//! Dashboard: gender guidance, latest resources, and totals

use haven_common::filter::is_visible;
use haven_common::{Document, Gender, Resource, ResourceKind};

use super::ViewContext;
use super::constants::{GUIDANCE_HEADLINE_ALL, GUIDANCE_HEADLINE_TAILORED};
use super::resources::ResourceCard;
use crate::constants::{GUIDANCE_LIMIT, LATEST_RESOURCES_LIMIT};

/// A guidance bullet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidanceItem {
    pub title: String,
    pub description: String,
}

/// Headline plus a short list of guidance items for the selected gender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guidance {
    pub headline: String,
    pub items: Vec<GuidanceItem>,
}

/// Unfiltered totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub resources: usize,
    pub help_requests: usize,
    pub legal_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub guidance: Guidance,
    pub latest: Vec<ResourceCard>,
    pub stats: Stats,
}

pub fn render(doc: &Document, ctx: &ViewContext) -> DashboardView {
    DashboardView {
        guidance: guidance(doc, ctx.gender),
        latest: latest(doc, ctx.gender),
        stats: stats(doc),
    }
}

/// Health-risk guides first, then legal resources
///
/// Under the All filter, resources written for everyone lead.
fn guidance(doc: &Document, gender: Gender) -> Guidance {
    let headline = match gender {
        Gender::All => GUIDANCE_HEADLINE_ALL.to_string(),
        g => format!("{} {}.", GUIDANCE_HEADLINE_TAILORED, g.label()),
    };

    let mut candidates: Vec<&Resource> = doc
        .content
        .health_risks
        .iter()
        .chain(&doc.content.legal_resources)
        .filter(|r| is_visible(r.gender, gender))
        .collect();
    if gender == Gender::All {
        // Stable: relative order within each group is kept
        candidates.sort_by_key(|r| r.gender != Gender::All);
    }

    let items = candidates
        .into_iter()
        .take(GUIDANCE_LIMIT)
        .map(|r| GuidanceItem {
            title: r.title.clone(),
            description: r.description.clone(),
        })
        .collect();

    Guidance { headline, items }
}

/// Support services first, then legal, then health-risk
fn latest(doc: &Document, gender: Gender) -> Vec<ResourceCard> {
    [
        ResourceKind::SupportService,
        ResourceKind::Legal,
        ResourceKind::HealthRisk,
    ]
    .into_iter()
    .flat_map(|kind| doc.content.list(kind).iter().map(move |r| (kind, r)))
    .filter(|(_, r)| is_visible(r.gender, gender))
    .take(LATEST_RESOURCES_LIMIT)
    .map(|(kind, r)| ResourceCard::new(kind, r, Vec::new()))
    .collect()
}

fn stats(doc: &Document) -> Stats {
    Stats {
        resources: doc.content.total(),
        help_requests: doc.help_requests.len(),
        legal_questions: doc.legal_questions.len(),
    }
}
