//! Resources view: every resource visible under the gender filter

use haven_common::filter::{is_visible, matches_query};
use haven_common::{Document, Gender, Resource, ResourceKind};

use super::{CardAction, ViewContext};

/// One resource as shown in a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCard {
    pub id: String,
    pub kind: ResourceKind,
    pub gender: Gender,
    pub title: String,
    pub description: String,
    pub url: Option<String>,
    pub contact: Option<String>,
    pub actions: Vec<CardAction>,
}

impl ResourceCard {
    pub(crate) fn new(kind: ResourceKind, resource: &Resource, actions: Vec<CardAction>) -> Self {
        Self {
            id: resource.id.clone(),
            kind,
            gender: resource.gender,
            title: resource.title.clone(),
            description: resource.description.clone(),
            url: resource.url.clone(),
            contact: resource.contact.clone(),
            actions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcesView {
    pub cards: Vec<ResourceCard>,
}

/// Build the resources view
///
/// Order is legal, then health-risk, then support services. Edit and Delete
/// are offered on every card; the role check happens when they are used.
pub fn render(doc: &Document, ctx: &ViewContext) -> ResourcesView {
    let cards = doc
        .content
        .iter()
        .filter(|(_, r)| is_visible(r.gender, ctx.gender))
        .filter(|(_, r)| matches_query(&ctx.resource_query, &[&r.title, &r.description]))
        .map(|(kind, r)| ResourceCard::new(kind, r, vec![CardAction::Edit, CardAction::Delete]))
        .collect();

    ResourcesView { cards }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_common::Role;
    use haven_common::seed::default_document;

    fn ids(view: &ResourcesView) -> Vec<&str> {
        view.cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_all_shows_everything_in_list_order() {
        let view = render(&default_document(), &ViewContext::default());
        assert_eq!(
            ids(&view),
            vec!["lr-1", "lr-2", "lr-3", "hr-1", "hr-2", "hr-3", "ss-1"]
        );
    }

    #[test]
    fn test_gender_filter_keeps_general_resources() {
        let ctx = ViewContext {
            gender: Gender::Male,
            ..Default::default()
        };
        let view = render(&default_document(), &ctx);
        assert_eq!(ids(&view), vec!["lr-2", "hr-2", "ss-1"]);
        assert_eq!(view.cards[2].kind, ResourceKind::SupportService);
    }

    #[test]
    fn test_search_title_and_description() {
        let ctx = ViewContext {
            resource_query: "  CONFIDENTIAL ".to_string(),
            ..Default::default()
        };
        let view = render(&default_document(), &ctx);
        assert_eq!(ids(&view), vec!["lr-2", "hr-2", "ss-1"]);
    }

    #[test]
    fn test_search_and_gender_combine() {
        let ctx = ViewContext {
            gender: Gender::Female,
            resource_query: "hotline".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&render(&default_document(), &ctx)), vec!["ss-1"]);
    }

    #[test]
    fn test_actions_shown_for_every_role() {
        for role in Role::ALL {
            let ctx = ViewContext {
                role,
                ..Default::default()
            };
            let view = render(&default_document(), &ctx);
            assert!(
                view.cards
                    .iter()
                    .all(|c| c.actions == vec![CardAction::Edit, CardAction::Delete])
            );
        }
    }

    #[test]
    fn test_card_carries_link_and_contact() {
        let view = render(&default_document(), &ViewContext::default());
        let hotline = view.cards.iter().find(|c| c.id == "ss-1").expect("ss-1");
        assert_eq!(hotline.url.as_deref(), Some("tel:18007997233"));
        assert_eq!(hotline.contact.as_deref(), Some("1-800-799-7233"));
        assert_eq!(hotline.gender, Gender::All);
    }
}
