//! Help requests view

use chrono::{DateTime, Utc};

use haven_common::filter::{matches_query, newest_first};
use haven_common::{Document, HelpRequest, RequestStatus};

use super::constants::NO_REQUESTS_TEXT;
use super::{CardAction, ViewContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCard {
    pub id: String,
    pub from_name: String,
    pub created_at: DateTime<Utc>,
    pub message: String,
    pub status: RequestStatus,
    pub actions: Vec<CardAction>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestsView {
    pub cards: Vec<RequestCard>,
    /// Set when no request matches
    pub empty_text: Option<&'static str>,
}

/// Build the requests view
///
/// Requests matching the search and the status filter, newest first. Status
/// actions are only offered to roles that may use them.
pub fn render(doc: &Document, ctx: &ViewContext) -> RequestsView {
    let actions = if ctx.role.can_update_request_status() {
        vec![CardAction::MarkInProgress, CardAction::Resolve]
    } else {
        Vec::new()
    };

    let matching = doc
        .help_requests
        .iter()
        .filter(|r| matches_query(&ctx.request_query, &[&r.from_name, &r.message]))
        .filter(|r| ctx.request_status.is_none_or(|status| r.status == status));

    let cards: Vec<RequestCard> = newest_first(matching, |r: &HelpRequest| r.created_at)
        .into_iter()
        .map(|r| RequestCard {
            id: r.id.clone(),
            from_name: r.from_name.clone(),
            created_at: r.created_at,
            message: r.message.clone(),
            status: r.status,
            actions: actions.clone(),
        })
        .collect();

    let empty_text = cards.is_empty().then_some(NO_REQUESTS_TEXT);
    RequestsView { cards, empty_text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use haven_common::Role;
    use haven_common::seed::default_document;

    fn request(id: &str, name: &str, message: &str, minute: u32, status: RequestStatus) -> HelpRequest {
        HelpRequest {
            id: id.to_string(),
            from_name: name.to_string(),
            message: message.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).unwrap(),
            status,
            notes: Vec::new(),
        }
    }

    fn doc() -> Document {
        let mut doc = default_document();
        doc.help_requests = vec![
            request("req-a", "Jane", "need shelter tonight", 0, RequestStatus::New),
            request("req-b", "Alex", "court date help", 10, RequestStatus::InProgress),
            request("req-c", "Sam", "safe housing", 5, RequestStatus::Resolved),
        ];
        doc
    }

    fn ids(view: &RequestsView) -> Vec<&str> {
        view.cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_newest_first() {
        let view = render(&doc(), &ViewContext::default());
        assert_eq!(ids(&view), vec!["req-b", "req-c", "req-a"]);
        assert_eq!(view.empty_text, None);
    }

    #[test]
    fn test_search_name_and_message() {
        let ctx = ViewContext {
            request_query: "jane".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&render(&doc(), &ctx)), vec!["req-a"]);

        let ctx = ViewContext {
            request_query: "SHELTER".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&render(&doc(), &ctx)), vec!["req-a"]);
    }

    #[test]
    fn test_status_filter() {
        let ctx = ViewContext {
            request_status: Some(RequestStatus::Resolved),
            ..Default::default()
        };
        assert_eq!(ids(&render(&doc(), &ctx)), vec!["req-c"]);
    }

    #[test]
    fn test_empty_text() {
        let view = render(&default_document(), &ViewContext::default());
        assert!(view.cards.is_empty());
        assert_eq!(view.empty_text, Some("No requests found."));

        let ctx = ViewContext {
            request_query: "nothing matches this".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&doc(), &ctx).empty_text, Some("No requests found."));
    }

    #[test]
    fn test_actions_by_role() {
        for role in Role::ALL {
            let ctx = ViewContext {
                role,
                ..Default::default()
            };
            let view = render(&doc(), &ctx);
            let expected = matches!(role, Role::Admin | Role::Counsellor);
            assert_eq!(!view.cards[0].actions.is_empty(), expected, "{role}");
        }
    }
}
