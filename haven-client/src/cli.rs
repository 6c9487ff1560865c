//! Command-line front end
//!
//! Each invocation behaves like a tab that performs one action: the command is
//! translated into the same [`Message`]s a GUI would send, fed through
//! [`HavenApp::update`], and the resulting notice and view are printed.

use crate::app::HavenApp;
use crate::args::Command;
use crate::types::{DismissReason, Message, Modal, Notice, View};
use crate::views::{Screen, text};

/// What an invocation printed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Option<Notice>,
    /// Text of the view shown afterwards (empty when the command failed)
    pub output: String,
}

impl Outcome {
    /// Whether the command ended with an error notice
    pub fn failed(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}

/// Messages for one command, plus the view to show afterwards
struct Plan {
    messages: Vec<Message>,
    show: View,
    /// Set for destructive commands run without `--yes`
    unconfirmed: bool,
}

impl Plan {
    fn new(show: View, messages: Vec<Message>) -> Self {
        Self {
            messages,
            show,
            unconfirmed: false,
        }
    }

    /// Open a confirmation modal and either accept or cancel it
    fn confirmed(show: View, open: Message, yes: bool) -> Self {
        let close = if yes {
            Message::SubmitModal
        } else {
            Message::DismissModal(DismissReason::Cancel)
        };
        Self {
            messages: vec![open],
            show,
            unconfirmed: !yes,
        }
        .then(close)
    }

    fn then(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }
}

fn plan(command: Command) -> Plan {
    match command {
        Command::Dashboard => Plan::new(View::Dashboard, vec![]),
        Command::Resources { search } => Plan::new(
            View::Resources,
            vec![Message::ResourceSearchChanged(search.unwrap_or_default())],
        ),
        Command::Requests { search, status } => Plan::new(
            View::Requests,
            vec![
                Message::RequestSearchChanged(search.unwrap_or_default()),
                Message::RequestStatusFilterChanged(status),
            ],
        ),
        Command::Legal { search } => Plan::new(
            View::Legal,
            vec![Message::LegalSearchChanged(search.unwrap_or_default())],
        ),
        Command::Users => Plan::new(View::Users, vec![]),
        Command::Role { role } => Plan::new(View::Dashboard, vec![Message::RoleSelected(role)]),
        Command::Gender { gender } => {
            Plan::new(View::Dashboard, vec![Message::GenderSelected(gender)])
        }
        Command::Request { name, message } => Plan::new(
            View::Requests,
            vec![
                Message::OpenNewRequest,
                Message::FormNameChanged(name),
                Message::FormMessageChanged(message),
                Message::SubmitModal,
            ],
        ),
        Command::Status { id, status } => Plan::new(
            View::Requests,
            vec![Message::SetRequestStatus { id, status }],
        ),
        Command::Ask { name, question } => Plan::new(
            View::Legal,
            vec![
                Message::OpenNewQuestion,
                Message::FormNameChanged(name),
                Message::FormQuestionChanged(question),
                Message::SubmitModal,
            ],
        ),
        Command::Answer { id, text } => Plan::new(
            View::Legal,
            vec![
                Message::OpenAnswerQuestion(id),
                Message::FormAnswerChanged(text),
                Message::SubmitModal,
            ],
        ),
        Command::AddResource {
            kind,
            title,
            gender,
            description,
            url,
            contact,
        } => Plan::new(
            View::Resources,
            vec![
                Message::OpenAddResource,
                Message::FormKindChanged(kind),
                Message::FormTitleChanged(title),
                Message::FormGenderChanged(gender),
                Message::FormDescriptionChanged(description),
                Message::FormUrlChanged(url),
                Message::FormContactChanged(contact),
                Message::SubmitModal,
            ],
        ),
        Command::EditResource {
            id,
            title,
            gender,
            description,
            url,
        } => {
            // The form opens prefilled; only the given fields are changed
            let mut messages = vec![Message::OpenEditResource(id)];
            messages.extend(title.map(Message::FormTitleChanged));
            messages.extend(gender.map(Message::FormGenderChanged));
            messages.extend(description.map(Message::FormDescriptionChanged));
            messages.extend(url.map(Message::FormUrlChanged));
            messages.push(Message::SubmitModal);
            Plan::new(View::Resources, messages)
        }
        Command::DeleteResource { id, yes } => {
            Plan::confirmed(View::Resources, Message::OpenDeleteResource(id), yes)
        }
        Command::Reset { yes } => Plan::confirmed(View::Dashboard, Message::OpenReset, yes),
        Command::Clear { yes } => Plan::confirmed(View::Dashboard, Message::OpenClear, yes),
    }
}

/// Run one command against the app
pub fn run(app: &mut HavenApp, command: Command) -> Outcome {
    let plan = plan(command);
    let mut prompt = None;
    app.update(Message::DismissNotice);

    for message in plan.messages {
        // A submit with no open modal means opening it was refused
        if message == Message::SubmitModal && app.modal().is_none() {
            break;
        }
        if let (true, Some(Modal::Confirm(confirm))) = (plan.unconfirmed, app.modal()) {
            prompt = Some(confirm.prompt());
        }
        app.update(message);
    }

    if let Some(prompt) = prompt {
        return Outcome {
            notice: Some(Notice::error(format!(
                "{} Re-run with --yes to confirm.",
                prompt
            ))),
            output: String::new(),
        };
    }

    if !app.notice().is_some_and(Notice::is_error) {
        app.update(Message::Navigate(plan.show));
    }

    let notice = app.notice().cloned();
    let output = if notice.as_ref().is_some_and(Notice::is_error) {
        String::new()
    } else {
        render(&app.view(), app.active_view())
    };
    Outcome { notice, output }
}

/// Text for one view of the screen, under a heading
pub fn render(screen: &Screen, view: View) -> String {
    let body = match view {
        View::Dashboard => text::dashboard(&screen.dashboard),
        View::Resources => text::resources(&screen.resources),
        View::Requests => text::requests(&screen.requests),
        View::Legal => text::legal(&screen.legal),
        View::Users => text::users(&screen.users),
    };
    format!("== {} ==\n{}", view, body)
}
