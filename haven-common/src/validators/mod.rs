//! Input validation functions
//!
//! Validators for every free-text field a form can submit. Callers trim input
//! before validating; the validators never trim themselves.

mod answer;
mod description;
mod message;
mod name;
mod title;
mod url;

pub use answer::{AnswerError, MAX_ANSWER_LENGTH, validate_answer};
pub use description::{DescriptionError, MAX_DESCRIPTION_LENGTH, validate_description};
pub use message::{MAX_MESSAGE_LENGTH, MessageError, validate_message};
pub use name::{MAX_NAME_LENGTH, NameError, validate_name};
pub use title::{MAX_TITLE_LENGTH, TitleError, validate_title};
pub use url::{MAX_URL_LENGTH, UrlError, validate_url};

/// Whether `ch` is a control character other than newline, carriage return, or tab
pub(crate) fn is_forbidden_control(ch: char) -> bool {
    ch.is_control() && ch != '\n' && ch != '\r' && ch != '\t'
}
