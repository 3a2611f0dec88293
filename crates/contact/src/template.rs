use askama::Template;

use crate::Submission;

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

#[derive(Template)]
#[template(path = "contact-notification.html")]
pub struct NotificationHtmlTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message_lines: Vec<&'a str>,
}

#[derive(Template)]
#[template(path = "contact-notification.txt")]
pub struct NotificationPlainTemplate<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Subject line and both bodies of the operator notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html: String,
    pub text: String,
}

impl Notification {
    pub fn render(submission: &Submission) -> Result<Self, askama::Error> {
        let html = NotificationHtmlTemplate {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message_lines: submission
                .message
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect(),
        }
        .render()?;

        let text = NotificationPlainTemplate {
            name: &submission.name,
            email: &submission.email,
            subject: &submission.subject,
            message: &submission.message,
        }
        .render()?;

        Ok(Self {
            subject: format!("{SUBJECT_PREFIX}{}", submission.subject),
            html,
            text,
        })
    }
}
