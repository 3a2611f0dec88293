use anyhow::Result;
use folio_client::{ContactForm, Field, FormStatus, HttpSubmitter};

pub struct SubmitArgs {
    pub endpoint: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Send one message through the contact form, as a visitor would.
pub async fn submit(args: SubmitArgs) -> Result<()> {
    let submitter = HttpSubmitter::new(args.endpoint)?;
    let mut form = ContactForm::new();

    form.set_field(Field::Name, args.name);
    form.set_field(Field::Email, args.email);
    form.set_field(Field::Subject, args.subject);
    form.set_field(Field::Message, message_text(&args.message));

    tracing::info!(endpoint = submitter.endpoint(), "Submitting contact form");

    match form.submit(&submitter).await? {
        FormStatus::Success(message) => {
            println!("{message}");
            Ok(())
        }
        FormStatus::Error(message) => anyhow::bail!("{message}"),
        status => anyhow::bail!("unexpected form status {status:?}"),
    }
}

/// Shells pass `\n` through literally; turn it into a line break.
fn message_text(raw: &str) -> String {
    raw.replace("\\n", "\n")
}
