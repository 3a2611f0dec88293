//! SMTP delivery using lettre

use async_trait::async_trait;
use folio_contact::{DeliveryError, DeliveryReceipt, EmailDelivery, OutgoingEmail};
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
};

use crate::EmailConfig;

/// Submission ports speak plain SMTP and upgrade with STARTTLS; only this one wraps TLS.
const IMPLICIT_TLS_PORT: u16 = 465;

#[derive(Clone)]
pub struct SmtpDelivery {
    mailer: SmtpTransport,
}

impl SmtpDelivery {
    pub fn new(config: &EmailConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(config.timeout()))
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP delivery initialized with authentication and TLS"
            );

            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());

            let builder = if config.smtp_port == IMPLICIT_TLS_PORT {
                SmtpTransport::relay(&config.smtp_host)?
            } else {
                SmtpTransport::starttls_relay(&config.smtp_host)?
            };

            builder
                .port(config.smtp_port)
                .credentials(creds)
                .timeout(Some(config.timeout()))
                .build()
        };

        Ok(Self { mailer })
    }
}

#[async_trait]
impl EmailDelivery for SmtpDelivery {
    fn name(&self) -> &'static str {
        "smtp"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DeliveryError> {
        let message_id = new_message_id(&email.from);
        let message = build_message(email, &message_id)?;
        let mailer = self.mailer.clone();

        tracing::info!(to = %email.to, subject = %email.subject, "Sending email over SMTP");

        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(DeliveryReceipt::with_id(message_id))
    }
}

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.parse().map_err(|e: lettre::address::AddressError| {
        DeliveryError::Address {
            address: address.to_owned(),
            reason: e.to_string(),
        }
    })
}

fn new_message_id(from: &str) -> String {
    let domain = mailbox(from)
        .map(|m| m.email.domain().to_owned())
        .unwrap_or_else(|_| "localhost".to_owned());

    format!("<{}@{}>", uuid::Uuid::new_v4(), domain)
}

pub(crate) fn build_message(
    email: &OutgoingEmail,
    message_id: &str,
) -> Result<Message, DeliveryError> {
    let mut builder = Message::builder()
        .from(mailbox(&email.from)?)
        .to(mailbox(&email.to)?)
        .subject(&email.subject)
        .message_id(Some(message_id.to_owned()));

    if let Some(reply_to) = &email.reply_to {
        builder = builder.reply_to(mailbox(reply_to)?);
    }

    builder
        .multipart(MultiPart::alternative_plain_html(
            email.text.clone(),
            email.html.clone(),
        ))
        .map_err(|e| DeliveryError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Duration;

    use super::*;

    fn email() -> OutgoingEmail {
        OutgoingEmail {
            from: "Portfolio <portfolio@folio.localhost>".to_string(),
            to: "contact@folio.localhost".to_string(),
            reply_to: Some("jane@example.com".to_string()),
            subject: "Portfolio Contact: Hello".to_string(),
            html: "<p>Hi<br>there</p>".to_string(),
            text: "Hi\nthere".to_string(),
        }
    }

    #[test]
    fn test_message_carries_reply_to_and_subject() {
        let message = build_message(&email(), "<id-1@folio.localhost>").unwrap();
        let formatted = String::from_utf8(message.formatted()).unwrap();

        assert!(formatted.contains("Reply-To: jane@example.com"));
        assert!(formatted.contains("Subject: Portfolio Contact: Hello"));
        assert!(formatted.contains("To: contact@folio.localhost"));
        assert!(formatted.contains("<id-1@folio.localhost>"));
    }

    #[test]
    fn test_invalid_recipient_is_an_address_error() {
        let mut bad = email();
        bad.to = "not an address".to_string();

        assert!(matches!(
            build_message(&bad, "<id@x>"),
            Err(DeliveryError::Address { .. })
        ));
    }

    #[test]
    fn test_message_id_uses_sender_domain() {
        let id = new_message_id("Portfolio <portfolio@folio.localhost>");
        assert!(id.starts_with('<'));
        assert!(id.ends_with("@folio.localhost>"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_transport_error() {
        let config = EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: 1,
            timeout_secs: 2,
            ..EmailConfig::default()
        };
        let delivery = SmtpDelivery::new(&config).unwrap();

        assert!(matches!(
            delivery.send(&email()).await,
            Err(DeliveryError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_authenticated_submission_port_waits_for_greeting() -> anyhow::Result<()> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let port = listener.local_addr()?.port();

        let server = std::thread::spawn(move || -> std::io::Result<Vec<u8>> {
            let (mut stream, _) = listener.accept()?;
            stream.set_read_timeout(Some(Duration::from_secs(2)))?;
            stream.write_all(b"220 folio.localhost ESMTP\r\n")?;

            let mut first = [0u8; 16];
            let read = stream.read(&mut first)?;
            Ok(first[..read].to_vec())
        });

        let config = EmailConfig {
            smtp_host: "127.0.0.1".to_string(),
            smtp_port: port,
            smtp_username: "mailer".to_string(),
            smtp_password: "secret".to_string(),
            timeout_secs: 2,
            ..EmailConfig::default()
        };
        let delivery = SmtpDelivery::new(&config)?;

        // the server hangs up after the first command, so the send itself fails
        assert!(delivery.send(&email()).await.is_err());

        let first = server.join().expect("server thread panicked")?;
        assert_ne!(first.first(), Some(&0x16), "client opened with a TLS handshake");
        assert!(first.starts_with(b"EHLO"), "got {:?}", String::from_utf8_lossy(&first));

        Ok(())
    }
}
