//! SMTP [`Mailer`] implementation.

use common::operations::Deliver;
use derive_more::{Debug, Display, Error as StdError, From};
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport as _, Message, Tokio1Executor,
};
use tracerr::Traced;
use tracing as log;

use crate::infra::{mail, Mailer};

use super::Mail;

/// Configuration of an [`Smtp`] [`Mailer`].
#[derive(Clone, Debug)]
pub struct Config {
    /// Host of the SMTP relay, connected via STARTTLS.
    pub relay: String,

    /// Port of the SMTP relay.
    pub port: u16,

    /// Credentials to authenticate on the SMTP relay with, if required.
    #[debug(skip)]
    pub credentials: Option<(String, String)>,

    /// Address mails are sent from.
    pub from: String,
}

/// [`Mailer`] delivering [`Mail`]s via an SMTP relay.
#[derive(Clone, Debug)]
pub struct Smtp {
    /// Underlying SMTP transport.
    #[debug(skip)]
    transport: AsyncSmtpTransport<Tokio1Executor>,

    /// [`Mailbox`] mails are sent from.
    from: Mailbox,
}

impl Smtp {
    /// Creates a new [`Smtp`] [`Mailer`] with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the [`Config`] describes an invalid relay or sender address.
    pub fn new(conf: Config) -> Result<Self, Traced<mail::Error>> {
        let from = conf
            .from
            .parse::<Mailbox>()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&conf.relay)
                .map_err(tracerr::from_and_wrap!(=> Error))
                .map_err(tracerr::map_from)?
                .port(conf.port);
        if let Some((user, password)) = conf.credentials {
            builder = builder.credentials(Credentials::new(user, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

impl Mailer<Deliver<Mail>> for Smtp {
    type Ok = ();
    type Err = Traced<mail::Error>;

    async fn execute(
        &self,
        Deliver(mail): Deliver<Mail>,
    ) -> Result<Self::Ok, Self::Err> {
        let Mail { to, subject, body } = mail;

        let to_mailbox = AsRef::<str>::as_ref(&to)
            .parse::<Mailbox>()
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        _ = self
            .transport
            .send(message)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
            .map_err(tracerr::map_from)?;

        log::debug!(%to, "mail delivered");
        Ok(())
    }
}

/// [`Smtp`] delivery error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Invalid sender or recipient address.
    #[display("Invalid mail address: {_0}")]
    Address(lettre::address::AddressError),

    /// Failed to build a message.
    #[display("Failed to build a mail message: {_0}")]
    Message(lettre::error::Error),

    /// SMTP transport error.
    #[display("SMTP transport error: {_0}")]
    Transport(lettre::transport::smtp::Error),
}
