//! [`Mailer`]-related implementations.

#[cfg(test)]
pub(crate) mod mock;
#[cfg(feature = "smtp")]
pub mod smtp;

use common::operations::Deliver;
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

use crate::domain::guest;

#[cfg(feature = "smtp")]
pub use self::smtp::Smtp;

/// Mail delivery operation.
pub use common::Handler as Mailer;

/// Plain-text mail to be delivered to a guest.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mail {
    /// Recipient of this [`Mail`].
    pub to: guest::Email,

    /// Subject line of this [`Mail`].
    pub subject: String,

    /// Plain-text body of this [`Mail`].
    pub body: String,
}

/// [`Mailer`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "smtp")]
    /// [`Smtp`] error.
    Smtp(smtp::Error),

    #[cfg(test)]
    /// Failure injected by the recording [`Mailer`].
    #[display("injected failure")]
    #[from(ignore)]
    Mock,
}

/// [`Mailer`] writing [`Mail`]s to the log instead of sending them.
///
/// Used whenever no SMTP relay is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct Log;

impl Mailer<Deliver<Mail>> for Log {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Deliver(mail): Deliver<Mail>,
    ) -> Result<Self::Ok, Self::Err> {
        log::info!(
            to = %mail.to,
            subject = %mail.subject,
            "mail delivery is not configured, skipping:\n{}",
            mail.body,
        );
        Ok(())
    }
}

/// [`Mailer`] chosen at startup.
#[derive(Clone, Debug)]
pub enum Transport {
    /// Delivers via [`Smtp`].
    #[cfg(feature = "smtp")]
    Smtp(Smtp),

    /// Writes to the [`Log`].
    Log(Log),
}

impl Mailer<Deliver<Mail>> for Transport {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        deliver: Deliver<Mail>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            #[cfg(feature = "smtp")]
            Self::Smtp(smtp) => smtp.execute(deliver).await,
            Self::Log(log) => log.execute(deliver).await,
        }
        .map_err(tracerr::wrap!())
    }
}
