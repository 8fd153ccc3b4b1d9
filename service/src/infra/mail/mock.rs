//! Recording [`Mailer`] used in tests.

use std::sync::{Arc, Mutex, PoisonError};

use common::operations::Deliver;
use tracerr::Traced;

use super::{Error, Mail, Mailer};

/// [`Mailer`] remembering all the delivered [`Mail`]s.
#[derive(Clone, Debug, Default)]
pub(crate) struct Recorder {
    /// Delivered [`Mail`]s.
    sent: Arc<Mutex<Vec<Mail>>>,

    /// Indicator whether every delivery fails.
    failing: bool,
}

impl Recorder {
    /// Creates a new [`Recorder`] failing every delivery.
    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Returns all the [`Mail`]s delivered so far.
    pub(crate) fn sent(&self) -> Vec<Mail> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Mailer<Deliver<Mail>> for Recorder {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Deliver(mail): Deliver<Mail>,
    ) -> Result<Self::Ok, Self::Err> {
        if self.failing {
            return Err(tracerr::new!(Error::Mock));
        }
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(mail);
        Ok(())
    }
}
