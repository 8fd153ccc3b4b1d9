//! [`Command`] for confirming a pending [`Booking`].

use common::operations::{
    By, Commit, Deliver, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking, Booking},
    infra::{
        database,
        mail::{self, Mail},
        Database, Mailer,
    },
    Service,
};

use super::Command;

/// [`Command`] for confirming a [`booking::Status::Pending`] [`Booking`].
///
/// Confirmation [`Mail`] is sent to the [`Guest`] once the new status is
/// persisted.
///
/// [`Guest`]: crate::domain::Guest
#[derive(Clone, Copy, Debug)]
pub struct ConfirmBooking {
    /// ID of the [`Booking`] to confirm.
    pub booking_id: booking::Id,
}

impl<Db, M> Command<ConfirmBooking> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Booking, booking::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<Update<Booking>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
    M: Mailer<Deliver<Mail>, Ok = (), Err = Traced<mail::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: ConfirmBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let ConfirmBooking { booking_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Lock(By::<Booking, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut booking = tx
            .execute(Select(By::<Option<Booking>, _>::new(booking_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::BookingNotExists(booking_id))
            .map_err(tracerr::wrap!())?;
        if booking.status != booking::Status::Pending {
            return Err(tracerr::new!(E::BookingNotPending(booking_id)));
        }

        booking.status = booking::Status::Confirmed;
        tx.execute(Update(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.mailer()
            .execute(Deliver(confirmation(&booking)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(booking)
    }
}

/// Composes a [`Mail`] confirming the provided [`Booking`].
pub(crate) fn confirmation(booking: &Booking) -> Mail {
    Mail {
        to: booking.guest.email.clone(),
        subject: format!("Your booking {} is confirmed", booking.id),
        body: format!(
            "Dear {},\n\n\
             your booking {} is confirmed.\n\n\
             Check-in: {}\n\
             Check-out: {}\n\
             Guests: {}\n\
             Price: {}\n",
            booking.guest.name,
            booking.id,
            booking.check_in.to_rfc3339(),
            booking.check_out().to_rfc3339(),
            booking.guests(),
            booking.price,
        ),
    }
}

/// Error of [`ConfirmBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Mailer`] error.
    ///
    /// The [`Booking`] stays confirmed.
    #[display("`Mailer` operation failed: {_0}")]
    Mail(mail::Error),

    /// [`Booking`] doesn't exist.
    #[display("`Booking(id: {_0})` does not exist")]
    #[from(ignore)]
    BookingNotExists(#[error(not(source))] booking::Id),

    /// [`Booking`] isn't pending.
    #[display("`Booking(id: {_0})` is not pending")]
    #[from(ignore)]
    BookingNotPending(#[error(not(source))] booking::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{booking, vacation, Booking},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{confirmation, Command as _, ConfirmBooking, ExecutionError};

    fn prepare() -> (Mock, Booking) {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(250), 2);
        let booking = fixture::booking(&package);
        let db = Mock::with(State {
            bookings: [(booking.id, booking.clone())].into(),
            ..State::default()
        });
        (db, booking)
    }

    #[tokio::test]
    async fn confirms_and_notifies_guest() {
        let (db, booking) = prepare();
        let mailer = Recorder::default();
        let svc = mock::service(&db, &mailer);

        let confirmed = svc
            .execute(ConfirmBooking {
                booking_id: booking.id,
            })
            .await
            .unwrap();

        assert_eq!(confirmed.status, booking::Status::Confirmed);
        assert_eq!(
            db.state().bookings[&booking.id].status,
            booking::Status::Confirmed,
        );
        assert_eq!(mailer.sent(), vec![confirmation(&confirmed)]);
    }

    #[tokio::test]
    async fn refuses_confirming_twice() {
        let (db, booking) = prepare();
        let mailer = Recorder::default();
        let svc = mock::service(&db, &mailer);

        let cmd = ConfirmBooking {
            booking_id: booking.id,
        };
        let _ = svc.execute(cmd).await.unwrap();
        let err = svc.execute(cmd).await.unwrap_err().into_inner();

        assert!(
            matches!(err, ExecutionError::BookingNotPending(_)),
            "unexpected error: {err}",
        );
        assert_eq!(mailer.sent().len(), 1);
    }

    #[test]
    fn mail_mentions_stay() {
        let (_, booking) = prepare();

        let mail = confirmation(&booking);

        assert_eq!(mail.to, booking.guest.email);
        assert!(mail.body.contains("Dear Jane Doe"));
        assert!(mail.body.contains(&booking.check_in.to_rfc3339()));
        assert!(mail.body.contains(&booking.price.to_string()));
    }
}
