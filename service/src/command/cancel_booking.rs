//! [`Command`] for cancelling a [`Booking`].

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking, order, Booking},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling a [`Booking`] not being part of an [`Order`].
///
/// [`Booking`]s of an [`Order`] are cancelled along with it.
///
/// [`Order`]: crate::domain::Order
#[derive(Clone, Copy, Debug)]
pub struct CancelBooking {
    /// ID of the [`Booking`] to cancel.
    pub booking_id: booking::Id,
}

impl<Db, M> Command<CancelBooking> for Service<Db, M>
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
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CancelBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelBooking { booking_id } = cmd;

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
        if booking.status == booking::Status::Cancelled {
            return Err(tracerr::new!(E::BookingAlreadyCancelled(booking_id)));
        }
        if let Some(order_id) = booking.order_id {
            return Err(tracerr::new!(E::BookingInOrder(booking_id, order_id)));
        }

        booking.status = booking::Status::Cancelled;
        tx.execute(Update(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(booking)
    }
}

/// Error of [`CancelBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Booking`] doesn't exist.
    #[display("`Booking(id: {_0})` does not exist")]
    #[from(ignore)]
    BookingNotExists(#[error(not(source))] booking::Id),

    /// [`Booking`] is cancelled already.
    #[display("`Booking(id: {_0})` is cancelled already")]
    #[from(ignore)]
    BookingAlreadyCancelled(#[error(not(source))] booking::Id),

    /// [`Booking`] is a part of an [`Order`].
    ///
    /// [`Order`]: crate::domain::Order
    #[display("`Booking(id: {_0})` is a part of `Order(id: {_1})`")]
    #[from(ignore)]
    BookingInOrder(booking::Id, order::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{booking, order, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{CancelBooking, Command as _, ExecutionError};

    #[tokio::test]
    async fn cancels_pending_booking() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(500), 2);
        let booking = fixture::booking(&package);
        let db = Mock::with(State {
            bookings: [(booking.id, booking.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let cancelled = svc
            .execute(CancelBooking {
                booking_id: booking.id,
            })
            .await
            .unwrap();

        assert_eq!(cancelled.status, booking::Status::Cancelled);
        assert_eq!(
            db.state().bookings[&booking.id].status,
            booking::Status::Cancelled,
        );
    }

    #[tokio::test]
    async fn refuses_booking_in_order() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(500), 2);
        let order_id = order::Id::new();
        let mut booking = fixture::booking(&package);
        booking.order_id = Some(order_id);
        let db = Mock::with(State {
            bookings: [(booking.id, booking.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(CancelBooking {
                booking_id: booking.id,
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::BookingInOrder(b, o)
                    if b == booking.id && o == order_id,
            ),
            "unexpected error: {err}",
        );
        assert_eq!(
            db.state().bookings[&booking.id].status,
            booking::Status::Pending,
        );
    }

    #[tokio::test]
    async fn refuses_cancelled_booking() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(500), 2);
        let mut booking = fixture::booking(&package);
        booking.status = booking::Status::Cancelled;
        let db = Mock::with(State {
            bookings: [(booking.id, booking.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(CancelBooking {
                booking_id: booking.id,
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::BookingAlreadyCancelled(_)),
            "unexpected error: {err}",
        );
    }
}
