//! [`Command`] for creating a new [`Booking`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        booking, package, room, vacation, Booking, Guest, Package, Vacation,
    },
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for booking a [`Package`] of a published [`Vacation`].
///
/// A new [`Booking`] is [`booking::Status::Pending`] until confirmed, and
/// carries the price and duration of the [`Package`] at the moment of booking.
#[derive(Clone, Debug)]
pub struct CreateBooking {
    /// ID of the booked [`Package`].
    pub package_id: package::Id,

    /// [`Guest`] the [`Booking`] is made for.
    pub guest: Guest,

    /// Number of adults staying.
    pub adults: u16,

    /// Number of children staying.
    pub children: u16,

    /// [`booking::CheckInDateTime`] of the arrival.
    pub check_in: booking::CheckInDateTime,
}

impl<Db, M> Command<CreateBooking> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Package>, package::Id>>,
            Ok = Option<Package>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<Insert<Booking>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Booking;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateBooking,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateBooking {
            package_id,
            guest,
            adults,
            children,
            check_in,
        } = cmd;

        if adults == 0 {
            return Err(tracerr::new!(E::NoAdults));
        }
        if check_in.is_past() {
            return Err(tracerr::new!(E::CheckInInPast));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let package = tx
            .execute(Select(By::<Option<Package>, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotExists(package_id))
            .map_err(tracerr::wrap!())?;

        let published = tx
            .execute(Select(By::<Option<Vacation>, _>::new(
                package.vacation_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .is_some_and(|v| v.is_published());
        if !published {
            return Err(tracerr::new!(E::VacationNotPublished(
                package.vacation_id
            )));
        }

        let guests = adults.saturating_add(children);
        if guests > package.max_guests.get() {
            return Err(tracerr::new!(E::TooManyGuests(package.max_guests)));
        }

        let booking = Booking {
            id: booking::Id::new(),
            vacation_id: package.vacation_id,
            package_id,
            guest,
            adults,
            children,
            check_in,
            nights: package.nights,
            price: package.price,
            status: booking::Status::Pending,
            order_id: None,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(booking.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(booking)
    }
}

/// Error of [`CreateBooking`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Package`] doesn't exist.
    #[display("`Package(id: {_0})` does not exist")]
    #[from(ignore)]
    PackageNotExists(#[error(not(source))] package::Id),

    /// [`Vacation`] of the [`Package`] isn't published.
    #[display("`Vacation(id: {_0})` is not published")]
    #[from(ignore)]
    VacationNotPublished(#[error(not(source))] vacation::Id),

    /// No adults are staying.
    #[display("At least one adult must stay")]
    NoAdults,

    /// More guests are staying than the [`Package`] allows.
    #[display("No more than {_0} guests may stay")]
    #[from(ignore)]
    TooManyGuests(#[error(not(source))] room::Capacity),

    /// Arrival is in the past.
    #[display("Check-in date is in the past")]
    CheckInInPast,
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::{
        domain::{booking, vacation, Package},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, CreateBooking, ExecutionError};

    fn prepare(status: vacation::Status) -> (Mock, Package) {
        let vacation = fixture::vacation(status);
        let package = fixture::package(&vacation, fixture::usd(700), 3);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation)].into(),
            packages: [(package.id, package.clone())].into(),
            ..State::default()
        });
        (db, package)
    }

    fn book(package: &Package, adults: u16, children: u16) -> CreateBooking {
        CreateBooking {
            package_id: package.id,
            guest: fixture::guest(),
            adults,
            children,
            check_in: DateTime::now().add_days(3).coerce(),
        }
    }

    #[tokio::test]
    async fn copies_package_terms() {
        let (db, package) = prepare(vacation::Status::Published);
        let svc = mock::service(&db, &Recorder::default());

        let booking = svc.execute(book(&package, 2, 1)).await.unwrap();

        assert_eq!(booking.price, package.price);
        assert_eq!(booking.nights, package.nights);
        assert_eq!(booking.status, booking::Status::Pending);
        assert!(booking.order_id.is_none());
        assert!(db.state().bookings.contains_key(&booking.id));
    }

    #[tokio::test]
    async fn refuses_unpublished_vacation() {
        let (db, package) = prepare(vacation::Status::Draft);
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(book(&package, 2, 0))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::VacationNotPublished(_)),
            "unexpected error: {err}",
        );
        assert!(db.state().bookings.is_empty());
    }

    #[tokio::test]
    async fn refuses_too_many_guests() {
        let (db, package) = prepare(vacation::Status::Published);
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(book(&package, 2, 2))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::TooManyGuests(c) if c.get() == 3),
            "unexpected error: {err}",
        );
    }

    #[tokio::test]
    async fn refuses_no_adults() {
        let (db, package) = prepare(vacation::Status::Published);
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(book(&package, 0, 2))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::NoAdults),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().commits, 0);
    }

    #[tokio::test]
    async fn propagates_database_failure() {
        let (db, package) = prepare(vacation::Status::Published);
        db.state().failing = true;
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(book(&package, 1, 0))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::Db(_)),
            "unexpected error: {err}",
        );
    }
}
