//! [`Command`] for deleting a [`Vacation`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{vacation, Vacation},
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for deleting a never booked [`Vacation`].
///
/// [`Package`]s, [`Media`] and [`Review`]s of the [`Vacation`] are deleted
/// along, while its [`Template`]s are only detached.
///
/// [`Media`]: crate::domain::Media
/// [`Package`]: crate::domain::Package
/// [`Review`]: crate::domain::Review
/// [`Template`]: crate::domain::Template
#[derive(Clone, Copy, Debug)]
pub struct DeleteVacation {
    /// ID of the [`Vacation`] to delete.
    pub vacation_id: vacation::Id,
}

impl<Db, M> Command<DeleteVacation> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::vacation::HasBookings, vacation::Id>>,
            Ok = read::vacation::HasBookings,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Vacation, vacation::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Vacation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteVacation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteVacation { vacation_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let vacation = tx
            .execute(Select(By::<Option<Vacation>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VacationNotExists(vacation_id))
            .map_err(tracerr::wrap!())?;

        let has_bookings = tx
            .execute(Select(By::<read::vacation::HasBookings, _>::new(
                vacation_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if *has_bookings {
            return Err(tracerr::new!(E::VacationHasBookings(vacation_id)));
        }

        tx.execute(Delete(By::<Vacation, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vacation)
    }
}

/// Error of [`DeleteVacation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Vacation`] doesn't exist.
    #[display("`Vacation(id: {_0})` does not exist")]
    #[from(ignore)]
    VacationNotExists(#[error(not(source))] vacation::Id),

    /// [`Vacation`] has been booked already.
    #[display("`Vacation(id: {_0})` has `Booking`s")]
    #[from(ignore)]
    VacationHasBookings(#[error(not(source))] vacation::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{booking, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, DeleteVacation, ExecutionError};

    #[tokio::test]
    async fn deletes_never_booked_vacation() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let deleted = svc
            .execute(DeleteVacation {
                vacation_id: vacation.id,
            })
            .await
            .unwrap();

        assert_eq!(deleted.id, vacation.id);
        assert!(db.state().vacations.is_empty());
    }

    #[tokio::test]
    async fn refuses_booked_vacation() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(500), 2);
        let mut booking = fixture::booking(&package);
        booking.status = booking::Status::Cancelled;
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            packages: [(package.id, package)].into(),
            bookings: [(booking.id, booking)].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(DeleteVacation {
                vacation_id: vacation.id,
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::VacationHasBookings(id) if id == vacation.id,
            ),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().vacations.len(), 1);
    }
}
