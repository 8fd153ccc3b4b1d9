//! [`Command`] for updating an existing [`Vacation`].

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{vacation, Package, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Vacation`].
///
/// A [`Vacation`] can be published only once it offers at least one
/// [`Package`].
#[derive(Clone, Debug)]
pub struct UpdateVacation {
    /// ID of the [`Vacation`] to update.
    pub vacation_id: vacation::Id,

    /// New [`vacation::Title`] of the [`Vacation`].
    pub title: vacation::Title,

    /// New [`vacation::Summary`] of the [`Vacation`].
    pub summary: Option<vacation::Summary>,

    /// Indicator whether the [`Vacation`] is featured.
    pub is_featured: bool,

    /// New [`vacation::Status`] of the [`Vacation`].
    pub status: vacation::Status,
}

impl<Db, M> Command<UpdateVacation> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Package>, vacation::Id>>,
            Ok = Vec<Package>,
            Err = Traced<database::Error>,
        > + Database<Update<Vacation>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Vacation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateVacation,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateVacation {
            vacation_id,
            title,
            summary,
            is_featured,
            status,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut vacation = tx
            .execute(Select(By::<Option<Vacation>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VacationNotExists(vacation_id))
            .map_err(tracerr::wrap!())?;

        if status == vacation::Status::Published && !vacation.is_published() {
            let packages = tx
                .execute(Select(By::<Vec<Package>, _>::new(vacation_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if packages.is_empty() {
                return Err(tracerr::new!(E::NoPackages(vacation_id)));
            }
        }

        vacation.title = title;
        vacation.summary = summary;
        vacation.is_featured = is_featured;
        vacation.status = status;
        vacation.updated_at = DateTime::now().coerce();
        tx.execute(Update(vacation.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vacation)
    }
}

/// Error of [`UpdateVacation`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Vacation`] doesn't exist.
    #[display("`Vacation(id: {_0})` does not exist")]
    #[from(ignore)]
    VacationNotExists(#[error(not(source))] vacation::Id),

    /// [`Vacation`] cannot be published without [`Package`]s.
    #[display("`Vacation(id: {_0})` has no `Package`s to be published")]
    #[from(ignore)]
    NoPackages(#[error(not(source))] vacation::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{vacation, Vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, UpdateVacation};

    fn publish(v: &Vacation) -> UpdateVacation {
        UpdateVacation {
            vacation_id: v.id,
            title: v.title.clone(),
            summary: None,
            is_featured: true,
            status: vacation::Status::Published,
        }
    }

    #[tokio::test]
    async fn refuses_publishing_without_packages() {
        let draft = fixture::vacation(vacation::Status::Draft);
        let db = Mock::with(State {
            vacations: [(draft.id, draft.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc.execute(publish(&draft)).await.unwrap_err().into_inner();

        assert!(
            matches!(err, ExecutionError::NoPackages(id) if id == draft.id),
            "unexpected error: {err}",
        );
        assert!(!db.state().vacations[&draft.id].is_published());
    }

    #[tokio::test]
    async fn publishes_with_packages() {
        let draft = fixture::vacation(vacation::Status::Draft);
        let package = fixture::package(&draft, fixture::usd(500), 2);
        let db = Mock::with(State {
            vacations: [(draft.id, draft.clone())].into(),
            packages: [(package.id, package)].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let updated = svc.execute(publish(&draft)).await.unwrap();

        assert!(updated.is_published());
        assert!(updated.is_featured);
        assert!(db.state().vacations[&draft.id].is_published());
        assert_eq!(db.state().commits, 1);
    }
}
