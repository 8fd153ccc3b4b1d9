//! [`Command`] for deleting an [`Area`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{area, Area},
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for deleting an [`Area`] nothing is located in.
#[derive(Clone, Copy, Debug)]
pub struct DeleteArea {
    /// ID of the [`Area`] to delete.
    pub area_id: area::Id,
}

impl<Db, M> Command<DeleteArea> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Area>, area::Id>>,
            Ok = Option<Area>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::area::InUse, area::Id>>,
            Ok = read::area::InUse,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Area, area::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Area;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: DeleteArea) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteArea { area_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let area = tx
            .execute(Select(By::<Option<Area>, _>::new(area_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AreaNotExists(area_id))
            .map_err(tracerr::wrap!())?;

        let in_use = tx
            .execute(Select(By::<read::area::InUse, _>::new(area_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if *in_use {
            return Err(tracerr::new!(E::AreaInUse(area_id)));
        }

        tx.execute(Delete(By::<Area, _>::new(area_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(area)
    }
}

/// Error of [`DeleteArea`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Area`] doesn't exist.
    #[display("`Area(id: {_0})` does not exist")]
    #[from(ignore)]
    AreaNotExists(#[error(not(source))] area::Id),

    /// [`Area`] is referenced by a [`Lodging`] or a [`Vacation`].
    ///
    /// [`Lodging`]: crate::domain::Lodging
    /// [`Vacation`]: crate::domain::Vacation
    #[display("`Area(id: {_0})` is still in use")]
    #[from(ignore)]
    AreaInUse(#[error(not(source))] area::Id),
}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::{
        domain::{area, vacation, Area},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, DeleteArea, ExecutionError};

    fn area() -> Area {
        Area {
            id: area::Id::new(),
            name: area::Name::new("Algarve").unwrap(),
            country: area::Country::new("Portugal").unwrap(),
            description: None,
            created_at: DateTime::now().coerce(),
        }
    }

    #[tokio::test]
    async fn deletes_unused_area() {
        let area = area();
        let db = Mock::with(State {
            areas: [(area.id, area.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let deleted = svc.execute(DeleteArea { area_id: area.id }).await;

        assert_eq!(deleted.unwrap().id, area.id);
        assert!(db.state().areas.is_empty());
    }

    #[tokio::test]
    async fn refuses_area_in_use() {
        let area = area();
        let mut vacation = fixture::vacation(vacation::Status::Draft);
        vacation.area_id = area.id;
        let db = Mock::with(State {
            areas: [(area.id, area.clone())].into(),
            vacations: [(vacation.id, vacation)].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(DeleteArea { area_id: area.id })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::AreaInUse(id) if id == area.id),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().areas.len(), 1);
    }
}
