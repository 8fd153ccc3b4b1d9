//! [`Command`] for deleting a [`Lodging`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lodging, Lodging},
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for deleting a [`Lodging`] no [`Vacation`] is offered in.
///
/// [`Room`]s of the [`Lodging`] are deleted along.
///
/// [`Room`]: crate::domain::Room
/// [`Vacation`]: crate::domain::Vacation
#[derive(Clone, Copy, Debug)]
pub struct DeleteLodging {
    /// ID of the [`Lodging`] to delete.
    pub lodging_id: lodging::Id,
}

impl<Db, M> Command<DeleteLodging> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Lodging>, lodging::Id>>,
            Ok = Option<Lodging>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::lodging::InUse, lodging::Id>>,
            Ok = read::lodging::InUse,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Lodging, lodging::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Lodging;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteLodging,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteLodging { lodging_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let lodging = tx
            .execute(Select(By::<Option<Lodging>, _>::new(lodging_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LodgingNotExists(lodging_id))
            .map_err(tracerr::wrap!())?;

        let in_use = tx
            .execute(Select(By::<read::lodging::InUse, _>::new(lodging_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if *in_use {
            return Err(tracerr::new!(E::LodgingInUse(lodging_id)));
        }

        tx.execute(Delete(By::<Lodging, _>::new(lodging_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lodging)
    }
}

/// Error of [`DeleteLodging`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Lodging`] doesn't exist.
    #[display("`Lodging(id: {_0})` does not exist")]
    #[from(ignore)]
    LodgingNotExists(#[error(not(source))] lodging::Id),

    /// [`Lodging`] is offered by a [`Vacation`].
    ///
    /// [`Vacation`]: crate::domain::Vacation
    #[display("`Lodging(id: {_0})` is still in use")]
    #[from(ignore)]
    LodgingInUse(#[error(not(source))] lodging::Id),
}
