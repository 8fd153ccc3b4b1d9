//! [`Command`] for deleting an [`Amenity`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{amenity, Amenity},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting an [`Amenity`].
///
/// The [`Amenity`] is detached from all the [`Room`]s it was attached to.
///
/// [`Room`]: crate::domain::Room
#[derive(Clone, Copy, Debug)]
pub struct DeleteAmenity {
    /// ID of the [`Amenity`] to delete.
    pub amenity_id: amenity::Id,
}

impl<Db, M> Command<DeleteAmenity> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Amenity>, amenity::Id>>,
            Ok = Option<Amenity>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Amenity, amenity::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Amenity;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteAmenity,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteAmenity { amenity_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let amenity = tx
            .execute(Select(By::<Option<Amenity>, _>::new(amenity_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AmenityNotExists(amenity_id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<Amenity, _>::new(amenity_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(amenity)
    }
}

/// Error of [`DeleteAmenity`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Amenity`] doesn't exist.
    #[display("`Amenity(id: {_0})` does not exist")]
    #[from(ignore)]
    AmenityNotExists(#[error(not(source))] amenity::Id),
}
