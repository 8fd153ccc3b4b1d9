//! [`Command`] for updating an existing [`Amenity`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{amenity, Amenity},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Amenity`].
#[derive(Clone, Debug)]
pub struct UpdateAmenity {
    /// ID of the [`Amenity`] to update.
    pub amenity_id: amenity::Id,

    /// New [`amenity::Name`] of the [`Amenity`].
    pub name: amenity::Name,

    /// New [`amenity::Description`] of the [`Amenity`].
    pub description: Option<amenity::Description>,
}

impl<Db, M> Command<UpdateAmenity> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Amenity>, amenity::Id>>,
            Ok = Option<Amenity>,
            Err = Traced<database::Error>,
        > + Database<Update<Amenity>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Amenity;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateAmenity,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateAmenity {
            amenity_id,
            name,
            description,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut amenity = tx
            .execute(Select(By::<Option<Amenity>, _>::new(amenity_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AmenityNotExists(amenity_id))
            .map_err(tracerr::wrap!())?;

        amenity.name = name;
        amenity.description = description;
        tx.execute(Update(amenity.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(amenity)
    }
}

/// Error of [`UpdateAmenity`] [`Command`] execution.
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
