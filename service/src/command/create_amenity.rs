//! [`Command`] for creating a new [`Amenity`].

use common::{
    operations::{Commit, Insert, Transact, Transacted},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{amenity, Amenity},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Amenity`].
#[derive(Clone, Debug)]
pub struct CreateAmenity {
    /// [`amenity::Name`] of a new [`Amenity`].
    pub name: amenity::Name,

    /// [`amenity::Description`] of a new [`Amenity`].
    pub description: Option<amenity::Description>,
}

impl<Db, M> Command<CreateAmenity> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Insert<Amenity>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Amenity;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateAmenity,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateAmenity { name, description } = cmd;

        let amenity = Amenity {
            id: amenity::Id::new(),
            name,
            description,
            created_at: DateTime::now().coerce(),
        };

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;
        tx.execute(Insert(amenity.clone()))
            .await
            .map_err(tracerr::wrap!())?;
        tx.execute(Commit).await.map_err(tracerr::wrap!())?;

        Ok(amenity)
    }
}

/// Error of [`CreateAmenity`] [`Command`] execution.
pub type ExecutionError = database::Error;
