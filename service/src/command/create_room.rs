//! [`Command`] for creating a new [`Room`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lodging, room, Lodging, Room},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Room`] in a [`Lodging`].
#[derive(Clone, Debug)]
pub struct CreateRoom {
    /// ID of the [`Lodging`] a new [`Room`] belongs to.
    pub lodging_id: lodging::Id,

    /// [`room::Name`] of a new [`Room`].
    pub name: room::Name,

    /// [`room::Capacity`] of a new [`Room`].
    pub capacity: room::Capacity,

    /// Price of a single night in a new [`Room`].
    pub price_per_night: Money,
}

impl<Db, M> Command<CreateRoom> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Lodging>, lodging::Id>>,
            Ok = Option<Lodging>,
            Err = Traced<database::Error>,
        > + Database<Insert<Room>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateRoom) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateRoom {
            lodging_id,
            name,
            capacity,
            price_per_night,
        } = cmd;

        if !price_per_night.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(price_per_night)));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = tx
            .execute(Select(By::<Option<Lodging>, _>::new(lodging_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LodgingNotExists(lodging_id))
            .map_err(tracerr::wrap!())?;

        let room = Room {
            id: room::Id::new(),
            lodging_id,
            name,
            capacity,
            price_per_night,
            amenities: Vec::new(),
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(room.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(room)
    }
}

/// Error of [`CreateRoom`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Lodging`] doesn't exist.
    #[display("`Lodging(id: {_0})` does not exist")]
    #[from(ignore)]
    LodgingNotExists(#[error(not(source))] lodging::Id),

    /// Price is zero.
    #[display("Price must be positive, got `{_0}`")]
    #[from(ignore)]
    NonPositivePrice(#[error(not(source))] Money),
}
