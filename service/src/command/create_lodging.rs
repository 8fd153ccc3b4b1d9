//! [`Command`] for creating a new [`Lodging`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{area, lodging, Area, Lodging},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Lodging`].
#[derive(Clone, Debug)]
pub struct CreateLodging {
    /// ID of the [`Area`] a new [`Lodging`] is located in.
    pub area_id: area::Id,

    /// [`lodging::Name`] of a new [`Lodging`].
    pub name: lodging::Name,

    /// [`lodging::Kind`] of a new [`Lodging`].
    pub kind: lodging::Kind,

    /// [`lodging::Address`] of a new [`Lodging`].
    pub address: lodging::Address,

    /// [`lodging::Description`] of a new [`Lodging`].
    pub description: Option<lodging::Description>,

    /// [`lodging::Stars`] of a new [`Lodging`].
    pub stars: Option<lodging::Stars>,
}

impl<Db, M> Command<CreateLodging> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Area>, area::Id>>,
            Ok = Option<Area>,
            Err = Traced<database::Error>,
        > + Database<Insert<Lodging>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Lodging;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateLodging,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateLodging {
            area_id,
            name,
            kind,
            address,
            description,
            stars,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        _ = tx
            .execute(Select(By::<Option<Area>, _>::new(area_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AreaNotExists(area_id))
            .map_err(tracerr::wrap!())?;

        let lodging = Lodging {
            id: lodging::Id::new(),
            area_id,
            name,
            kind,
            address,
            description,
            stars,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(lodging.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lodging)
    }
}

/// Error of [`CreateLodging`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Area`] doesn't exist.
    #[display("`Area(id: {_0})` does not exist")]
    #[from(ignore)]
    AreaNotExists(#[error(not(source))] area::Id),
}
