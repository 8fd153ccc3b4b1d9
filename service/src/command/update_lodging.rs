//! [`Command`] for updating an existing [`Lodging`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{area, lodging, Area, Lodging},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Lodging`].
#[derive(Clone, Debug)]
pub struct UpdateLodging {
    /// ID of the [`Lodging`] to update.
    pub lodging_id: lodging::Id,

    /// ID of the [`Area`] the [`Lodging`] is located in.
    pub area_id: area::Id,

    /// New [`lodging::Name`] of the [`Lodging`].
    pub name: lodging::Name,

    /// New [`lodging::Kind`] of the [`Lodging`].
    pub kind: lodging::Kind,

    /// New [`lodging::Address`] of the [`Lodging`].
    pub address: lodging::Address,

    /// New [`lodging::Description`] of the [`Lodging`].
    pub description: Option<lodging::Description>,

    /// New [`lodging::Stars`] of the [`Lodging`].
    pub stars: Option<lodging::Stars>,
}

impl<Db, M> Command<UpdateLodging> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Lodging>, lodging::Id>>,
            Ok = Option<Lodging>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Area>, area::Id>>,
            Ok = Option<Area>,
            Err = Traced<database::Error>,
        > + Database<Update<Lodging>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Lodging;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateLodging,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateLodging {
            lodging_id,
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

        let mut lodging = tx
            .execute(Select(By::<Option<Lodging>, _>::new(lodging_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::LodgingNotExists(lodging_id))
            .map_err(tracerr::wrap!())?;

        if lodging.area_id != area_id {
            _ = tx
                .execute(Select(By::<Option<Area>, _>::new(area_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or(E::AreaNotExists(area_id))
                .map_err(tracerr::wrap!())?;
        }

        lodging.area_id = area_id;
        lodging.name = name;
        lodging.kind = kind;
        lodging.address = address;
        lodging.description = description;
        lodging.stars = stars;
        tx.execute(Update(lodging.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(lodging)
    }
}

/// Error of [`UpdateLodging`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Lodging`] doesn't exist.
    #[display("`Lodging(id: {_0})` does not exist")]
    #[from(ignore)]
    LodgingNotExists(#[error(not(source))] lodging::Id),

    /// [`Area`] doesn't exist.
    #[display("`Area(id: {_0})` does not exist")]
    #[from(ignore)]
    AreaNotExists(#[error(not(source))] area::Id),
}
