//! [`Command`] for updating an existing [`Area`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{area, Area},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Area`].
#[derive(Clone, Debug)]
pub struct UpdateArea {
    /// ID of the [`Area`] to update.
    pub area_id: area::Id,

    /// New [`area::Name`] of the [`Area`].
    pub name: area::Name,

    /// New [`area::Country`] of the [`Area`].
    pub country: area::Country,

    /// New [`area::Description`] of the [`Area`].
    pub description: Option<area::Description>,
}

impl<Db, M> Command<UpdateArea> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Area>, area::Id>>,
            Ok = Option<Area>,
            Err = Traced<database::Error>,
        > + Database<Update<Area>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Area;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateArea) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateArea {
            area_id,
            name,
            country,
            description,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut area = tx
            .execute(Select(By::<Option<Area>, _>::new(area_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::AreaNotExists(area_id))
            .map_err(tracerr::wrap!())?;

        area.name = name;
        area.country = country;
        area.description = description;
        tx.execute(Update(area.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(area)
    }
}

/// Error of [`UpdateArea`] [`Command`] execution.
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
