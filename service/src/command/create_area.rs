//! [`Command`] for creating a new [`Area`].

use common::{
    operations::{Commit, Insert, Transact, Transacted},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{area, Area},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Area`].
#[derive(Clone, Debug)]
pub struct CreateArea {
    /// [`area::Name`] of a new [`Area`].
    pub name: area::Name,

    /// [`area::Country`] of a new [`Area`].
    pub country: area::Country,

    /// [`area::Description`] of a new [`Area`].
    pub description: Option<area::Description>,
}

impl<Db, M> Command<CreateArea> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Insert<Area>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Area;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CreateArea) -> Result<Self::Ok, Self::Err> {
        let CreateArea {
            name,
            country,
            description,
        } = cmd;

        let area = Area {
            id: area::Id::new(),
            name,
            country,
            description,
            created_at: DateTime::now().coerce(),
        };

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;
        tx.execute(Insert(area.clone()))
            .await
            .map_err(tracerr::wrap!())?;
        tx.execute(Commit).await.map_err(tracerr::wrap!())?;

        Ok(area)
    }
}

/// Error of [`CreateArea`] [`Command`] execution.
pub type ExecutionError = database::Error;
