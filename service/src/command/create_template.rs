//! [`Command`] for creating a new [`Template`].

use common::{
    operations::{Commit, Insert, Transact, Transacted},
    DateTime,
};
use tracerr::Traced;

use crate::{
    domain::{template, Template},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Template`].
#[derive(Clone, Debug)]
pub struct CreateTemplate {
    /// [`template::Kind`] of a new [`Template`].
    pub kind: template::Kind,

    /// [`template::Name`] of a new [`Template`].
    pub name: template::Name,

    /// [`template::Content`] of a new [`Template`].
    pub content: template::Content,
}

impl<Db, M> Command<CreateTemplate> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Insert<Template>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Template;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        let CreateTemplate {
            kind,
            name,
            content,
        } = cmd;

        let template = Template {
            id: template::Id::new(),
            kind,
            name,
            content,
            created_at: DateTime::now().coerce(),
        };

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;
        tx.execute(Insert(template.clone()))
            .await
            .map_err(tracerr::wrap!())?;
        tx.execute(Commit).await.map_err(tracerr::wrap!())?;

        Ok(template)
    }
}

/// Error of [`CreateTemplate`] [`Command`] execution.
pub type ExecutionError = database::Error;
