//! [`Command`] for updating an existing [`Template`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{template, Template},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Template`].
///
/// [`template::Kind`] of a [`Template`] cannot be changed.
#[derive(Clone, Debug)]
pub struct UpdateTemplate {
    /// ID of the [`Template`] to update.
    pub template_id: template::Id,

    /// New [`template::Name`] of the [`Template`].
    pub name: template::Name,

    /// New [`template::Content`] of the [`Template`].
    pub content: template::Content,
}

impl<Db, M> Command<UpdateTemplate> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Template>, template::Id>>,
            Ok = Option<Template>,
            Err = Traced<database::Error>,
        > + Database<Update<Template>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Template;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateTemplate {
            template_id,
            name,
            content,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut template = tx
            .execute(Select(By::<Option<Template>, _>::new(template_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TemplateNotExists(template_id))
            .map_err(tracerr::wrap!())?;

        template.name = name;
        template.content = content;
        tx.execute(Update(template.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(template)
    }
}

/// Error of [`UpdateTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Template`] doesn't exist.
    #[display("`Template(id: {_0})` does not exist")]
    #[from(ignore)]
    TemplateNotExists(#[error(not(source))] template::Id),
}
