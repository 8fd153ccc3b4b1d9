//! [`Command`] for deleting a [`Template`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{template, Template},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a [`Template`].
///
/// The [`Template`] is detached from all the [`Vacation`]s it was attached
/// to.
///
/// [`Vacation`]: crate::domain::Vacation
#[derive(Clone, Copy, Debug)]
pub struct DeleteTemplate {
    /// ID of the [`Template`] to delete.
    pub template_id: template::Id,
}

impl<Db, M> Command<DeleteTemplate> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Template>, template::Id>>,
            Ok = Option<Template>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Template, template::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Template;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteTemplate { template_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let template = tx
            .execute(Select(By::<Option<Template>, _>::new(template_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TemplateNotExists(template_id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<Template, _>::new(template_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(template)
    }
}

/// Error of [`DeleteTemplate`] [`Command`] execution.
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
