//! [`Command`] for detaching a [`Template`] from a [`Vacation`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{template, vacation, Template, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for detaching a [`Template`] from a [`Vacation`].
#[derive(Clone, Copy, Debug)]
pub struct DetachTemplate {
    /// ID of the [`Vacation`] to detach the [`Template`] from.
    pub vacation_id: vacation::Id,

    /// ID of the [`Template`] to detach.
    pub template_id: template::Id,
}

impl<Db, M> Command<DetachTemplate> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Template>, vacation::Id>>,
            Ok = Vec<Template>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<vacation::TemplateLink>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Vacation;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DetachTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DetachTemplate {
            vacation_id,
            template_id,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let vacation = tx
            .execute(Select(By::<Option<Vacation>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VacationNotExists(vacation_id))
            .map_err(tracerr::wrap!())?;

        let attached = tx
            .execute(Select(By::<Vec<Template>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !attached.iter().any(|t| t.id == template_id) {
            return Err(tracerr::new!(E::TemplateNotAttached(template_id)));
        }

        tx.execute(Delete(vacation::TemplateLink {
            vacation_id,
            template_id,
        }))
        .await
        .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(vacation)
    }
}

/// Error of [`DetachTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Vacation`] doesn't exist.
    #[display("`Vacation(id: {_0})` does not exist")]
    #[from(ignore)]
    VacationNotExists(#[error(not(source))] vacation::Id),

    /// [`Template`] isn't attached to the [`Vacation`].
    #[display("`Template(id: {_0})` is not attached")]
    #[from(ignore)]
    TemplateNotAttached(#[error(not(source))] template::Id),
}
