//! [`Command`] for attaching a [`Template`] to a [`Vacation`].

use common::operations::{
    By, Commit, Delete, Insert, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{template, vacation, Template, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for attaching a [`Template`] to a [`Vacation`].
///
/// A [`Vacation`] has at most one title and one description, so attaching a
/// [`Template`] of an exclusive [`template::Kind`] replaces the previously
/// attached one of the same [`template::Kind`]. Terms accumulate.
#[derive(Clone, Copy, Debug)]
pub struct AttachTemplate {
    /// ID of the [`Vacation`] to attach the [`Template`] to.
    pub vacation_id: vacation::Id,

    /// ID of the [`Template`] to attach.
    pub template_id: template::Id,
}

impl<Db, M> Command<AttachTemplate> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Template>, template::Id>>,
            Ok = Option<Template>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Template>, vacation::Id>>,
            Ok = Vec<Template>,
            Err = Traced<database::Error>,
        > + Database<
            Insert<vacation::TemplateLink>,
            Ok = (),
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
        cmd: AttachTemplate,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AttachTemplate {
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
        let template = tx
            .execute(Select(By::<Option<Template>, _>::new(template_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::TemplateNotExists(template_id))
            .map_err(tracerr::wrap!())?;

        let attached = tx
            .execute(Select(By::<Vec<Template>, _>::new(vacation_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if attached.iter().any(|t| t.id == template_id) {
            return Ok(vacation);
        }

        if template.kind.is_exclusive() {
            for replaced in attached.iter().filter(|t| t.kind == template.kind)
            {
                tx.execute(Delete(vacation::TemplateLink {
                    vacation_id,
                    template_id: replaced.id,
                }))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            }
        }

        tx.execute(Insert(vacation::TemplateLink {
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

/// Error of [`AttachTemplate`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Vacation`] doesn't exist.
    #[display("`Vacation(id: {_0})` does not exist")]
    #[from(ignore)]
    VacationNotExists(#[error(not(source))] vacation::Id),

    /// [`Template`] doesn't exist.
    #[display("`Template(id: {_0})` does not exist")]
    #[from(ignore)]
    TemplateNotExists(#[error(not(source))] template::Id),
}

#[cfg(test)]
mod spec {
    use std::collections::HashSet;

    use crate::{
        domain::{template, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{AttachTemplate, Command as _, ExecutionError};

    fn attached(db: &Mock, id: vacation::Id) -> HashSet<template::Id> {
        db.state()
            .template_links
            .iter()
            .filter(|l| l.vacation_id == id)
            .map(|l| l.template_id)
            .collect()
    }

    #[tokio::test]
    async fn replaces_exclusive_kind() {
        let vacation = fixture::vacation(vacation::Status::Draft);
        let first = fixture::template(template::Kind::Title);
        let second = fixture::template(template::Kind::Title);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            templates: [&first, &second].map(|t| (t.id, t.clone())).into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        for t in [&first, &second] {
            let _ = svc
                .execute(AttachTemplate {
                    vacation_id: vacation.id,
                    template_id: t.id,
                })
                .await
                .unwrap();
        }

        assert_eq!(attached(&db, vacation.id), [second.id].into());
    }

    #[tokio::test]
    async fn accumulates_terms() {
        let vacation = fixture::vacation(vacation::Status::Draft);
        let first = fixture::template(template::Kind::Term);
        let second = fixture::template(template::Kind::Term);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            templates: [&first, &second].map(|t| (t.id, t.clone())).into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        for t in [&first, &second, &first] {
            let _ = svc
                .execute(AttachTemplate {
                    vacation_id: vacation.id,
                    template_id: t.id,
                })
                .await
                .unwrap();
        }

        assert_eq!(attached(&db, vacation.id), [first.id, second.id].into());
    }

    #[tokio::test]
    async fn fails_on_unknown_template() {
        let vacation = fixture::vacation(vacation::Status::Draft);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let id = template::Id::new();
        let err = svc
            .execute(AttachTemplate {
                vacation_id: vacation.id,
                template_id: id,
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::TemplateNotExists(t) if t == id),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().commits, 0);
    }
}
