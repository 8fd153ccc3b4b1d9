//! [`Command`] for removing a [`Media`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{media, Media},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for removing a [`Media`] from its [`media::Owner`]'s gallery.
///
/// Positions of the remaining [`Media`] are left untouched.
#[derive(Clone, Copy, Debug)]
pub struct RemoveMedia {
    /// ID of the [`Media`] to remove.
    pub media_id: media::Id,
}

impl<Db, M> Command<RemoveMedia> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Media>, media::Id>>,
            Ok = Option<Media>,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Media, media::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Media;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: RemoveMedia) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let RemoveMedia { media_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let media = tx
            .execute(Select(By::<Option<Media>, _>::new(media_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::MediaNotExists(media_id))
            .map_err(tracerr::wrap!())?;

        tx.execute(Delete(By::<Media, _>::new(media_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(media)
    }
}

/// Error of [`RemoveMedia`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Media`] doesn't exist.
    #[display("`Media(id: {_0})` does not exist")]
    #[from(ignore)]
    MediaNotExists(#[error(not(source))] media::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{media, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, RemoveMedia};

    #[tokio::test]
    async fn keeps_order_of_remaining_media() {
        let owner = media::Owner::Vacation(vacation::Id::new());
        let items = [
            fixture::media(owner, 0),
            fixture::media(owner, 1),
            fixture::media(owner, 2),
        ];
        let removed_id = items[1].id;
        let db = Mock::with(State {
            media: items.iter().map(|m| (m.id, m.clone())).collect(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let removed = svc
            .execute(RemoveMedia {
                media_id: removed_id,
            })
            .await
            .unwrap();

        assert_eq!(removed.id, removed_id);
        let mut left = db.state().media.values().cloned().collect::<Vec<_>>();
        left.sort_by_key(|m| m.position);
        assert_eq!(
            left.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![items[0].id, items[2].id],
        );
    }

    #[tokio::test]
    async fn refuses_unknown_media() {
        let db = Mock::default();
        let svc = mock::service(&db, &Recorder::default());
        let media_id = media::Id::new();

        let err = svc
            .execute(RemoveMedia { media_id })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::MediaNotExists(id) if id == media_id),
            "unexpected error: {err}",
        );
    }
}
