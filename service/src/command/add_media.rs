//! [`Command`] for adding a new [`Media`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{lodging, media, room, vacation, Lodging, Media, Room, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for adding a new [`Media`] to the end of its
/// [`media::Owner`]'s gallery.
#[derive(Clone, Debug)]
pub struct AddMedia {
    /// [`media::Owner`] of a new [`Media`].
    pub owner: media::Owner,

    /// [`media::Kind`] of a new [`Media`].
    pub kind: media::Kind,

    /// [`media::Url`] of a new [`Media`].
    pub url: media::Url,

    /// [`media::Caption`] of a new [`Media`].
    pub caption: Option<media::Caption>,
}

impl<Db, M> Command<AddMedia> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Lodging>, lodging::Id>>,
            Ok = Option<Lodging>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Room>, room::Id>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Media>, media::Owner>>,
            Ok = Vec<Media>,
            Err = Traced<database::Error>,
        > + Database<Insert<Media>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Media;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddMedia) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddMedia {
            owner,
            kind,
            url,
            caption,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let owner_exists = match owner {
            media::Owner::Vacation(id) => tx
                .execute(Select(By::<Option<Vacation>, _>::new(id)))
                .await
                .map(|v| v.is_some()),
            media::Owner::Lodging(id) => tx
                .execute(Select(By::<Option<Lodging>, _>::new(id)))
                .await
                .map(|l| l.is_some()),
            media::Owner::Room(id) => tx
                .execute(Select(By::<Option<Room>, _>::new(id)))
                .await
                .map(|r| r.is_some()),
        }
        .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if !owner_exists {
            return Err(tracerr::new!(E::OwnerNotExists(owner)));
        }

        let position = tx
            .execute(Select(By::<Vec<Media>, _>::new(owner)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .iter()
            .map(|m| m.position.saturating_add(1))
            .max()
            .unwrap_or_default();

        let media = Media {
            id: media::Id::new(),
            owner,
            kind,
            url,
            caption,
            position,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(media.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(media)
    }
}

/// Error of [`AddMedia`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`media::Owner`] doesn't exist.
    #[display("`{}(id: {})` does not exist", _0.kind(), _0.uuid())]
    #[from(ignore)]
    OwnerNotExists(#[error(not(source))] media::Owner),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{media, room, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{AddMedia, Command as _, ExecutionError};

    fn add(owner: media::Owner) -> AddMedia {
        AddMedia {
            owner,
            kind: media::Kind::Image,
            url: media::Url::new("https://example.com/b.jpg").unwrap(),
            caption: None,
        }
    }

    #[tokio::test]
    async fn appends_after_last_position() {
        let vacation = fixture::vacation(vacation::Status::Draft);
        let owner = media::Owner::Vacation(vacation.id);
        let first = fixture::media(owner, 0);
        let last = fixture::media(owner, 4);
        let other =
            fixture::media(media::Owner::Vacation(vacation::Id::new()), 9);
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation)].into(),
            media: [first, last, other]
                .into_iter()
                .map(|m| (m.id, m))
                .collect(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let added = svc.execute(add(owner)).await.unwrap();

        assert_eq!(added.position, 5);
        assert_eq!(db.state().media.len(), 4);
    }

    #[tokio::test]
    async fn starts_from_zero() {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let owner = media::Owner::Lodging(lodging.id);
        let db = Mock::with(State {
            lodgings: [(lodging.id, lodging)].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let added = svc.execute(add(owner)).await.unwrap();

        assert_eq!(added.position, 0);
        assert_eq!(added.owner, owner);
    }

    #[tokio::test]
    async fn refuses_unknown_owner() {
        let db = Mock::default();
        let svc = mock::service(&db, &Recorder::default());
        let owner = media::Owner::Room(room::Id::new());

        let err = svc.execute(add(owner)).await.unwrap_err().into_inner();

        assert!(
            matches!(err, ExecutionError::OwnerNotExists(o) if o == owner),
            "unexpected error: {err}",
        );
        assert!(db.state().media.is_empty());
    }
}
