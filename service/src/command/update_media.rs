//! [`Command`] for updating an existing [`Media`].

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{media, Media},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating caption and position of an existing [`Media`].
#[derive(Clone, Debug)]
pub struct UpdateMedia {
    /// ID of the [`Media`] to update.
    pub media_id: media::Id,

    /// New [`media::Caption`] of the [`Media`].
    pub caption: Option<media::Caption>,

    /// New position of the [`Media`] in its [`media::Owner`]'s gallery.
    pub position: u16,
}

impl<Db, M> Command<UpdateMedia> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Media>, media::Id>>,
            Ok = Option<Media>,
            Err = Traced<database::Error>,
        > + Database<Update<Media>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Media;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: UpdateMedia) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateMedia {
            media_id,
            caption,
            position,
        } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut media = tx
            .execute(Select(By::<Option<Media>, _>::new(media_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::MediaNotExists(media_id))
            .map_err(tracerr::wrap!())?;

        media.caption = caption;
        media.position = position;
        tx.execute(Update(media.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(media)
    }
}

/// Error of [`UpdateMedia`] [`Command`] execution.
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
