//! [`Command`] for setting [`Amenity`]s of a [`Room`].

use std::collections::HashMap;

use common::operations::{By, Commit, Select, Transact, Transacted, Update};
use derive_more::{Display, Error, From};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::{
    domain::{amenity, room, Amenity, Room},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for replacing the whole set of [`Amenity`]s a [`Room`] is
/// equipped with.
#[derive(Clone, Debug)]
pub struct SetRoomAmenities {
    /// ID of the [`Room`] to set [`Amenity`]s of.
    pub room_id: room::Id,

    /// IDs of the [`Amenity`]s to set.
    ///
    /// Duplicates are ignored.
    pub amenity_ids: Vec<amenity::Id>,
}

impl<Db, M> Command<SetRoomAmenities> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Room>, room::Id>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<HashMap<amenity::Id, Amenity>, Vec<amenity::Id>>>,
            Ok = HashMap<amenity::Id, Amenity>,
            Err = Traced<database::Error>,
        > + Database<Update<Room>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Room;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: SetRoomAmenities,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let SetRoomAmenities {
            room_id,
            amenity_ids,
        } = cmd;
        let amenity_ids = amenity_ids.into_iter().unique().collect::<Vec<_>>();

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut room = tx
            .execute(Select(By::<Option<Room>, _>::new(room_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RoomNotExists(room_id))
            .map_err(tracerr::wrap!())?;

        let amenities = tx
            .execute(Select(By::<HashMap<amenity::Id, Amenity>, _>::new(
                amenity_ids.clone(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if let Some(missing) =
            amenity_ids.iter().find(|id| !amenities.contains_key(id))
        {
            return Err(tracerr::new!(E::AmenityNotExists(*missing)));
        }

        room.amenities = amenity_ids;
        tx.execute(Update(room.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(room)
    }
}

/// Error of [`SetRoomAmenities`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Room`] doesn't exist.
    #[display("`Room(id: {_0})` does not exist")]
    #[from(ignore)]
    RoomNotExists(#[error(not(source))] room::Id),

    /// [`Amenity`] doesn't exist.
    #[display("`Amenity(id: {_0})` does not exist")]
    #[from(ignore)]
    AmenityNotExists(#[error(not(source))] amenity::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::amenity,
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, SetRoomAmenities};

    #[tokio::test]
    async fn replaces_amenities_without_duplicates() {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let mut room = fixture::room(&lodging, fixture::usd(100), 2);
        let (wifi, pool, spa) = (
            fixture::amenity("Wi-Fi"),
            fixture::amenity("Pool"),
            fixture::amenity("Spa"),
        );
        room.amenities = vec![spa.id];
        let db = Mock::with(State {
            rooms: [(room.id, room.clone())].into(),
            amenities: [wifi.clone(), pool.clone(), spa]
                .into_iter()
                .map(|a| (a.id, a))
                .collect(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let updated = svc
            .execute(SetRoomAmenities {
                room_id: room.id,
                amenity_ids: vec![wifi.id, pool.id, wifi.id],
            })
            .await
            .unwrap();

        assert_eq!(updated.amenities, vec![wifi.id, pool.id]);
        assert_eq!(db.state().rooms[&room.id].amenities, updated.amenities);
    }

    #[tokio::test]
    async fn refuses_unknown_amenity() {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let room = fixture::room(&lodging, fixture::usd(100), 2);
        let wifi = fixture::amenity("Wi-Fi");
        let unknown = amenity::Id::new();
        let db = Mock::with(State {
            rooms: [(room.id, room.clone())].into(),
            amenities: [(wifi.id, wifi.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(SetRoomAmenities {
                room_id: room.id,
                amenity_ids: vec![wifi.id, unknown],
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::AmenityNotExists(id) if id == unknown,
            ),
            "unexpected error: {err}",
        );
        assert!(db.state().rooms[&room.id].amenities.is_empty());
        assert_eq!(db.state().commits, 0);
    }
}
