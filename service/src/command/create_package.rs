//! [`Command`] for creating a new [`Package`].

use common::{
    operations::{By, Commit, Insert, Select, Transact, Transacted},
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{package, room, vacation, Package, Room, Vacation},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Package`] of a [`Vacation`].
///
/// The [`Room`] must belong to the [`Lodging`] of the [`Vacation`] and
/// accommodate the [`Package::max_guests`].
///
/// [`Lodging`]: crate::domain::Lodging
#[derive(Clone, Debug)]
pub struct CreatePackage {
    /// ID of the [`Vacation`] offering a new [`Package`].
    pub vacation_id: vacation::Id,

    /// ID of the [`Room`] of a new [`Package`].
    pub room_id: room::Id,

    /// [`package::Name`] of a new [`Package`].
    pub name: package::Name,

    /// [`package::Nights`] of a new [`Package`].
    pub nights: package::Nights,

    /// Total price of a new [`Package`].
    pub price: Money,

    /// Maximum number of guests of a new [`Package`].
    pub max_guests: room::Capacity,
}

impl<Db, M> Command<CreatePackage> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Vacation>, vacation::Id>>,
            Ok = Option<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Room>, room::Id>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<Insert<Package>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Package;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreatePackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreatePackage {
            vacation_id,
            room_id,
            name,
            nights,
            price,
            max_guests,
        } = cmd;

        if !price.is_positive() {
            return Err(tracerr::new!(E::NonPositivePrice(price)));
        }

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
        let room = tx
            .execute(Select(By::<Option<Room>, _>::new(room_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RoomNotExists(room_id))
            .map_err(tracerr::wrap!())?;
        if room.lodging_id != vacation.lodging_id {
            return Err(tracerr::new!(E::RoomNotInLodging(room_id)));
        }
        if !room.fits(max_guests.get()) {
            return Err(tracerr::new!(E::ExceedsRoomCapacity(room.capacity)));
        }

        let package = Package {
            id: package::Id::new(),
            vacation_id,
            room_id,
            name,
            nights,
            price,
            max_guests,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(package.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(package)
    }
}

/// Error of [`CreatePackage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Vacation`] doesn't exist.
    #[display("`Vacation(id: {_0})` does not exist")]
    #[from(ignore)]
    VacationNotExists(#[error(not(source))] vacation::Id),

    /// [`Room`] doesn't exist.
    #[display("`Room(id: {_0})` does not exist")]
    #[from(ignore)]
    RoomNotExists(#[error(not(source))] room::Id),

    /// [`Room`] belongs to another [`Lodging`].
    ///
    /// [`Lodging`]: crate::domain::Lodging
    #[display("`Room(id: {_0})` belongs to another `Lodging`")]
    #[from(ignore)]
    RoomNotInLodging(#[error(not(source))] room::Id),

    /// [`Package::max_guests`] exceeds the [`Room::capacity`].
    #[display("`Room` accommodates at most {_0} guests")]
    #[from(ignore)]
    ExceedsRoomCapacity(#[error(not(source))] room::Capacity),

    /// Price is zero.
    #[display("Price must be positive, got `{_0}`")]
    #[from(ignore)]
    NonPositivePrice(#[error(not(source))] Money),
}

#[cfg(test)]
mod spec {
    use crate::{
        domain::{package, room, vacation, Room, Vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, CreatePackage, ExecutionError};

    fn create(
        vacation: &Vacation,
        room: &Room,
        max_guests: u16,
    ) -> CreatePackage {
        CreatePackage {
            vacation_id: vacation.id,
            room_id: room.id,
            name: package::Name::new("Week").unwrap(),
            nights: package::Nights::new(7).unwrap(),
            price: fixture::usd(700),
            max_guests: room::Capacity::new(max_guests).unwrap(),
        }
    }

    /// Creates a [`Vacation`] and a [`Room`] of 2 guests in its lodging.
    fn setup() -> (Vacation, Room) {
        let area = fixture::area();
        let lodging = fixture::lodging(&area);
        let mut vacation = fixture::vacation(vacation::Status::Draft);
        vacation.area_id = area.id;
        vacation.lodging_id = lodging.id;
        let room = fixture::room(&lodging, fixture::usd(100), 2);
        (vacation, room)
    }

    fn db(vacation: &Vacation, room: &Room) -> Mock {
        Mock::with(State {
            vacations: [(vacation.id, vacation.clone())].into(),
            rooms: [(room.id, room.clone())].into(),
            ..State::default()
        })
    }

    #[tokio::test]
    async fn creates_package() {
        let (vacation, room) = setup();
        let db = db(&vacation, &room);
        let svc = mock::service(&db, &Recorder::default());

        let created = svc.execute(create(&vacation, &room, 2)).await.unwrap();

        assert_eq!(created.vacation_id, vacation.id);
        assert_eq!(created.room_id, room.id);
        assert!(db.state().packages.contains_key(&created.id));
    }

    #[tokio::test]
    async fn refuses_room_of_another_lodging() {
        let (vacation, _) = setup();
        let foreign = fixture::room(
            &fixture::lodging(&fixture::area()),
            fixture::usd(100),
            2,
        );
        let db = db(&vacation, &foreign);
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(create(&vacation, &foreign, 2))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::RoomNotInLodging(id) if id == foreign.id,
            ),
            "unexpected error: {err}",
        );
        assert!(db.state().packages.is_empty());
    }

    #[tokio::test]
    async fn refuses_exceeding_room_capacity() {
        let (vacation, room) = setup();
        let db = db(&vacation, &room);
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(create(&vacation, &room, 3))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::ExceedsRoomCapacity(c) if c == room.capacity,
            ),
            "unexpected error: {err}",
        );
        assert!(db.state().packages.is_empty());
    }

    #[tokio::test]
    async fn refuses_non_positive_price() {
        let (vacation, room) = setup();
        let db = db(&vacation, &room);
        let svc = mock::service(&db, &Recorder::default());
        let mut cmd = create(&vacation, &room, 2);
        cmd.price = fixture::usd(0);

        let err = svc.execute(cmd).await.unwrap_err().into_inner();

        assert!(
            matches!(err, ExecutionError::NonPositivePrice(_)),
            "unexpected error: {err}",
        );
    }
}
