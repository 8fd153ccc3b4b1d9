//! [`Command`] for updating an existing [`Package`].

use common::{
    operations::{By, Commit, Select, Transact, Transacted, Update},
    Money,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{package, room, Package, Room},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating an existing [`Package`].
///
/// Existing [`Booking`]s keep the price and duration they were made with.
///
/// [`Booking`]: crate::domain::Booking
#[derive(Clone, Debug)]
pub struct UpdatePackage {
    /// ID of the [`Package`] to update.
    pub package_id: package::Id,

    /// New [`package::Name`] of the [`Package`].
    pub name: package::Name,

    /// New [`package::Nights`] of the [`Package`].
    pub nights: package::Nights,

    /// New total price of the [`Package`].
    pub price: Money,

    /// New maximum number of guests of the [`Package`].
    pub max_guests: room::Capacity,
}

impl<Db, M> Command<UpdatePackage> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Package>, package::Id>>,
            Ok = Option<Package>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Room>, room::Id>>,
            Ok = Option<Room>,
            Err = Traced<database::Error>,
        > + Database<Update<Package>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Package;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdatePackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdatePackage {
            package_id,
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

        let mut package = tx
            .execute(Select(By::<Option<Package>, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotExists(package_id))
            .map_err(tracerr::wrap!())?;
        let room = tx
            .execute(Select(By::<Option<Room>, _>::new(package.room_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::RoomNotExists(package.room_id))
            .map_err(tracerr::wrap!())?;
        if !room.fits(max_guests.get()) {
            return Err(tracerr::new!(E::ExceedsRoomCapacity(room.capacity)));
        }

        package.name = name;
        package.nights = nights;
        package.price = price;
        package.max_guests = max_guests;
        tx.execute(Update(package.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(package)
    }
}

/// Error of [`UpdatePackage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Package`] doesn't exist.
    #[display("`Package(id: {_0})` does not exist")]
    #[from(ignore)]
    PackageNotExists(#[error(not(source))] package::Id),

    /// [`Room`] of the [`Package`] doesn't exist.
    #[display("`Room(id: {_0})` does not exist")]
    #[from(ignore)]
    RoomNotExists(#[error(not(source))] room::Id),

    /// [`Package::max_guests`] exceeds the [`Room::capacity`].
    #[display("`Room` accommodates at most {_0} guests")]
    #[from(ignore)]
    ExceedsRoomCapacity(#[error(not(source))] room::Capacity),

    /// Price is zero.
    #[display("Price must be positive, got `{_0}`")]
    #[from(ignore)]
    NonPositivePrice(#[error(not(source))] Money),
}
