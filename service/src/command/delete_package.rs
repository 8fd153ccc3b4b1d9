//! [`Command`] for deleting a [`Package`].

use common::operations::{By, Commit, Delete, Select, Transact, Transacted};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{package, Package},
    infra::{database, Database},
    read, Service,
};

use super::Command;

/// [`Command`] for deleting a never booked [`Package`].
#[derive(Clone, Copy, Debug)]
pub struct DeletePackage {
    /// ID of the [`Package`] to delete.
    pub package_id: package::Id,
}

impl<Db, M> Command<DeletePackage> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Select<By<Option<Package>, package::Id>>,
            Ok = Option<Package>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::package::HasBookings, package::Id>>,
            Ok = read::package::HasBookings,
            Err = Traced<database::Error>,
        > + Database<
            Delete<By<Package, package::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Package;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeletePackage,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeletePackage { package_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let package = tx
            .execute(Select(By::<Option<Package>, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PackageNotExists(package_id))
            .map_err(tracerr::wrap!())?;

        let has_bookings = tx
            .execute(Select(By::<read::package::HasBookings, _>::new(
                package_id,
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if *has_bookings {
            return Err(tracerr::new!(E::PackageHasBookings(package_id)));
        }

        tx.execute(Delete(By::<Package, _>::new(package_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(package)
    }
}

/// Error of [`DeletePackage`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Package`] doesn't exist.
    #[display("`Package(id: {_0})` does not exist")]
    #[from(ignore)]
    PackageNotExists(#[error(not(source))] package::Id),

    /// [`Package`] has been booked already.
    #[display("`Package(id: {_0})` has `Booking`s")]
    #[from(ignore)]
    PackageHasBookings(#[error(not(source))] package::Id),
}
