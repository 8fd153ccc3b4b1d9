//! [`Command`] for updating an existing [`Voucher`].

use common::{
    operations::{By, Commit, Lock, Select, Transact, Transacted, Update},
    Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{voucher, Voucher},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for updating terms of an existing [`Voucher`].
///
/// [`voucher::Code`] of a [`Voucher`] cannot be changed.
#[derive(Clone, Copy, Debug)]
pub struct UpdateVoucher {
    /// ID of the [`Voucher`] to update.
    pub voucher_id: voucher::Id,

    /// New discount of the [`Voucher`].
    pub discount: Percent,

    /// New [`voucher::ExpirationDateTime`] of the [`Voucher`].
    pub valid_until: Option<voucher::ExpirationDateTime>,

    /// New maximum number of redemptions of the [`Voucher`].
    pub max_redemptions: Option<u32>,
}

impl<Db, M> Command<UpdateVoucher> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Voucher, voucher::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Voucher>, voucher::Id>>,
            Ok = Option<Voucher>,
            Err = Traced<database::Error>,
        > + Database<Update<Voucher>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Voucher;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateVoucher,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateVoucher {
            voucher_id,
            discount,
            valid_until,
            max_redemptions,
        } = cmd;

        if discount.is_zero() {
            return Err(tracerr::new!(E::ZeroDiscount));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid racing with concurrent redemptions.
        tx.execute(Lock(By::<Voucher, _>::new(voucher_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut voucher = tx
            .execute(Select(By::<Option<Voucher>, _>::new(voucher_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VoucherNotExists(voucher_id))
            .map_err(tracerr::wrap!())?;

        voucher.discount = discount;
        voucher.valid_until = valid_until;
        voucher.max_redemptions = max_redemptions;
        tx.execute(Update(voucher.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(voucher)
    }
}

/// Error of [`UpdateVoucher`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Voucher`] doesn't exist.
    #[display("`Voucher(id: {_0})` does not exist")]
    #[from(ignore)]
    VoucherNotExists(#[error(not(source))] voucher::Id),

    /// [`Voucher`] grants no discount.
    #[display("`Voucher` discount must be positive")]
    ZeroDiscount,
}
