//! [`Command`] for deleting a [`Voucher`].

use common::operations::{
    By, Commit, Delete, Lock, Select, Transact, Transacted,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{voucher, Voucher},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for deleting a never redeemed [`Voucher`].
#[derive(Clone, Copy, Debug)]
pub struct DeleteVoucher {
    /// ID of the [`Voucher`] to delete.
    pub voucher_id: voucher::Id,
}

impl<Db, M> Command<DeleteVoucher> for Service<Db, M>
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
        > + Database<
            Delete<By<Voucher, voucher::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Voucher;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: DeleteVoucher,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let DeleteVoucher { voucher_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Avoid racing with concurrent redemptions.
        tx.execute(Lock(By::<Voucher, _>::new(voucher_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let voucher = tx
            .execute(Select(By::<Option<Voucher>, _>::new(voucher_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::VoucherNotExists(voucher_id))
            .map_err(tracerr::wrap!())?;
        if voucher.redemptions > 0 {
            return Err(tracerr::new!(E::VoucherRedeemed(voucher_id)));
        }

        tx.execute(Delete(By::<Voucher, _>::new(voucher_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(voucher)
    }
}

/// Error of [`DeleteVoucher`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Voucher`] doesn't exist.
    #[display("`Voucher(id: {_0})` does not exist")]
    #[from(ignore)]
    VoucherNotExists(#[error(not(source))] voucher::Id),

    /// [`Voucher`] has been redeemed already.
    #[display("`Voucher(id: {_0})` has been redeemed")]
    #[from(ignore)]
    VoucherRedeemed(#[error(not(source))] voucher::Id),
}

#[cfg(test)]
mod spec {
    use crate::infra::{
        database::mock::{self, fixture, Mock, State},
        mail::mock::Recorder,
    };

    use super::{Command as _, DeleteVoucher, ExecutionError};

    #[tokio::test]
    async fn deletes_unused_voucher() {
        let voucher = fixture::voucher("SUMMER", 10);
        let db = Mock::with(State {
            vouchers: [(voucher.id, voucher.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let deleted = svc
            .execute(DeleteVoucher {
                voucher_id: voucher.id,
            })
            .await
            .unwrap();

        assert_eq!(deleted.id, voucher.id);
        assert!(db.state().vouchers.is_empty());
    }

    #[tokio::test]
    async fn refuses_redeemed_voucher() {
        let mut voucher = fixture::voucher("SUMMER", 10);
        voucher.redemptions = 1;
        let db = Mock::with(State {
            vouchers: [(voucher.id, voucher.clone())].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(DeleteVoucher {
                voucher_id: voucher.id,
            })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(
                err,
                ExecutionError::VoucherRedeemed(id) if id == voucher.id,
            ),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().vouchers.len(), 1);
    }
}
