//! [`Command`] for creating a new [`Voucher`].

use common::{
    operations::{By, Commit, Insert, Lock, Select, Transact, Transacted},
    DateTime, Percent,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{voucher, Voucher},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for creating a new [`Voucher`] with a unique
/// [`voucher::Code`].
#[derive(Clone, Debug)]
pub struct CreateVoucher {
    /// [`voucher::Code`] of a new [`Voucher`].
    pub code: voucher::Code,

    /// Discount of a new [`Voucher`].
    pub discount: Percent,

    /// [`voucher::ExpirationDateTime`] of a new [`Voucher`].
    pub valid_until: Option<voucher::ExpirationDateTime>,

    /// Maximum number of redemptions of a new [`Voucher`].
    pub max_redemptions: Option<u32>,
}

impl<Db, M> Command<CreateVoucher> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Voucher, voucher::Code>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Voucher>, voucher::Code>>,
            Ok = Option<Voucher>,
            Err = Traced<database::Error>,
        > + Database<Insert<Voucher>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Voucher;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: CreateVoucher,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CreateVoucher {
            code,
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

        // Avoid concurrent creation of `Voucher`s with the same `Code`.
        tx.execute(Lock(By::<Voucher, _>::new(code.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let existing = tx
            .execute(Select(By::<Option<Voucher>, _>::new(code.clone())))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        if existing.is_some() {
            return Err(tracerr::new!(E::CodeOccupied(code)));
        }

        let voucher = Voucher {
            id: voucher::Id::new(),
            code,
            discount,
            valid_until,
            max_redemptions,
            redemptions: 0,
            created_at: DateTime::now().coerce(),
        };
        tx.execute(Insert(voucher.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(voucher)
    }
}

/// Error of [`CreateVoucher`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`voucher::Code`] is used by another [`Voucher`].
    #[display("`Voucher(code: {_0})` exists already")]
    #[from(ignore)]
    CodeOccupied(#[error(not(source))] voucher::Code),

    /// [`Voucher`] grants no discount.
    #[display("`Voucher` discount must be positive")]
    ZeroDiscount,
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal::Decimal;

    use crate::{
        domain::voucher,
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, CreateVoucher, ExecutionError};

    fn create(code: &str, discount: i64) -> CreateVoucher {
        CreateVoucher {
            code: voucher::Code::new(code).unwrap(),
            discount: Percent::new(Decimal::from(discount)).unwrap(),
            valid_until: None,
            max_redemptions: Some(100),
        }
    }

    #[tokio::test]
    async fn creates_unused_voucher() {
        let db = Mock::with(State::default());
        let svc = mock::service(&db, &Recorder::default());

        let created = svc.execute(create("new-year", 25)).await.unwrap();

        assert_eq!(created.code.to_string(), "NEW-YEAR");
        assert_eq!(created.redemptions, 0);
        assert!(db.state().vouchers.contains_key(&created.id));
    }

    #[tokio::test]
    async fn refuses_occupied_code() {
        let existing = fixture::voucher("SUMMER", 10);
        let db = Mock::with(State {
            vouchers: [(existing.id, existing)].into(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(create("summer", 30))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::CodeOccupied(_)),
            "unexpected error: {err}",
        );
        assert_eq!(err.to_string(), "`Voucher(code: SUMMER)` exists already");
        assert_eq!(db.state().vouchers.len(), 1);
    }

    #[tokio::test]
    async fn refuses_zero_discount() {
        let db = Mock::with(State::default());
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(create("FREE", 0))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::ZeroDiscount),
            "unexpected error: {err}",
        );
    }
}
