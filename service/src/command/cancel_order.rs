//! [`Command`] for cancelling an [`Order`].

use std::collections::HashMap;

use common::operations::{
    By, Commit, Lock, Select, Transact, Transacted, Update,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking, order, voucher, Booking, Order, Voucher},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for cancelling an [`Order`] along with all its [`Booking`]s.
///
/// Redemption of the [`Voucher`] used by the [`Order`] is given back.
#[derive(Clone, Copy, Debug)]
pub struct CancelOrder {
    /// ID of the [`Order`] to cancel.
    pub order_id: order::Id,
}

impl<Db, M> Command<CancelOrder> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Order, order::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Order>, order::Id>>,
            Ok = Option<Order>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<HashMap<booking::Id, Booking>, Vec<booking::Id>>>,
            Ok = HashMap<booking::Id, Booking>,
            Err = Traced<database::Error>,
        > + Database<
            Lock<By<Voucher, voucher::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Voucher>, voucher::Id>>,
            Ok = Option<Voucher>,
            Err = Traced<database::Error>,
        > + Database<Update<Voucher>, Ok = (), Err = Traced<database::Error>>
        + Database<Update<Booking>, Ok = (), Err = Traced<database::Error>>
        + Database<Update<Order>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Order;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: CancelOrder) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let CancelOrder { order_id } = cmd;

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        tx.execute(Lock(By::<Order, _>::new(order_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let mut order = tx
            .execute(Select(By::<Option<Order>, _>::new(order_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::OrderNotExists(order_id))
            .map_err(tracerr::wrap!())?;
        if order.status == order::Status::Cancelled {
            return Err(tracerr::new!(E::OrderAlreadyCancelled(order_id)));
        }

        let bookings = tx
            .execute(Select(By::<HashMap<_, Booking>, _>::new(
                order.bookings.clone(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        for mut booking in bookings.into_values() {
            booking.status = booking::Status::Cancelled;
            tx.execute(Update(booking))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        if let Some(voucher_id) = order.voucher_id {
            tx.execute(Lock(By::<Voucher, _>::new(voucher_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;

            // `Voucher` may have been deleted meanwhile.
            let voucher = tx
                .execute(Select(By::<Option<Voucher>, _>::new(voucher_id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
            if let Some(mut voucher) = voucher {
                voucher.redemptions = voucher.redemptions.saturating_sub(1);
                tx.execute(Update(voucher))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?;
            }
        }

        order.status = order::Status::Cancelled;
        tx.execute(Update(order.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(order)
    }
}

/// Error of [`CancelOrder`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Order`] doesn't exist.
    #[display("`Order(id: {_0})` does not exist")]
    #[from(ignore)]
    OrderNotExists(#[error(not(source))] order::Id),

    /// [`Order`] is cancelled already.
    #[display("`Order(id: {_0})` is cancelled already")]
    #[from(ignore)]
    OrderAlreadyCancelled(#[error(not(source))] order::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::{PayOrder, PlaceOrder},
        domain::{booking, guest, order, vacation, Order, Voucher},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{CancelOrder, Command as _, ExecutionError};

    async fn placed(db: &Mock, voucher: &Voucher) -> Order {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(200), 2);
        let booking = fixture::booking(&package);
        {
            let mut state = db.state();
            let _ = state.bookings.insert(booking.id, booking.clone());
            let _ = state.vouchers.insert(voucher.id, voucher.clone());
        }

        mock::service(db, &Recorder::default())
            .execute(PlaceOrder {
                email: guest::Email::new("jane@example.com").unwrap(),
                booking_ids: vec![booking.id],
                voucher_code: Some(voucher.code.clone()),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn returns_voucher_redemption() {
        let db = Mock::with(State::default());
        let voucher = fixture::voucher("AUTUMN", 20);
        let order = placed(&db, &voucher).await;
        assert_eq!(db.state().vouchers[&voucher.id].redemptions, 1);
        let svc = mock::service(&db, &Recorder::default());

        let cancelled = svc
            .execute(CancelOrder { order_id: order.id })
            .await
            .unwrap();

        assert_eq!(cancelled.status, order::Status::Cancelled);
        let state = db.state();
        assert_eq!(state.vouchers[&voucher.id].redemptions, 0);
        assert!(state
            .bookings
            .values()
            .all(|b| b.status == booking::Status::Cancelled));
    }

    #[tokio::test]
    async fn cancels_paid_order() {
        let db = Mock::with(State::default());
        let voucher = fixture::voucher("WINTER", 5);
        let order = placed(&db, &voucher).await;
        let svc = mock::service(&db, &Recorder::default());
        let _ = svc.execute(PayOrder { order_id: order.id }).await.unwrap();

        let cancelled = svc
            .execute(CancelOrder { order_id: order.id })
            .await
            .unwrap();

        assert_eq!(cancelled.status, order::Status::Cancelled);
    }

    #[tokio::test]
    async fn tolerates_deleted_voucher() {
        let db = Mock::with(State::default());
        let voucher = fixture::voucher("SPRING", 15);
        let order = placed(&db, &voucher).await;
        let _ = db.state().vouchers.remove(&voucher.id);
        let svc = mock::service(&db, &Recorder::default());

        let cancelled = svc
            .execute(CancelOrder { order_id: order.id })
            .await
            .unwrap();

        assert_eq!(cancelled.voucher_id, Some(voucher.id));
        assert!(db.state().vouchers.is_empty());
    }

    #[tokio::test]
    async fn refuses_cancelling_twice() {
        let db = Mock::with(State::default());
        let voucher = fixture::voucher("SUMMER", 10);
        let order = placed(&db, &voucher).await;
        let svc = mock::service(&db, &Recorder::default());

        let _ = svc.execute(CancelOrder { order_id: order.id }).await.unwrap();
        let err = svc
            .execute(CancelOrder { order_id: order.id })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::OrderAlreadyCancelled(_)),
            "unexpected error: {err}",
        );
        assert_eq!(
            db.state().vouchers[&voucher.id].redemptions,
            0,
            "redemption returned only once",
        );
    }

    #[tokio::test]
    async fn fails_on_unknown_order() {
        let db = Mock::with(State::default());
        let svc = mock::service(&db, &Recorder::default());

        let id = order::Id::new();
        let err = svc
            .execute(CancelOrder { order_id: id })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::OrderNotExists(o) if o == id),
            "unexpected error: {err}",
        );
    }
}
