//! [`Command`] for placing a new [`Order`].

use std::collections::HashMap;

use common::{
    operations::{
        By, Commit, Insert, Lock, Select, Transact, Transacted, Update,
    },
    DateTime, Money,
};
use derive_more::{Display, Error, From};
use itertools::Itertools as _;
use tracerr::Traced;

use crate::{
    domain::{booking, guest, order, voucher, Booking, Order, Voucher},
    infra::{database, Database},
    Service,
};

use super::Command;

/// [`Command`] for placing a new [`Order`] paying for pending [`Booking`]s,
/// optionally discounted with a [`Voucher`].
///
/// All the [`Booking`]s must be priced in the same currency. Redemption of the
/// [`Voucher`] is counted once the [`Order`] is placed.
#[derive(Clone, Debug)]
pub struct PlaceOrder {
    /// [`guest::Email`] to send the [`Order`] confirmation to.
    pub email: guest::Email,

    /// IDs of the [`Booking`]s to pay for.
    pub booking_ids: Vec<booking::Id>,

    /// [`voucher::Code`] of the [`Voucher`] to redeem, if any.
    pub voucher_code: Option<voucher::Code>,
}

impl<Db, M> Command<PlaceOrder> for Service<Db, M>
where
    Db: Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Booking, booking::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<HashMap<booking::Id, Booking>, Vec<booking::Id>>>,
            Ok = HashMap<booking::Id, Booking>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Voucher>, voucher::Code>>,
            Ok = Option<Voucher>,
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
        + Database<Insert<Order>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = Order;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: PlaceOrder) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PlaceOrder {
            email,
            booking_ids,
            voucher_code,
        } = cmd;

        let booking_ids = booking_ids.into_iter().unique().collect::<Vec<_>>();
        if booking_ids.is_empty() {
            return Err(tracerr::new!(E::NoBookings));
        }

        let tx = self
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        // Locks are taken in a stable order to avoid deadlocks between
        // concurrent `Order`s sharing `Booking`s.
        for id in booking_ids.iter().sorted() {
            tx.execute(Lock(By::<Booking, _>::new(*id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        let mut found = tx
            .execute(Select(By::<HashMap<_, Booking>, _>::new(
                booking_ids.clone(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        let mut bookings = Vec::with_capacity(booking_ids.len());
        for id in &booking_ids {
            let booking = found
                .remove(id)
                .ok_or(E::BookingNotExists(*id))
                .map_err(tracerr::wrap!())?;
            if booking.status != booking::Status::Pending {
                return Err(tracerr::new!(E::BookingNotPending(*id)));
            }
            if booking.order_id.is_some() {
                return Err(tracerr::new!(E::BookingInOrder(*id)));
            }
            bookings.push(booking);
        }

        let mut subtotal = Money::zero(bookings[0].price.currency);
        for b in &bookings {
            if b.price.currency != subtotal.currency {
                return Err(tracerr::new!(E::CurrencyMismatch(b.id)));
            }
            subtotal = subtotal
                .checked_add(b.price)
                .ok_or(E::SubtotalOverflow)
                .map_err(tracerr::wrap!())?;
        }

        let mut discount = Money::zero(subtotal.currency);
        let mut voucher_id = None;
        if let Some(code) = voucher_code {
            let id = tx
                .execute(Select(By::<Option<Voucher>, _>::new(code.clone())))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or_else(|| E::VoucherNotExists(code.clone()))
                .map_err(tracerr::wrap!())?
                .id;

            // Avoid exceeding the redemptions limit concurrently.
            tx.execute(Lock(By::<Voucher, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;

            let mut voucher = tx
                .execute(Select(By::<Option<Voucher>, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?
                .ok_or_else(|| E::VoucherNotExists(code.clone()))
                .map_err(tracerr::wrap!())?;
            if !voucher.is_redeemable() {
                return Err(tracerr::new!(E::VoucherNotRedeemable(code)));
            }

            discount = subtotal.percent(voucher.discount);
            voucher_id = Some(voucher.id);

            voucher.redemptions += 1;
            tx.execute(Update(voucher))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }
        let total = subtotal
            .checked_sub(discount)
            .ok_or(E::CurrencyMismatch(bookings[0].id))
            .map_err(tracerr::wrap!())?;

        let order = Order {
            id: order::Id::new(),
            email,
            bookings: booking_ids,
            voucher_id,
            subtotal,
            discount,
            total,
            status: order::Status::Pending,
            created_at: DateTime::now().coerce(),
            paid_at: None,
        };
        tx.execute(Insert(order.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        for mut booking in bookings {
            booking.order_id = Some(order.id);
            tx.execute(Update(booking))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(order)
    }
}

/// Error of [`PlaceOrder`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// No [`Booking`]s are provided.
    #[display("`Order` must contain at least one `Booking`")]
    NoBookings,

    /// [`Booking`] doesn't exist.
    #[display("`Booking(id: {_0})` does not exist")]
    #[from(ignore)]
    BookingNotExists(#[error(not(source))] booking::Id),

    /// [`Booking`] isn't pending.
    #[display("`Booking(id: {_0})` is not pending")]
    #[from(ignore)]
    BookingNotPending(#[error(not(source))] booking::Id),

    /// [`Booking`] is a part of another [`Order`] already.
    #[display("`Booking(id: {_0})` is a part of another `Order`")]
    #[from(ignore)]
    BookingInOrder(#[error(not(source))] booking::Id),

    /// [`Booking`] is priced in a currency differing from the other ones.
    #[display("`Booking(id: {_0})` is priced in a different currency")]
    #[from(ignore)]
    CurrencyMismatch(#[error(not(source))] booking::Id),

    /// [`Voucher`] doesn't exist.
    #[display("`Voucher(code: {_0})` does not exist")]
    #[from(ignore)]
    VoucherNotExists(#[error(not(source))] voucher::Code),

    /// [`Voucher`] is expired or used up.
    #[display("`Voucher(code: {_0})` cannot be redeemed")]
    #[from(ignore)]
    VoucherNotRedeemable(#[error(not(source))] voucher::Code),

    /// Sum of the [`Booking`]s prices exceeds the representable amount.
    #[display("`Order` subtotal is too large")]
    SubtotalOverflow,
}

#[cfg(test)]
mod spec {
    use common::{Currency, Money};
    use rust_decimal::Decimal;

    use crate::{
        domain::{guest, vacation, voucher, Booking, Voucher},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, PlaceOrder};

    fn prepare(voucher: Option<Voucher>) -> (Mock, Vec<Booking>) {
        let vacation = fixture::vacation(vacation::Status::Published);
        let cheap = fixture::package(&vacation, fixture::usd(300), 2);
        let pricey = fixture::package(&vacation, fixture::usd(700), 4);
        let bookings =
            vec![fixture::booking(&cheap), fixture::booking(&pricey)];
        let db = Mock::with(State {
            vacations: [(vacation.id, vacation)].into(),
            bookings: bookings.iter().map(|b| (b.id, b.clone())).collect(),
            vouchers: voucher.into_iter().map(|v| (v.id, v)).collect(),
            ..State::default()
        });
        (db, bookings)
    }

    fn place(bookings: &[Booking], code: Option<&str>) -> PlaceOrder {
        PlaceOrder {
            email: guest::Email::new("jane@example.com").unwrap(),
            booking_ids: bookings.iter().map(|b| b.id).collect(),
            voucher_code: code.map(|c| voucher::Code::new(c).unwrap()),
        }
    }

    #[tokio::test]
    async fn sums_bookings_and_applies_voucher() {
        let voucher = fixture::voucher("SUMMER", 10);
        let (db, bookings) = prepare(Some(voucher.clone()));
        let svc = mock::service(&db, &Recorder::default());

        let order = svc
            .execute(place(&bookings, Some("SUMMER")))
            .await
            .unwrap();

        assert_eq!(order.subtotal, fixture::usd(1000));
        assert_eq!(order.discount, fixture::usd(100));
        assert_eq!(order.total, fixture::usd(900));
        assert_eq!(order.voucher_id, Some(voucher.id));

        let state = db.state();
        assert_eq!(state.vouchers[&voucher.id].redemptions, 1);
        assert!(state.orders.contains_key(&order.id));
        for b in &bookings {
            assert_eq!(state.bookings[&b.id].order_id, Some(order.id));
        }
    }

    #[tokio::test]
    async fn deduplicates_bookings() {
        let (db, bookings) = prepare(None);
        let svc = mock::service(&db, &Recorder::default());

        let twice = [bookings[0].clone(), bookings[0].clone()];
        let order = svc.execute(place(&twice, None)).await.unwrap();

        assert_eq!(order.bookings, vec![bookings[0].id]);
        assert_eq!(order.total, bookings[0].price);
    }

    #[tokio::test]
    async fn refuses_used_up_voucher() {
        let mut voucher = fixture::voucher("ONCE", 50);
        voucher.max_redemptions = Some(1);
        voucher.redemptions = 1;
        let (db, bookings) = prepare(Some(voucher));
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(place(&bookings, Some("ONCE")))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::VoucherNotRedeemable(_)),
            "unexpected error: {err}",
        );
        let state = db.state();
        assert!(state.orders.is_empty());
        assert!(state.bookings.values().all(|b| b.order_id.is_none()));
    }

    #[tokio::test]
    async fn refuses_booking_of_another_order() {
        let (db, bookings) = prepare(None);
        let svc = mock::service(&db, &Recorder::default());

        let taken = bookings[0].id;
        let _ = svc.execute(place(&bookings[..1], None)).await.unwrap();
        let err = svc
            .execute(place(&bookings, None))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::BookingInOrder(id) if id == taken),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().orders.len(), 1);
    }

    #[tokio::test]
    async fn refuses_mixed_currencies() {
        let (db, mut bookings) = prepare(None);
        bookings[1].price = Money {
            amount: Decimal::from(100),
            currency: Currency::Eur,
        };
        let _ = db
            .state()
            .bookings
            .insert(bookings[1].id, bookings[1].clone());
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(place(&bookings, None))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::CurrencyMismatch(_)),
            "unexpected error: {err}",
        );
    }

    #[tokio::test]
    async fn refuses_overflowing_subtotal() {
        let (db, mut bookings) = prepare(None);
        for b in &mut bookings {
            b.price.amount = Decimal::MAX;
            let _ = db.state().bookings.insert(b.id, b.clone());
        }
        let svc = mock::service(&db, &Recorder::default());

        let err = svc
            .execute(place(&bookings, None))
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::SubtotalOverflow),
            "unexpected error: {err}",
        );
        assert!(db.state().orders.is_empty());
    }

    #[tokio::test]
    async fn refuses_empty_order() {
        let (db, _) = prepare(None);
        let svc = mock::service(&db, &Recorder::default());

        let err =
            svc.execute(place(&[], None)).await.unwrap_err().into_inner();

        assert!(
            matches!(err, ExecutionError::NoBookings),
            "unexpected error: {err}",
        );
    }
}
