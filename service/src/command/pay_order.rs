//! [`Command`] for paying an [`Order`].

use std::collections::HashMap;

use common::{
    operations::{
        By, Commit, Deliver, Lock, Select, Transact, Transacted, Update,
    },
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{booking, order, Booking, Order},
    infra::{
        database,
        mail::{self, Mail},
        Database, Mailer,
    },
    Service,
};

use super::Command;

/// [`Command`] for marking a [`order::Status::Pending`] [`Order`] as paid.
///
/// All the [`Booking`]s of the [`Order`] become confirmed, and the
/// confirmation [`Mail`] is sent once everything is persisted.
#[derive(Clone, Copy, Debug)]
pub struct PayOrder {
    /// ID of the [`Order`] to pay.
    pub order_id: order::Id,
}

impl<Db, M> Command<PayOrder> for Service<Db, M>
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
        > + Database<Update<Booking>, Ok = (), Err = Traced<database::Error>>
        + Database<Update<Order>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
    M: Mailer<Deliver<Mail>, Ok = (), Err = Traced<mail::Error>>,
{
    type Ok = Order;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: PayOrder) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PayOrder { order_id } = cmd;

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
        if order.status != order::Status::Pending {
            return Err(tracerr::new!(E::OrderNotPending(order_id)));
        }

        let bookings = tx
            .execute(Select(By::<HashMap<_, Booking>, _>::new(
                order.bookings.clone(),
            )))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        for mut booking in bookings.into_values() {
            booking.status = booking::Status::Confirmed;
            tx.execute(Update(booking))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?;
        }

        order.status = order::Status::Paid;
        order.paid_at = Some(DateTime::now().coerce());
        tx.execute(Update(order.clone()))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        tx.execute(Commit)
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        self.mailer()
            .execute(Deliver(confirmation(&order)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        Ok(order)
    }
}

/// Composes a [`Mail`] confirming payment of the provided [`Order`].
pub(crate) fn confirmation(order: &Order) -> Mail {
    let bookings = order
        .bookings
        .iter()
        .map(|id| format!("- {id}\n"))
        .collect::<String>();
    Mail {
        to: order.email.clone(),
        subject: format!("Your order {} is paid", order.id),
        body: format!(
            "Thank you!\n\n\
             Your order {} is paid and the following bookings are \
             confirmed:\n{bookings}\n\
             Subtotal: {}\n\
             Discount: {}\n\
             Total: {}\n",
            order.id, order.subtotal, order.discount, order.total,
        ),
    }
}

/// Error of [`PayOrder`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Mailer`] error.
    ///
    /// The [`Order`] stays paid.
    #[display("`Mailer` operation failed: {_0}")]
    Mail(mail::Error),

    /// [`Order`] doesn't exist.
    #[display("`Order(id: {_0})` does not exist")]
    #[from(ignore)]
    OrderNotExists(#[error(not(source))] order::Id),

    /// [`Order`] isn't pending.
    #[display("`Order(id: {_0})` is not pending")]
    #[from(ignore)]
    OrderNotPending(#[error(not(source))] order::Id),
}

#[cfg(test)]
mod spec {
    use crate::{
        command::PlaceOrder,
        domain::{booking, guest, order, vacation, Order},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Command as _, ExecutionError, PayOrder};

    async fn placed(db: &Mock) -> Order {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(400), 2);
        let booking = fixture::booking(&package);
        let _ = db.state().bookings.insert(booking.id, booking.clone());

        mock::service(db, &Recorder::default())
            .execute(PlaceOrder {
                email: guest::Email::new("jane@example.com").unwrap(),
                booking_ids: vec![booking.id],
                voucher_code: None,
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn confirms_bookings_and_sends_mail() {
        let db = Mock::with(State::default());
        let order = placed(&db).await;
        let mailer = Recorder::default();
        let svc = mock::service(&db, &mailer);

        let paid = svc
            .execute(PayOrder { order_id: order.id })
            .await
            .unwrap();

        assert_eq!(paid.status, order::Status::Paid);
        assert!(paid.paid_at.is_some());
        let state = db.state();
        assert_eq!(state.orders[&order.id].status, order::Status::Paid);
        assert!(state
            .bookings
            .values()
            .all(|b| b.status == booking::Status::Confirmed));

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, order.email);
        assert!(sent[0].body.contains(&order.bookings[0].to_string()));
    }

    #[tokio::test]
    async fn refuses_paying_twice() {
        let db = Mock::with(State::default());
        let order = placed(&db).await;
        let svc = mock::service(&db, &Recorder::default());

        let _ = svc.execute(PayOrder { order_id: order.id }).await.unwrap();
        let err = svc
            .execute(PayOrder { order_id: order.id })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::OrderNotPending(_)),
            "unexpected error: {err}",
        );
    }

    #[tokio::test]
    async fn keeps_payment_when_mail_fails() {
        let db = Mock::with(State::default());
        let order = placed(&db).await;
        let svc = mock::service(&db, &Recorder::failing());

        let err = svc
            .execute(PayOrder { order_id: order.id })
            .await
            .unwrap_err()
            .into_inner();

        assert!(
            matches!(err, ExecutionError::Mail(_)),
            "unexpected error: {err}",
        );
        assert_eq!(db.state().orders[&order.id].status, order::Status::Paid);
    }
}
