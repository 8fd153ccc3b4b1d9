//! [`ExpirePendingBookings`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{
    By, Commit, Lock, Perform, Select, Start, Transact, Transacted, Update,
};
use smart_default::SmartDefault;
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{booking, Booking},
    infra::{database, Database},
    Service,
};

use super::Task;

/// Configuration for [`ExpirePendingBookings`] [`Task`].
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Interval between checks for stale [`Booking`]s.
    #[default(time::Duration::from_secs(60))]
    pub interval: time::Duration,

    /// Timeout after which a pending [`Booking`] is considered abandoned.
    #[default(time::Duration::from_secs(30 * 60))]
    pub timeout: time::Duration,
}

/// [`Task`] for cancelling [`Booking`]s left pending for too long.
///
/// [`Booking`]s already included into an [`Order`] are left untouched, as
/// they are cancelled together with the [`Order`].
///
/// [`Order`]: crate::domain::Order
#[derive(Clone, Copy, Debug)]
pub struct ExpirePendingBookings<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<Db, M> Task<Start<By<ExpirePendingBookings<Self>, Config>>>
    for Service<Db, M>
where
    ExpirePendingBookings<Service<Db, M>>:
        Task<Perform<()>, Ok = usize, Err: Error> + Send + Sync + 'static,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<ExpirePendingBookings<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        let task = ExpirePendingBookings {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        loop {
            let _ = interval.tick().await;
            match task.execute(Perform(())).await {
                Ok(0) => {}
                Ok(n) => log::info!("expired {n} pending `Booking`s"),
                Err(e) => {
                    log::error!("`task::ExpirePendingBookings` failed: {e}");
                }
            }
        }
    }
}

impl<Db, M> Task<Perform<()>> for ExpirePendingBookings<Service<Db, M>>
where
    Db: Database<
            Select<By<Vec<Booking>, booking::CreationDateTime>>,
            Ok = Vec<Booking>,
            Err = Traced<database::Error>,
        > + Database<Transact, Err = Traced<database::Error>>,
    Transacted<Db>: Database<
            Lock<By<Booking, booking::Id>>,
            Ok = (),
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<Booking>, booking::Id>>,
            Ok = Option<Booking>,
            Err = Traced<database::Error>,
        > + Database<Update<Booking>, Ok = (), Err = Traced<database::Error>>
        + Database<Commit, Ok = (), Err = Traced<database::Error>>,
{
    type Ok = usize;
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        let deadline = booking::CreationDateTime::now() - self.config.timeout;
        let stale = self
            .service
            .database()
            .execute(Select(By::<Vec<Booking>, _>::new(deadline)))
            .await
            .map_err(tracerr::wrap!())?;
        if stale.is_empty() {
            return Ok(0);
        }

        let tx = self
            .service
            .database()
            .execute(Transact)
            .await
            .map_err(tracerr::wrap!())?;
        let mut count = 0;
        for id in stale.into_iter().map(|b| b.id) {
            tx.execute(Lock(By::<Booking, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?;

            // `Booking` may have been confirmed or ordered meanwhile.
            let Some(mut booking) = tx
                .execute(Select(By::<Option<Booking>, _>::new(id)))
                .await
                .map_err(tracerr::wrap!())?
                .filter(|b| {
                    b.status == booking::Status::Pending && b.order_id.is_none()
                })
            else {
                continue;
            };

            booking.status = booking::Status::Cancelled;
            tx.execute(Update(booking))
                .await
                .map_err(tracerr::wrap!())?;
            count += 1;
        }
        tx.execute(Commit).await.map_err(tracerr::wrap!())?;

        Ok(count)
    }
}

/// Error of [`ExpirePendingBookings`] execution.
pub type ExecutionError = Traced<database::Error>;

#[cfg(test)]
mod spec {
    use std::time;

    use common::operations::Perform;

    use crate::{
        domain::{booking, order, vacation},
        infra::{
            database::mock::{self, fixture, Mock, State},
            mail::mock::Recorder,
        },
    };

    use super::{Config, ExpirePendingBookings, Task as _};

    #[tokio::test]
    async fn cancels_only_abandoned_bookings() {
        let vacation = fixture::vacation(vacation::Status::Published);
        let package = fixture::package(&vacation, fixture::usd(100), 2);
        let long_ago =
            booking::CreationDateTime::now() - time::Duration::from_secs(7200);

        let mut stale = fixture::booking(&package);
        stale.created_at = long_ago;
        let mut ordered = fixture::booking(&package);
        ordered.created_at = long_ago;
        ordered.order_id = Some(order::Id::new());
        let mut confirmed = fixture::booking(&package);
        confirmed.created_at = long_ago;
        confirmed.status = booking::Status::Confirmed;
        let fresh = fixture::booking(&package);

        let db = Mock::with(State {
            bookings: [&stale, &ordered, &confirmed, &fresh]
                .map(|b| (b.id, b.clone()))
                .into(),
            ..State::default()
        });
        let task = ExpirePendingBookings {
            config: Config {
                interval: time::Duration::from_secs(1),
                timeout: time::Duration::from_secs(3600),
            },
            service: mock::service(&db, &Recorder::default()),
        };

        assert_eq!(task.execute(Perform(())).await.unwrap(), 1);

        let state = db.state();
        let status = |id: booking::Id| state.bookings[&id].status;
        assert_eq!(status(stale.id), booking::Status::Cancelled);
        assert_eq!(status(ordered.id), booking::Status::Pending);
        assert_eq!(status(confirmed.id), booking::Status::Confirmed);
        assert_eq!(status(fresh.id), booking::Status::Pending);
    }

    #[tokio::test]
    async fn does_nothing_without_stale_bookings() {
        let db = Mock::with(State::default());
        let task = ExpirePendingBookings {
            config: Config::default(),
            service: mock::service(&db, &Recorder::default()),
        };

        assert_eq!(task.execute(Perform(())).await.unwrap(), 0);
        assert_eq!(db.state().commits, 0);
    }
}
