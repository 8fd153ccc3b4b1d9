//! [`Order`]-related definitions.

use std::future;

use common::{DateTime, Money};
use derive_more::{Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, AsError, Context, Error};

/// An order.
#[derive(Clone, Debug)]
pub struct Order {
    /// ID of this [`Order`].
    id: Id,

    /// Underlying [`domain::Order`].
    order: OnceCell<domain::Order>,
}

impl From<domain::Order> for Order {
    fn from(order: domain::Order) -> Self {
        Self {
            id: order.id.into(),
            order: OnceCell::new_with(Some(order)),
        }
    }
}

impl Order {
    /// Creates a new [`Order`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Order`] with the provided ID exists,
    /// otherwise accessing this [`Order`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            order: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Order`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Order`] doesn't exist.
    async fn order(&self, ctx: &Context) -> Result<&domain::Order, Error> {
        let id = self.id.into();
        self.order
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::order::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|o| {
                        future::ready(o.ok_or_else(|| {
                            api::query::OrderError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// An order paying for one or more `Booking`s at once.
#[graphql_object(context = Context)]
impl Order {
    /// Unique identifier of this `Order`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Email address this `Order` was placed with.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.email",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn email(
        &self,
        ctx: &Context,
    ) -> Result<api::booking::Email, Error> {
        Ok(self.order(ctx).await?.email.clone().into())
    }

    /// `Booking`s of this `Order`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.bookings",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn bookings(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Booking>, Error> {
        let ids = self.order(ctx).await?.bookings.clone();
        let mut bookings = ctx
            .service()
            .execute(query::bookings::ByIds::by(ids.clone()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        Ok(ids
            .into_iter()
            .filter_map(|id| bookings.remove(&id))
            .map(Into::into)
            .collect())
    }

    /// `Voucher` redeemed by this `Order`, if any.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.voucher",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn voucher(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::Voucher>, Error> {
        let Some(voucher_id) = self.order(ctx).await?.voucher_id else {
            return Ok(None);
        };

        ctx.service()
            .execute(query::voucher::ById::by(voucher_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|v| v.map(Into::into))
    }

    /// Sum of the `Booking` prices.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.subtotal",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn subtotal(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.order(ctx).await?.subtotal)
    }

    /// Discount granted by the `Voucher`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.discount",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn discount(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.order(ctx).await?.discount)
    }

    /// Amount to be paid.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.total",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn total(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.order(ctx).await?.total)
    }

    /// Status of this `Order`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.order(ctx).await?.status.into())
    }

    /// `DateTime` when this `Order` was placed.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.order(ctx).await?.created_at.coerce())
    }

    /// `DateTime` when this `Order` was paid.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Order.paidAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn paid_at(
        &self,
        ctx: &Context,
    ) -> Result<Option<DateTime>, Error> {
        Ok(self.order(ctx).await?.paid_at.map(|at| at.coerce()))
    }
}

/// Unique identifier of an `Order`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::order::Id)]
#[into(domain::order::Id)]
#[graphql(name = "OrderId", transparent)]
pub struct Id(Uuid);

/// Status of an `Order`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "OrderStatus")]
pub enum Status {
    /// Awaiting payment.
    Pending,

    /// Paid.
    Paid,

    /// Cancelled.
    Cancelled,
}

impl From<domain::order::Status> for Status {
    fn from(status: domain::order::Status) -> Self {
        use domain::order::Status as S;
        match status {
            S::Pending => Self::Pending,
            S::Paid => Self::Paid,
            S::Cancelled => Self::Cancelled,
        }
    }
}

impl From<Status> for domain::order::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => Self::Pending,
            Status::Paid => Self::Paid,
            Status::Cancelled => Self::Cancelled,
        }
    }
}

pub mod list {
    //! Definitions related to the [`Order`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::read;

    use super::{Id, Order};
    use crate::{api::scalar, Context};

    /// Cursor for the `Order` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::order::list::Cursor)]
    #[graphql(
        name = "OrderListCursor",
        with = scalar::Via::<read::order::list::Cursor>,
    )]
    pub struct Cursor(pub read::order::list::Cursor);

    /// Edge in the [`Order`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::order::list::Edge);

    /// Edge in the `Order` list.
    #[graphql_object(name = "OrderListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `OrderListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `OrderListEdge`.
        #[must_use]
        pub fn node(&self) -> Order {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees \
                          `Order` existence"
            )]
            unsafe {
                Order::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`Order`] list.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::order::list::Connection);

    /// Connection of the `Order` list.
    #[graphql_object(name = "OrderListConnection", context = Context)]
    impl Connection {
        /// Edges of this `OrderListConnection`.
        #[must_use]
        pub fn edges(&self) -> Vec<Edge> {
            self.0.edges.iter().copied().map(Into::into).collect()
        }

        /// Information about the page.
        #[must_use]
        pub fn page_info(&self) -> PageInfo {
            PageInfo {
                info: self.0.page_info(),
                start_cursor: self.0.edges.first().map(|e| e.cursor.into()),
                end_cursor: self.0.edges.last().map(|e| e.cursor.into()),
            }
        }
    }

    /// Information about a [`Connection`] page.
    #[derive(Clone, Copy, Debug)]
    pub struct PageInfo {
        /// Underlying [`read::order::list::PageInfo`].
        info: read::order::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,
    }

    /// Information about an `OrderListConnection` page.
    #[graphql_object(name = "OrderListPageInfo", context = Context)]
    impl PageInfo {
        /// Indicator whether there is a next page.
        #[must_use]
        pub fn has_next_page(&self) -> bool {
            self.info.has_next_page
        }

        /// Indicator whether there is a previous page.
        #[must_use]
        pub fn has_previous_page(&self) -> bool {
            self.info.has_previous_page
        }

        /// Start cursor of the page.
        #[must_use]
        pub fn start_cursor(&self) -> &Option<Cursor> {
            &self.start_cursor
        }

        /// End cursor of the page.
        #[must_use]
        pub fn end_cursor(&self) -> &Option<Cursor> {
            &self.end_cursor
        }
    }
}
