//! [`Booking`]-related definitions.

use std::future;

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A booking.
#[derive(Clone, Debug)]
pub struct Booking {
    /// ID of this [`Booking`].
    id: Id,

    /// Underlying [`domain::Booking`].
    booking: OnceCell<domain::Booking>,
}

impl From<domain::Booking> for Booking {
    fn from(booking: domain::Booking) -> Self {
        Self {
            id: booking.id.into(),
            booking: OnceCell::new_with(Some(booking)),
        }
    }
}

impl Booking {
    /// Creates a new [`Booking`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Booking`] with the provided ID exists,
    /// otherwise accessing this [`Booking`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            booking: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Booking`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Booking`] doesn't exist.
    async fn booking(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Booking, Error> {
        let id = self.id.into();
        self.booking
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::booking::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|b| {
                        future::ready(b.ok_or_else(|| {
                            api::query::BookingError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A booking of a `Package` made by a guest.
#[graphql_object(context = Context)]
impl Booking {
    /// Unique identifier of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Booked `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.vacation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn vacation(
        &self,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        let vacation_id = self.booking(ctx).await?.vacation_id;
        #[expect(
            unsafe_code,
            reason = "`Booking` cannot reference a non-existent `Vacation`"
        )]
        let vacation = unsafe { api::Vacation::new_unchecked(vacation_id) };
        Ok(vacation)
    }

    /// Booked `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.package",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn package(
        &self,
        ctx: &Context,
    ) -> Result<api::Package, Error> {
        let package_id = self.booking(ctx).await?.package_id;
        ctx.service()
            .execute(query::package::ById::by(package_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::query::PackageError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// `Guest` this `Booking` is made for.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.guest",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn guest(&self, ctx: &Context) -> Result<Guest, Error> {
        Ok(self.booking(ctx).await?.guest.clone().into())
    }

    /// Number of adults.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.adults",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn adults(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(self.booking(ctx).await?.adults.into())
    }

    /// Number of children.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.children",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn children(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(self.booking(ctx).await?.children.into())
    }

    /// `DateTime` of the check-in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.checkIn",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn check_in(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.check_in.coerce())
    }

    /// `DateTime` of the check-out.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.checkOut",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn check_out(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.check_out())
    }

    /// Number of nights of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.nights",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn nights(&self, ctx: &Context) -> Result<i32, Error> {
        Ok(self.booking(ctx).await?.nights.get().into())
    }

    /// Price of this `Booking`, fixed when it was made.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn price(&self, ctx: &Context) -> Result<Money, Error> {
        Ok(self.booking(ctx).await?.price)
    }

    /// Status of this `Booking`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.booking(ctx).await?.status.into())
    }

    /// `Order` this `Booking` is part of.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.order",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn order(
        &self,
        ctx: &Context,
    ) -> Result<Option<api::Order>, Error> {
        let order_id = self.booking(ctx).await?.order_id;
        #[expect(
            unsafe_code,
            reason = "`Booking` cannot reference a non-existent `Order`"
        )]
        let order =
            order_id.map(|id| unsafe { api::Order::new_unchecked(id) });
        Ok(order)
    }

    /// `DateTime` when this `Booking` was made.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Booking.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.booking(ctx).await?.created_at.coerce())
    }
}

/// A guest a booking is made for.
#[derive(Clone, Debug, From, Into)]
pub struct Guest(domain::Guest);

/// A guest a `Booking` is made for.
#[graphql_object(context = Context)]
impl Guest {
    /// Full name of this `Guest`.
    #[must_use]
    pub fn name(&self) -> GuestName {
        self.0.name.clone().into()
    }

    /// Email address of this `Guest`.
    #[must_use]
    pub fn email(&self) -> Email {
        self.0.email.clone().into()
    }

    /// Phone number of this `Guest`.
    #[must_use]
    pub fn phone(&self) -> Option<Phone> {
        self.0.phone.clone().map(Into::into)
    }
}

/// Contact details of a guest to make a `Booking` for.
#[derive(Clone, Debug, GraphQLInputObject)]
#[graphql(name = "GuestInput")]
pub struct GuestInput {
    /// Full name of the guest.
    pub name: GuestName,

    /// Email address of the guest.
    pub email: Email,

    /// Phone number of the guest.
    pub phone: Option<Phone>,
}

impl From<GuestInput> for domain::Guest {
    fn from(input: GuestInput) -> Self {
        Self {
            name: input.name.into(),
            email: input.email.into(),
            phone: input.phone.map(Into::into),
        }
    }
}

/// Unique identifier of a `Booking`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::booking::Id)]
#[into(domain::booking::Id)]
#[graphql(name = "BookingId", transparent)]
pub struct Id(Uuid);

/// Full name of a `Guest`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "GuestName", with = scalar::Via::<domain::guest::Name>)]
pub struct GuestName(domain::guest::Name);

/// Email address of a `Guest`, case-insensitive.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "GuestEmail", with = scalar::Via::<domain::guest::Email>)]
pub struct Email(domain::guest::Email);

/// Phone number of a `Guest`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "GuestPhone", with = scalar::Via::<domain::guest::Phone>)]
pub struct Phone(domain::guest::Phone);

/// Status of a `Booking`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "BookingStatus")]
pub enum Status {
    /// Awaiting confirmation or payment.
    Pending,

    /// Confirmed.
    Confirmed,

    /// Cancelled.
    Cancelled,
}

impl From<domain::booking::Status> for Status {
    fn from(status: domain::booking::Status) -> Self {
        use domain::booking::Status as S;
        match status {
            S::Pending => Self::Pending,
            S::Confirmed => Self::Confirmed,
            S::Cancelled => Self::Cancelled,
        }
    }
}

impl From<Status> for domain::booking::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Pending => Self::Pending,
            Status::Confirmed => Self::Confirmed,
            Status::Cancelled => Self::Cancelled,
        }
    }
}

pub mod list {
    //! Definitions related to the [`Booking`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::read;

    use super::{Booking, Id};
    use crate::{api::scalar, Context};

    /// Cursor for the `Booking` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::booking::list::Cursor)]
    #[graphql(
        name = "BookingListCursor",
        with = scalar::Via::<read::booking::list::Cursor>,
    )]
    pub struct Cursor(pub read::booking::list::Cursor);

    /// Edge in the [`Booking`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::booking::list::Edge);

    /// Edge in the `Booking` list.
    #[graphql_object(name = "BookingListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `BookingListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `BookingListEdge`.
        #[must_use]
        pub fn node(&self) -> Booking {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees \
                          `Booking` existence"
            )]
            unsafe {
                Booking::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`Booking`] list.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::booking::list::Connection);

    /// Connection of the `Booking` list.
    #[graphql_object(name = "BookingListConnection", context = Context)]
    impl Connection {
        /// Edges of this `BookingListConnection`.
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
        /// Underlying [`read::booking::list::PageInfo`].
        info: read::booking::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,
    }

    /// Information about a `BookingListConnection` page.
    #[graphql_object(name = "BookingListPageInfo", context = Context)]
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
