//! [`Lodging`]-related definitions.

use std::future;

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A lodging.
#[derive(Clone, Debug)]
pub struct Lodging {
    /// ID of this [`Lodging`].
    id: Id,

    /// Underlying [`domain::Lodging`].
    lodging: OnceCell<domain::Lodging>,
}

impl From<domain::Lodging> for Lodging {
    fn from(lodging: domain::Lodging) -> Self {
        Self {
            id: lodging.id.into(),
            lodging: OnceCell::new_with(Some(lodging)),
        }
    }
}

impl Lodging {
    /// Creates a new [`Lodging`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Lodging`] with the provided ID exists,
    /// otherwise accessing this [`Lodging`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            lodging: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Lodging`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Lodging`] doesn't exist.
    async fn lodging(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Lodging, Error> {
        let id = self.id.into();
        self.lodging
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::lodging::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|l| {
                        future::ready(l.ok_or_else(|| {
                            api::query::LodgingError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A lodging, like a hotel or a villa, guests stay at.
#[graphql_object(context = Context)]
impl Lodging {
    /// Unique identifier of this `Lodging`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// `Area` this `Lodging` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.area",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn area(&self, ctx: &Context) -> Result<api::Area, Error> {
        let area_id = self.lodging(ctx).await?.area_id;
        #[expect(
            unsafe_code,
            reason = "`Lodging` cannot reference a non-existent `Area`"
        )]
        let area = unsafe { api::Area::new_unchecked(area_id) };
        Ok(area)
    }

    /// Name of this `Lodging`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn name(&self, ctx: &Context) -> Result<Name, Error> {
        Ok(self.lodging(ctx).await?.name.clone().into())
    }

    /// Kind of this `Lodging`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.kind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn kind(&self, ctx: &Context) -> Result<Kind, Error> {
        Ok(self.lodging(ctx).await?.kind.into())
    }

    /// Address of this `Lodging`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.address",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn address(&self, ctx: &Context) -> Result<Address, Error> {
        Ok(self.lodging(ctx).await?.address.clone().into())
    }

    /// Description of this `Lodging`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn description(
        &self,
        ctx: &Context,
    ) -> Result<Option<Description>, Error> {
        Ok(self.lodging(ctx).await?.description.clone().map(Into::into))
    }

    /// Star rating of this `Lodging`, from 1 to 5.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.stars",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn stars(&self, ctx: &Context) -> Result<Option<i32>, Error> {
        Ok(self.lodging(ctx).await?.stars.map(|s| s.get().into()))
    }

    /// `Room`s of this `Lodging`, ordered by their names.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.rooms",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn rooms(&self, ctx: &Context) -> Result<Vec<api::Room>, Error> {
        ctx.service()
            .execute(query::rooms::ByLodging::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rooms| rooms.into_iter().map(Into::into).collect())
    }

    /// `Room`s of this `Lodging` fitting the provided number of `guests`, the
    /// cheapest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.availableRooms",
            guests = %guests,
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn available_rooms(
        &self,
        guests: i32,
        ctx: &Context,
    ) -> Result<Vec<api::Room>, Error> {
        let guests = u16::try_from(guests)
            .map_err(|_| api::InputError::Number.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::rooms::Available {
                lodging_id: self.id.into(),
                guests,
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|rooms| rooms.into_iter().map(Into::into).collect())
    }

    /// `Media` of this `Lodging`, ordered by their positions.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.media",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn media(&self, ctx: &Context) -> Result<Vec<api::Media>, Error> {
        api::media::of(domain::media::Owner::Lodging(self.id.into()), ctx)
            .await
    }

    /// `DateTime` when this `Lodging` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Lodging.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.lodging(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of a `Lodging`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::lodging::Id)]
#[into(domain::lodging::Id)]
#[graphql(name = "LodgingId", transparent)]
pub struct Id(Uuid);

/// Name of a `Lodging`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "LodgingName", with = scalar::Via::<domain::lodging::Name>)]
pub struct Name(domain::lodging::Name);

/// Address of a `Lodging`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "LodgingAddress",
    with = scalar::Via::<domain::lodging::Address>,
)]
pub struct Address(domain::lodging::Address);

/// Description of a `Lodging`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "LodgingDescription",
    with = scalar::Via::<domain::lodging::Description>,
)]
pub struct Description(domain::lodging::Description);

/// Kind of a `Lodging`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "LodgingKind")]
pub enum Kind {
    /// A hotel.
    Hotel,

    /// A resort.
    Resort,

    /// An apartment.
    Apartment,

    /// A villa.
    Villa,

    /// A hostel.
    Hostel,
}

impl From<domain::lodging::Kind> for Kind {
    fn from(kind: domain::lodging::Kind) -> Self {
        use domain::lodging::Kind as K;
        match kind {
            K::Hotel => Self::Hotel,
            K::Resort => Self::Resort,
            K::Apartment => Self::Apartment,
            K::Villa => Self::Villa,
            K::Hostel => Self::Hostel,
        }
    }
}

impl From<Kind> for domain::lodging::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Hotel => Self::Hotel,
            Kind::Resort => Self::Resort,
            Kind::Apartment => Self::Apartment,
            Kind::Villa => Self::Villa,
            Kind::Hostel => Self::Hostel,
        }
    }
}

/// Parses the GraphQL star rating into [`domain::lodging::Stars`].
///
/// # Errors
///
/// Errors if the `stars` are out of `1..=5` range.
pub(crate) fn stars(stars: i32) -> Result<domain::lodging::Stars, Error> {
    u8::try_from(stars)
        .ok()
        .and_then(domain::lodging::Stars::new)
        .ok_or_else(|| api::InputError::Stars.into())
}

pub mod list {
    //! Definitions related to the [`Lodging`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::{query, read, Query as _};

    use super::{Id, Lodging};
    use crate::{api::scalar, AsError, Context, Error};

    /// Cursor for the `Lodging` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::lodging::list::Cursor)]
    #[graphql(
        name = "LodgingListCursor",
        with = scalar::Via::<read::lodging::list::Cursor>,
    )]
    pub struct Cursor(pub read::lodging::list::Cursor);

    /// Edge in the [`Lodging`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::lodging::list::Edge);

    /// Edge in the `Lodging` list.
    #[graphql_object(name = "LodgingListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `LodgingListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `LodgingListEdge`.
        #[must_use]
        pub fn node(&self) -> Lodging {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees \
                          `Lodging` existence"
            )]
            unsafe {
                Lodging::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`Lodging`] list.
    #[derive(Clone, Debug)]
    pub struct Connection {
        /// Underlying [`read::lodging::list::Connection`].
        connection: read::lodging::list::Connection,

        /// [`read::lodging::list::Filter`] the [`Connection`] was fetched
        /// with.
        filter: read::lodging::list::Filter,
    }

    impl Connection {
        /// Wraps the provided [`read::lodging::list::Connection`] fetched with
        /// the provided [`read::lodging::list::Filter`].
        #[must_use]
        pub fn new(
            connection: read::lodging::list::Connection,
            filter: read::lodging::list::Filter,
        ) -> Self {
            Self { connection, filter }
        }
    }

    /// Connection of the `Lodging` list.
    #[graphql_object(name = "LodgingListConnection", context = Context)]
    impl Connection {
        /// Edges of this `LodgingListConnection`.
        #[must_use]
        pub fn edges(&self) -> Vec<Edge> {
            self.connection
                .edges
                .iter()
                .copied()
                .map(Into::into)
                .collect()
        }

        /// Information about the page.
        #[must_use]
        pub fn page_info(&self) -> PageInfo {
            PageInfo {
                info: self.connection.page_info(),
                start_cursor: self
                    .connection
                    .edges
                    .first()
                    .map(|e| e.cursor.into()),
                end_cursor: self
                    .connection
                    .edges
                    .last()
                    .map(|e| e.cursor.into()),
                filter: self.filter.clone(),
            }
        }
    }

    /// Information about a [`Connection`] page.
    #[derive(Clone, Debug)]
    pub struct PageInfo {
        /// Underlying [`read::lodging::list::PageInfo`].
        info: read::lodging::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,

        /// [`read::lodging::list::Filter`] to count the total items with.
        filter: read::lodging::list::Filter,
    }

    /// Information about a `LodgingListConnection` page.
    #[graphql_object(name = "LodgingListPageInfo", context = Context)]
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

        /// Total count of `Lodging`s matching the filter.
        pub async fn total_count(&self, ctx: &Context) -> Result<i32, Error> {
            ctx.service()
                .execute(query::lodgings::TotalCount::by(self.filter.clone()))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(Into::into)
        }
    }
}
