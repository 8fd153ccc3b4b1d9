//! [`Vacation`]-related definitions.

use std::future;

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A vacation.
#[derive(Clone, Debug)]
pub struct Vacation {
    /// ID of this [`Vacation`].
    id: Id,

    /// Underlying [`domain::Vacation`].
    vacation: OnceCell<domain::Vacation>,
}

impl From<domain::Vacation> for Vacation {
    fn from(vacation: domain::Vacation) -> Self {
        Self {
            id: vacation.id.into(),
            vacation: OnceCell::new_with(Some(vacation)),
        }
    }
}

impl Vacation {
    /// Creates a new [`Vacation`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Vacation`] with the provided ID exists,
    /// otherwise accessing this [`Vacation`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            vacation: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Vacation`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Vacation`] doesn't exist.
    async fn vacation(
        &self,
        ctx: &Context,
    ) -> Result<&domain::Vacation, Error> {
        let id = self.id.into();
        self.vacation
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::vacation::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|v| {
                        future::ready(v.ok_or_else(|| {
                            api::query::VacationError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A vacation offered to guests: a stay at a `Lodging` in an `Area`, sold
/// as `Package`s.
#[graphql_object(context = Context)]
impl Vacation {
    /// Unique identifier of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// `Area` this `Vacation` takes place in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.area",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn area(&self, ctx: &Context) -> Result<api::Area, Error> {
        let area_id = self.vacation(ctx).await?.area_id;
        #[expect(
            unsafe_code,
            reason = "`Vacation` cannot reference a non-existent `Area`"
        )]
        let area = unsafe { api::Area::new_unchecked(area_id) };
        Ok(area)
    }

    /// `Lodging` guests of this `Vacation` stay at.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.lodging",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn lodging(
        &self,
        ctx: &Context,
    ) -> Result<api::Lodging, Error> {
        let lodging_id = self.vacation(ctx).await?.lodging_id;
        #[expect(
            unsafe_code,
            reason = "`Vacation` cannot reference a non-existent `Lodging`"
        )]
        let lodging = unsafe { api::Lodging::new_unchecked(lodging_id) };
        Ok(lodging)
    }

    /// Title of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.title",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn title(&self, ctx: &Context) -> Result<Title, Error> {
        Ok(self.vacation(ctx).await?.title.clone().into())
    }

    /// Summary of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.summary",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn summary(
        &self,
        ctx: &Context,
    ) -> Result<Option<Summary>, Error> {
        Ok(self.vacation(ctx).await?.summary.clone().map(Into::into))
    }

    /// Status of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn status(&self, ctx: &Context) -> Result<Status, Error> {
        Ok(self.vacation(ctx).await?.status.into())
    }

    /// Indicator whether this `Vacation` is featured.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.isFeatured",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn is_featured(&self, ctx: &Context) -> Result<bool, Error> {
        Ok(self.vacation(ctx).await?.is_featured)
    }

    /// `Package`s of this `Vacation`, the cheapest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.packages",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn packages(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Package>, Error> {
        ctx.service()
            .execute(query::packages::ByVacation::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|packages| packages.into_iter().map(Into::into).collect())
    }

    /// `Template`s attached to this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.templates",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn templates(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Template>, Error> {
        ctx.service()
            .execute(query::vacation::Templates::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|templates| templates.into_iter().map(Into::into).collect())
    }

    /// `Media` of this `Vacation`, ordered by their positions.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.media",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn media(&self, ctx: &Context) -> Result<Vec<api::Media>, Error> {
        api::media::of(domain::media::Owner::Vacation(self.id.into()), ctx)
            .await
    }

    /// Approved `Review`s of this `Vacation`, the newest first.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.reviews",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn reviews(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Review>, Error> {
        ctx.service()
            .execute(query::reviews::ByVacation::by(self.id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|reviews| reviews.into_iter().map(Into::into).collect())
    }

    /// Summary of the approved `Review`s of this `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.reviewSummary",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn review_summary(
        &self,
        ctx: &Context,
    ) -> Result<api::review::Summary, Error> {
        ctx.service()
            .execute(query::reviews::Summary {
                vacation_id: self.id.into(),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// `DateTime` when this `Vacation` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.vacation(ctx).await?.created_at.coerce())
    }

    /// `DateTime` when this `Vacation` was updated the last time.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Vacation.updatedAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn updated_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.vacation(ctx).await?.updated_at.coerce())
    }
}

/// Unique identifier of a `Vacation`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::vacation::Id)]
#[into(domain::vacation::Id)]
#[graphql(name = "VacationId", transparent)]
pub struct Id(Uuid);

/// Title of a `Vacation`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "VacationTitle",
    with = scalar::Via::<domain::vacation::Title>,
)]
pub struct Title(domain::vacation::Title);

/// Summary of a `Vacation`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "VacationSummary",
    with = scalar::Via::<domain::vacation::Summary>,
)]
pub struct Summary(domain::vacation::Summary);

/// Status of a `Vacation`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "VacationStatus")]
pub enum Status {
    /// Being prepared, hidden from guests.
    Draft,

    /// Visible to guests and bookable.
    Published,

    /// No longer offered.
    Archived,
}

impl From<domain::vacation::Status> for Status {
    fn from(status: domain::vacation::Status) -> Self {
        use domain::vacation::Status as S;
        match status {
            S::Draft => Self::Draft,
            S::Published => Self::Published,
            S::Archived => Self::Archived,
        }
    }
}

impl From<Status> for domain::vacation::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => Self::Draft,
            Status::Published => Self::Published,
            Status::Archived => Self::Archived,
        }
    }
}

pub mod list {
    //! Definitions related to the [`Vacation`] list.

    use derive_more::{AsRef, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::{query, read, Query as _};

    use super::{Id, Vacation};
    use crate::{api::scalar, AsError, Context, Error};

    /// Cursor for the `Vacation` list.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::vacation::list::Cursor)]
    #[graphql(
        name = "VacationListCursor",
        with = scalar::Via::<read::vacation::list::Cursor>,
    )]
    pub struct Cursor(pub read::vacation::list::Cursor);

    /// Edge in the [`Vacation`] list.
    #[derive(Clone, Copy, Debug, From, Into)]
    pub struct Edge(read::vacation::list::Edge);

    /// Edge in the `Vacation` list.
    #[graphql_object(name = "VacationListEdge", context = Context)]
    impl Edge {
        /// Cursor of this `VacationListEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Node of this `VacationListEdge`.
        #[must_use]
        pub fn node(&self) -> Vacation {
            #[expect(
                unsafe_code,
                reason = "`Edge` loaded from repository guarantees \
                          `Vacation` existence"
            )]
            unsafe {
                Vacation::new_unchecked(self.0.node)
            }
        }
    }

    /// Connection of the [`Vacation`] list.
    #[derive(Clone, Debug)]
    pub struct Connection {
        /// Underlying [`read::vacation::list::Connection`].
        connection: read::vacation::list::Connection,

        /// [`read::vacation::list::Filter`] the [`Connection`] was fetched
        /// with.
        filter: read::vacation::list::Filter,
    }

    impl Connection {
        /// Wraps the provided [`read::vacation::list::Connection`] fetched
        /// with the provided [`read::vacation::list::Filter`].
        #[must_use]
        pub fn new(
            connection: read::vacation::list::Connection,
            filter: read::vacation::list::Filter,
        ) -> Self {
            Self { connection, filter }
        }
    }

    /// Connection of the `Vacation` list.
    #[graphql_object(name = "VacationListConnection", context = Context)]
    impl Connection {
        /// Edges of this `VacationListConnection`.
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
                filter: self.filter,
            }
        }
    }

    /// Information about a [`Connection`] page.
    #[derive(Clone, Copy, Debug)]
    pub struct PageInfo {
        /// Underlying [`read::vacation::list::PageInfo`].
        info: read::vacation::list::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,

        /// [`read::vacation::list::Filter`] to count the total items with.
        filter: read::vacation::list::Filter,
    }

    /// Information about a `VacationListConnection` page.
    #[graphql_object(name = "VacationListPageInfo", context = Context)]
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

        /// Total count of `Vacation`s matching the filter.
        pub async fn total_count(&self, ctx: &Context) -> Result<i32, Error> {
            ctx.service()
                .execute(query::vacations::TotalCount::by(self.filter))
                .await
                .map_err(AsError::into_error)
                .map_err(ctx.error())
                .map(Into::into)
        }
    }
}

pub mod search {
    //! Definitions related to the [`Vacation`] search.

    use common::Money;
    use derive_more::{AsRef, Display, From, Into};
    use juniper::{graphql_object, GraphQLScalar};
    use service::read;

    use super::{Id, Vacation};
    use crate::{api::scalar, Context};

    /// Keyword to search `Vacation`s by.
    #[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
    #[graphql(
        name = "VacationSearchKeyword",
        with = scalar::Via::<read::vacation::search::Keyword>,
    )]
    pub struct Keyword(read::vacation::search::Keyword);

    /// Cursor for the `Vacation` search results.
    #[derive(AsRef, Clone, Copy, Debug, From, GraphQLScalar, Into)]
    #[from(Id, read::vacation::search::Cursor)]
    #[graphql(
        name = "VacationSearchCursor",
        with = scalar::Via::<read::vacation::search::Cursor>,
    )]
    pub struct Cursor(pub read::vacation::search::Cursor);

    /// Edge in the [`Vacation`] search results.
    #[derive(Clone, Debug, From, Into)]
    pub struct Edge(read::vacation::search::Edge);

    /// Edge in the `Vacation` search results.
    #[graphql_object(name = "VacationSearchEdge", context = Context)]
    impl Edge {
        /// Cursor of this `VacationSearchEdge`.
        #[must_use]
        pub fn cursor(&self) -> Cursor {
            self.0.cursor.into()
        }

        /// Found `Vacation`.
        #[must_use]
        pub fn node(&self) -> Vacation {
            self.0.node.vacation.clone().into()
        }

        /// Lowest price among the `Package`s of the found `Vacation` matching
        /// the search.
        #[must_use]
        pub fn lowest_price(&self) -> Money {
            self.0.node.lowest_price
        }
    }

    /// Connection of the [`Vacation`] search results.
    #[derive(Clone, Debug, From, Into)]
    pub struct Connection(read::vacation::search::Connection);

    /// Connection of the `Vacation` search results.
    #[graphql_object(name = "VacationSearchConnection", context = Context)]
    impl Connection {
        /// Edges of this `VacationSearchConnection`.
        #[must_use]
        pub fn edges(&self) -> Vec<Edge> {
            self.0.edges.iter().cloned().map(Into::into).collect()
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
        /// Underlying [`read::vacation::search::PageInfo`].
        info: read::vacation::search::PageInfo,

        /// Start cursor of the page.
        start_cursor: Option<Cursor>,

        /// End cursor of the page.
        end_cursor: Option<Cursor>,
    }

    /// Information about a `VacationSearchConnection` page.
    #[graphql_object(name = "VacationSearchPageInfo", context = Context)]
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
