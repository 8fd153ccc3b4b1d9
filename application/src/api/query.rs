//! GraphQL [`Query`]s definitions.

use common::Money;
use juniper::graphql_object;
use service::{query, read, Query as _};

use crate::{api, define_error, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `Amenity` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMENITY_NOT_EXISTS` - the `Amenity` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "amenity",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn amenity(
        id: api::amenity::Id,
        ctx: &Context,
    ) -> Result<api::Amenity, Error> {
        ctx.service()
            .execute(query::amenity::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| AmenityError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns all the `Amenity`s, ordered by their names.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "amenities",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn amenities(ctx: &Context) -> Result<Vec<api::Amenity>, Error> {
        ctx.service()
            .execute(query::amenities::All::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|all| all.into_iter().map(Into::into).collect())
    }

    /// Returns the `Area` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AREA_NOT_EXISTS` - the `Area` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "area",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn area(
        id: api::area::Id,
        ctx: &Context,
    ) -> Result<api::Area, Error> {
        ctx.service()
            .execute(query::area::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| AreaError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns all the `Area`s, ordered by their names, optionally located
    /// in the specified `country`.
    #[tracing::instrument(
        skip_all,
        fields(
            country = ?country.as_ref().map(ToString::to_string),
            gql.name = "areas",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn areas(
        country: Option<api::area::Country>,
        ctx: &Context,
    ) -> Result<Vec<api::Area>, Error> {
        ctx.service()
            .execute(query::areas::All {
                country: country.map(Into::into),
            })
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|all| all.into_iter().map(Into::into).collect())
    }

    /// Returns the `Lodging` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `LODGING_NOT_EXISTS` - the `Lodging` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "lodging",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn lodging(
        id: api::lodging::Id,
        ctx: &Context,
    ) -> Result<api::Lodging, Error> {
        ctx.service()
            .execute(query::lodging::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| LodgingError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Lodging`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///   ambiguous.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            area_id = ?area_id,
            before = ?before,
            first = ?first,
            gql.name = "lodgings",
            last = ?last,
            name = ?name.as_ref().map(ToString::to_string),
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn lodgings(
        first: Option<i32>,
        after: Option<api::lodging::list::Cursor>,
        last: Option<i32>,
        before: Option<api::lodging::list::Cursor>,
        area_id: Option<api::area::Id>,
        name: Option<api::lodging::Name>,
        ctx: &Context,
    ) -> Result<api::lodging::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        let filter = read::lodging::list::Filter {
            area_id: area_id.map(Into::into),
            name: name.map(Into::into),
        };
        ctx.service()
            .execute(query::lodgings::List::by(
                read::lodging::list::Selector {
                    arguments: read::lodging::list::Arguments::new(
                        first,
                        after.map(Into::into),
                        last,
                        before.map(Into::into),
                        DEFAULT_PAGE_SIZE,
                    )
                    .ok_or_else(|| api::PaginationError::Ambiguous.into())
                    .map_err(ctx.error())?,
                    filter: filter.clone(),
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|conn| api::lodging::list::Connection::new(conn, filter))
    }

    /// Returns the `Room` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ROOM_NOT_EXISTS` - the `Room` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "room",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn room(
        id: api::room::Id,
        ctx: &Context,
    ) -> Result<api::Room, Error> {
        ctx.service()
            .execute(query::room::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| RoomError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Vacation` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VACATION_NOT_EXISTS` - the `Vacation` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "vacation",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn vacation(
        id: api::vacation::Id,
        ctx: &Context,
    ) -> Result<api::Vacation, Error> {
        ctx.service()
            .execute(query::vacation::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| VacationError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Vacation`s of any status.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///   ambiguous;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            area_id = ?area_id,
            before = ?before,
            first = ?first,
            gql.name = "vacations",
            is_featured = ?is_featured,
            last = ?last,
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn vacations(
        first: Option<i32>,
        after: Option<api::vacation::list::Cursor>,
        last: Option<i32>,
        before: Option<api::vacation::list::Cursor>,
        area_id: Option<api::area::Id>,
        status: Option<api::vacation::Status>,
        is_featured: Option<bool>,
        ctx: &Context,
    ) -> Result<api::vacation::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        ctx.authorize_admin().await?;

        let filter = read::vacation::list::Filter {
            area_id: area_id.map(Into::into),
            status: status.map(Into::into),
            is_featured,
        };
        ctx.service()
            .execute(query::vacations::List::by(
                read::vacation::list::Selector {
                    arguments: read::vacation::list::Arguments::new(
                        first,
                        after.map(Into::into),
                        last,
                        before.map(Into::into),
                        DEFAULT_PAGE_SIZE,
                    )
                    .ok_or_else(|| api::PaginationError::Ambiguous.into())
                    .map_err(ctx.error())?,
                    filter,
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|conn| api::vacation::list::Connection::new(conn, filter))
    }

    /// Searches the published `Vacation`s, the featured ones first, then the
    /// cheapest ones.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///   ambiguous;
    /// - `INVALID_NUMBER` - the number of `guests` is out of range.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            area_id = ?area_id,
            before = ?before,
            first = ?first,
            gql.name = "searchVacations",
            guests = ?guests,
            keyword = ?keyword.as_ref().map(ToString::to_string),
            last = ?last,
            max_price = ?max_price.map(|p| p.to_string()),
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn search_vacations(
        first: Option<i32>,
        after: Option<api::vacation::search::Cursor>,
        last: Option<i32>,
        before: Option<api::vacation::search::Cursor>,
        keyword: Option<api::vacation::search::Keyword>,
        area_id: Option<api::area::Id>,
        guests: Option<i32>,
        max_price: Option<Money>,
        ctx: &Context,
    ) -> Result<api::vacation::search::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 20;

        let guests = guests
            .map(u16::try_from)
            .transpose()
            .map_err(|_| api::InputError::Number.into())
            .map_err(ctx.error())?;

        ctx.service()
            .execute(query::vacations::Search(
                read::vacation::search::Selector {
                    arguments: read::vacation::search::Arguments::new(
                        first,
                        after.map(Into::into),
                        last,
                        before.map(Into::into),
                        DEFAULT_PAGE_SIZE,
                    )
                    .ok_or_else(|| api::PaginationError::Ambiguous.into())
                    .map_err(ctx.error())?,
                    filter: read::vacation::search::Filter {
                        keyword: keyword.map(Into::into),
                        area_id: area_id.map(Into::into),
                        guests,
                        max_price,
                    },
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Package` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PACKAGE_NOT_EXISTS` - the `Package` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "package",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn package(
        id: api::package::Id,
        ctx: &Context,
    ) -> Result<api::Package, Error> {
        ctx.service()
            .execute(query::package::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| PackageError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Template` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `TEMPLATE_NOT_EXISTS` - the `Template` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "template",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn template(
        id: api::template::Id,
        ctx: &Context,
    ) -> Result<api::Template, Error> {
        ctx.service()
            .execute(query::template::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| TemplateError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Template`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///   ambiguous.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            before = ?before,
            first = ?first,
            gql.name = "templates",
            kind = ?kind,
            last = ?last,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn templates(
        first: Option<i32>,
        after: Option<api::template::list::Cursor>,
        last: Option<i32>,
        before: Option<api::template::list::Cursor>,
        kind: Option<api::template::Kind>,
        ctx: &Context,
    ) -> Result<api::template::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        ctx.service()
            .execute(query::templates::List::by(
                read::template::list::Selector {
                    arguments: read::template::list::Arguments::new(
                        first,
                        after.map(Into::into),
                        last,
                        before.map(Into::into),
                        DEFAULT_PAGE_SIZE,
                    )
                    .ok_or_else(|| api::PaginationError::Ambiguous.into())
                    .map_err(ctx.error())?,
                    filter: read::template::list::Filter {
                        kind: kind.map(Into::into),
                    },
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Media` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `MEDIA_NOT_EXISTS` - the `Media` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "media",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn media(
        id: api::media::Id,
        ctx: &Context,
    ) -> Result<api::Media, Error> {
        ctx.service()
            .execute(query::media::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| MediaError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Review` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `REVIEW_NOT_EXISTS` - the `Review` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "review",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn review(
        id: api::review::Id,
        ctx: &Context,
    ) -> Result<api::Review, Error> {
        ctx.service()
            .execute(query::review::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| ReviewError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Review`s awaiting moderation, the oldest first.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "pendingReviews",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn pending_reviews(
        ctx: &Context,
    ) -> Result<Vec<api::Review>, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(query::reviews::Pending)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|pending| pending.into_iter().map(Into::into).collect())
    }

    /// Returns the `Voucher` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VOUCHER_NOT_EXISTS` - the `Voucher` with the specified ID does
    ///   not exist;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "voucher",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn voucher(
        id: api::voucher::Id,
        ctx: &Context,
    ) -> Result<api::Voucher, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(query::voucher::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| VoucherError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Voucher` with the specified code.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `VOUCHER_NOT_EXISTS` - the `Voucher` with the specified code does not
    ///   exist.
    #[tracing::instrument(
        skip_all,
        fields(
            code = %code,
            gql.name = "voucherByCode",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn voucher_by_code(
        code: api::voucher::Code,
        ctx: &Context,
    ) -> Result<api::Voucher, Error> {
        ctx.service()
            .execute(query::voucher::ByCode::by(code.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| VoucherError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns all the `Voucher`s, ordered by their codes.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "vouchers",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn vouchers(ctx: &Context) -> Result<Vec<api::Voucher>, Error> {
        ctx.authorize_admin().await?;

        ctx.service()
            .execute(query::vouchers::All::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|all| all.into_iter().map(Into::into).collect())
    }

    /// Returns the `Booking` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BOOKING_NOT_EXISTS` - the `Booking` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "booking",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn booking(
        id: api::booking::Id,
        ctx: &Context,
    ) -> Result<api::Booking, Error> {
        ctx.service()
            .execute(query::booking::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| BookingError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Booking`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///   ambiguous;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            before = ?before,
            email = ?email.as_ref().map(ToString::to_string),
            first = ?first,
            gql.name = "bookings",
            last = ?last,
            otel.name = Self::SPAN_NAME,
            status = ?status,
            vacation_id = ?vacation_id,
        ),
    )]
    pub async fn bookings(
        first: Option<i32>,
        after: Option<api::booking::list::Cursor>,
        last: Option<i32>,
        before: Option<api::booking::list::Cursor>,
        status: Option<api::booking::Status>,
        vacation_id: Option<api::vacation::Id>,
        email: Option<api::booking::Email>,
        ctx: &Context,
    ) -> Result<api::booking::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        ctx.authorize_admin().await?;

        ctx.service()
            .execute(query::bookings::List::by(
                read::booking::list::Selector {
                    arguments: read::booking::list::Arguments::new(
                        first,
                        after.map(Into::into),
                        last,
                        before.map(Into::into),
                        DEFAULT_PAGE_SIZE,
                    )
                    .ok_or_else(|| api::PaginationError::Ambiguous.into())
                    .map_err(ctx.error())?,
                    filter: read::booking::list::Filter {
                        status: status.map(Into::into),
                        vacation_id: vacation_id.map(Into::into),
                        email: email.map(Into::into),
                    },
                },
            ))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `Order` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `ORDER_NOT_EXISTS` - the `Order` with the specified ID does
    ///   not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            id = %id,
            gql.name = "order",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn order(
        id: api::order::Id,
        ctx: &Context,
    ) -> Result<api::Order, Error> {
        ctx.service()
            .execute(query::order::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| OrderError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Fetches the page of `Order`s.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `AMBIGUOUS_PAGINATION_ARGUMENTS` - the pagination arguments are
    ///   ambiguous;
    /// - `AUTHORIZATION_REQUIRED` - the request is not authorized as an
    ///   administrator.
    #[tracing::instrument(
        skip_all,
        fields(
            after = ?after,
            before = ?before,
            email = ?email.as_ref().map(ToString::to_string),
            first = ?first,
            gql.name = "orders",
            last = ?last,
            otel.name = Self::SPAN_NAME,
            status = ?status,
        ),
    )]
    pub async fn orders(
        first: Option<i32>,
        after: Option<api::order::list::Cursor>,
        last: Option<i32>,
        before: Option<api::order::list::Cursor>,
        status: Option<api::order::Status>,
        email: Option<api::booking::Email>,
        ctx: &Context,
    ) -> Result<api::order::list::Connection, Error> {
        const DEFAULT_PAGE_SIZE: i32 = 10;

        ctx.authorize_admin().await?;

        ctx.service()
            .execute(query::orders::List::by(read::order::list::Selector {
                arguments: read::order::list::Arguments::new(
                    first,
                    after.map(Into::into),
                    last,
                    before.map(Into::into),
                    DEFAULT_PAGE_SIZE,
                )
                .ok_or_else(|| api::PaginationError::Ambiguous.into())
                .map_err(ctx.error())?,
                filter: read::order::list::Filter {
                    status: status.map(Into::into),
                    email: email.map(Into::into),
                },
            }))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(Into::into)
    }
}

define_error! {
    enum AmenityError {
        #[code = "AMENITY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Amenity` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum AreaError {
        #[code = "AREA_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Area` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum BookingError {
        #[code = "BOOKING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Booking` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum LodgingError {
        #[code = "LODGING_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Lodging` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum MediaError {
        #[code = "MEDIA_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Media` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum OrderError {
        #[code = "ORDER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Order` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum PackageError {
        #[code = "PACKAGE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Package` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum ReviewError {
        #[code = "REVIEW_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Review` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum RoomError {
        #[code = "ROOM_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Room` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum TemplateError {
        #[code = "TEMPLATE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Template` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum VacationError {
        #[code = "VACATION_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Vacation` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum VoucherError {
        #[code = "VOUCHER_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Voucher` with the specified ID does not exist"]
        NotExists,
    }
}
