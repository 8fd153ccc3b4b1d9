//! [`Package`]-related definitions.

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, Query as _};
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A bookable package of a vacation.
#[derive(Clone, Debug, From, Into)]
pub struct Package(domain::Package);

/// A bookable offer of a `Vacation`: a `Room` for a fixed number of nights.
#[graphql_object(context = Context)]
impl Package {
    /// Unique identifier of this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `Vacation` offering this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.vacation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn vacation(&self) -> api::Vacation {
        #[expect(
            unsafe_code,
            reason = "`Package` cannot reference a non-existent `Vacation`"
        )]
        unsafe {
            api::Vacation::new_unchecked(self.0.vacation_id)
        }
    }

    /// `Room` of this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.room",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn room(&self, ctx: &Context) -> Result<api::Room, Error> {
        ctx.service()
            .execute(query::room::ById::by(self.0.room_id))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| api::query::RoomError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Name of this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Number of nights of this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.nights",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn nights(&self) -> i32 {
        self.0.nights.get().into()
    }

    /// Total price of this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.price",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn price(&self) -> Money {
        self.0.price
    }

    /// Maximum number of guests of this `Package`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.maxGuests",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn max_guests(&self) -> i32 {
        self.0.max_guests.get().into()
    }

    /// `DateTime` when this `Package` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Package.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Package`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::package::Id)]
#[into(domain::package::Id)]
#[graphql(name = "PackageId", transparent)]
pub struct Id(Uuid);

/// Name of a `Package`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "PackageName", with = scalar::Via::<domain::package::Name>)]
pub struct Name(domain::package::Name);

/// Parses the GraphQL number of nights into [`domain::package::Nights`].
///
/// # Errors
///
/// Errors if the `nights` are out of the allowed range.
pub(crate) fn nights(nights: i32) -> Result<domain::package::Nights, Error> {
    u16::try_from(nights)
        .ok()
        .and_then(domain::package::Nights::new)
        .ok_or_else(|| api::InputError::Nights.into())
}
