//! [`Room`]-related definitions.

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, Query as _};
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A room of a lodging.
#[derive(Clone, Debug, From, Into)]
pub struct Room(domain::Room);

/// A room of a `Lodging` offered in `Package`s.
#[graphql_object(context = Context)]
impl Room {
    /// Unique identifier of this `Room`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// `Lodging` this `Room` belongs to.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.lodging",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn lodging(&self) -> api::Lodging {
        #[expect(
            unsafe_code,
            reason = "`Room` cannot reference a non-existent `Lodging`"
        )]
        unsafe {
            api::Lodging::new_unchecked(self.0.lodging_id)
        }
    }

    /// Name of this `Room`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Maximum number of guests this `Room` accommodates.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.capacity",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn capacity(&self) -> i32 {
        self.0.capacity.get().into()
    }

    /// Price of a single night in this `Room`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.pricePerNight",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn price_per_night(&self) -> Money {
        self.0.price_per_night
    }

    /// `Amenity`s of this `Room`, ordered by their names.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.amenities",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn amenities(
        &self,
        ctx: &Context,
    ) -> Result<Vec<api::Amenity>, Error> {
        if self.0.amenities.is_empty() {
            return Ok(vec![]);
        }

        ctx.service()
            .execute(query::amenities::All::by(()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|all| {
                all.into_iter()
                    .filter(|a| self.0.amenities.contains(&a.id))
                    .map(Into::into)
                    .collect()
            })
    }

    /// `Media` of this `Room`, ordered by their positions.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.media",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn media(&self, ctx: &Context) -> Result<Vec<api::Media>, Error> {
        api::media::of(domain::media::Owner::Room(self.0.id), ctx).await
    }

    /// `DateTime` when this `Room` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Room.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of a `Room`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::room::Id)]
#[into(domain::room::Id)]
#[graphql(name = "RoomId", transparent)]
pub struct Id(Uuid);

/// Name of a `Room`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "RoomName", with = scalar::Via::<domain::room::Name>)]
pub struct Name(domain::room::Name);

/// Parses the GraphQL number of guests into [`domain::room::Capacity`].
///
/// # Errors
///
/// Errors if the `capacity` is out of the allowed range.
pub(crate) fn capacity(capacity: i32) -> Result<domain::room::Capacity, Error> {
    u16::try_from(capacity)
        .ok()
        .and_then(domain::room::Capacity::new)
        .ok_or_else(|| api::InputError::Capacity.into())
}
