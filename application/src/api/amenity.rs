//! [`Amenity`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::{api, api::scalar, Context};

/// An amenity of a room.
#[derive(Clone, Debug, From, Into)]
pub struct Amenity(domain::Amenity);

/// An amenity of a room, like a balcony or a sea view.
#[graphql_object(context = Context)]
impl Amenity {
    /// Unique identifier of this `Amenity`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Amenity.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Name of this `Amenity`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Amenity.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn name(&self) -> Name {
        self.0.name.clone().into()
    }

    /// Description of this `Amenity`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Amenity.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn description(&self) -> Option<Description> {
        self.0.description.clone().map(Into::into)
    }

    /// `DateTime` when this `Amenity` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Amenity.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Unique identifier of an `Amenity`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::amenity::Id)]
#[into(domain::amenity::Id)]
#[graphql(name = "AmenityId", transparent)]
pub struct Id(Uuid);

/// Name of an `Amenity`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AmenityName",
    with = scalar::Via::<domain::amenity::Name>,
)]
pub struct Name(domain::amenity::Name);

/// Description of an `Amenity`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AmenityDescription",
    with = scalar::Via::<domain::amenity::Description>,
)]
pub struct Description(domain::amenity::Description);
