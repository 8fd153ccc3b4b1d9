//! [`Area`]-related definitions.

use std::future;

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use futures::TryFutureExt as _;
use juniper::{graphql_object, GraphQLScalar};
use service::{domain, query, Query as _};
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A geographical area.
#[derive(Clone, Debug)]
pub struct Area {
    /// ID of this [`Area`].
    id: Id,

    /// Underlying [`domain::Area`].
    area: OnceCell<domain::Area>,
}

impl From<domain::Area> for Area {
    fn from(area: domain::Area) -> Self {
        Self {
            id: area.id.into(),
            area: OnceCell::new_with(Some(area)),
        }
    }
}

impl Area {
    /// Creates a new [`Area`] with the provided ID.
    ///
    /// # Safety
    ///
    /// Caller must ensure that [`Area`] with the provided ID exists,
    /// otherwise accessing this [`Area`] will result with an error.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            area: OnceCell::new(),
        }
    }

    /// Returns the underlying [`domain::Area`].
    ///
    /// # Errors
    ///
    /// Errors if the [`domain::Area`] doesn't exist.
    async fn area(&self, ctx: &Context) -> Result<&domain::Area, Error> {
        let id = self.id.into();
        self.area
            .get_or_try_init(|| {
                ctx.service()
                    .execute(query::area::ById::by(id))
                    .map_err(AsError::into_error)
                    .map_err(ctx.error())
                    .and_then(|a| {
                        future::ready(a.ok_or_else(|| {
                            api::query::AreaError::NotExists.into()
                        }))
                    })
            })
            .await
    }
}

/// A geographical area, like a city or an island, vacations take place in.
#[graphql_object(context = Context)]
impl Area {
    /// Unique identifier of this `Area`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Area.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.id
    }

    /// Name of this `Area`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Area.name",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn name(&self, ctx: &Context) -> Result<Name, Error> {
        Ok(self.area(ctx).await?.name.clone().into())
    }

    /// Country this `Area` is located in.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Area.country",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn country(&self, ctx: &Context) -> Result<Country, Error> {
        Ok(self.area(ctx).await?.country.clone().into())
    }

    /// Description of this `Area`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Area.description",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn description(
        &self,
        ctx: &Context,
    ) -> Result<Option<Description>, Error> {
        Ok(self.area(ctx).await?.description.clone().map(Into::into))
    }

    /// `DateTime` when this `Area` was created.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Area.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub async fn created_at(&self, ctx: &Context) -> Result<DateTime, Error> {
        Ok(self.area(ctx).await?.created_at.coerce())
    }
}

/// Unique identifier of an `Area`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::area::Id)]
#[into(domain::area::Id)]
#[graphql(name = "AreaId", transparent)]
pub struct Id(Uuid);

/// Name of an `Area`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "AreaName", with = scalar::Via::<domain::area::Name>)]
pub struct Name(domain::area::Name);

/// Country of an `Area`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "AreaCountry", with = scalar::Via::<domain::area::Country>)]
pub struct Country(domain::area::Country);

/// Description of an `Area`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "AreaDescription",
    with = scalar::Via::<domain::area::Description>,
)]
pub struct Description(domain::area::Description);
