//! [`Media`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::{domain, query, Query as _};
use uuid::Uuid;

use crate::{api, api::scalar, AsError, Context, Error};

/// A media item.
#[derive(Clone, Debug, From, Into)]
pub struct Media(domain::Media);

/// An image or a video illustrating a `Vacation`, a `Lodging` or a `Room`.
#[graphql_object(context = Context)]
impl Media {
    /// Unique identifier of this `Media`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Kind of the entity owning this `Media`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.ownerKind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn owner_kind(&self) -> OwnerKind {
        self.0.owner.kind().into()
    }

    /// ID of the entity owning this `Media`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.ownerId",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn owner_id(&self) -> Uuid {
        self.0.owner.uuid()
    }

    /// Kind of this `Media`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.kind",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn kind(&self) -> Kind {
        self.0.kind.into()
    }

    /// URL of this `Media`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.url",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn url(&self) -> Url {
        self.0.url.clone().into()
    }

    /// Caption of this `Media`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.caption",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn caption(&self) -> Option<Caption> {
        self.0.caption.clone().map(Into::into)
    }

    /// Position of this `Media` among the ones of the same owner.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.position",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn position(&self) -> i32 {
        self.0.position.into()
    }

    /// `DateTime` when this `Media` was added.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Media.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Fetches all the [`Media`] of the provided [`domain::media::Owner`],
/// ordered by their positions.
pub(crate) async fn of(
    owner: domain::media::Owner,
    ctx: &Context,
) -> Result<Vec<Media>, Error> {
    ctx.service()
        .execute(query::media::ByOwner::by(owner))
        .await
        .map_err(AsError::into_error)
        .map_err(ctx.error())
        .map(|media| media.into_iter().map(Into::into).collect())
}

/// Unique identifier of a `Media`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::media::Id)]
#[into(domain::media::Id)]
#[graphql(name = "MediaId", transparent)]
pub struct Id(Uuid);

/// HTTP(S) URL of a `Media`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "MediaUrl", with = scalar::Via::<domain::media::Url>)]
pub struct Url(domain::media::Url);

/// Caption of a `Media`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "MediaCaption", with = scalar::Via::<domain::media::Caption>)]
pub struct Caption(domain::media::Caption);

/// Kind of a `Media`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "MediaKind")]
pub enum Kind {
    /// An image.
    Image,

    /// A video.
    Video,
}

impl From<domain::media::Kind> for Kind {
    fn from(kind: domain::media::Kind) -> Self {
        use domain::media::Kind as K;
        match kind {
            K::Image => Self::Image,
            K::Video => Self::Video,
        }
    }
}

impl From<Kind> for domain::media::Kind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Image => Self::Image,
            Kind::Video => Self::Video,
        }
    }
}

/// Kind of an entity owning a `Media`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "MediaOwnerKind")]
pub enum OwnerKind {
    /// A `Vacation`.
    Vacation,

    /// A `Lodging`.
    Lodging,

    /// A `Room`.
    Room,
}

impl From<domain::media::OwnerKind> for OwnerKind {
    fn from(kind: domain::media::OwnerKind) -> Self {
        use domain::media::OwnerKind as K;
        match kind {
            K::Vacation => Self::Vacation,
            K::Lodging => Self::Lodging,
            K::Room => Self::Room,
        }
    }
}

impl From<OwnerKind> for domain::media::OwnerKind {
    fn from(kind: OwnerKind) -> Self {
        match kind {
            OwnerKind::Vacation => Self::Vacation,
            OwnerKind::Lodging => Self::Lodging,
            OwnerKind::Room => Self::Room,
        }
    }
}
