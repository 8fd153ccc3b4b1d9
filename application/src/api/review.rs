//! [`Review`]-related definitions.

use common::DateTime;
use derive_more::{AsRef, Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use rust_decimal::prelude::ToPrimitive as _;
use service::{domain, read};
use uuid::Uuid;

use crate::{api, api::scalar, Context, Error};

/// A guest review.
#[derive(Clone, Debug, From, Into)]
pub struct Review(domain::Review);

/// A review of a `Vacation` left by a guest.
#[graphql_object(context = Context)]
impl Review {
    /// Unique identifier of this `Review`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.id",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn id(&self) -> Id {
        self.0.id.into()
    }

    /// Reviewed `Vacation`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.vacation",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn vacation(&self) -> api::Vacation {
        #[expect(
            unsafe_code,
            reason = "`Review` cannot reference a non-existent `Vacation`"
        )]
        unsafe {
            api::Vacation::new_unchecked(self.0.vacation_id)
        }
    }

    /// Author of this `Review`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.author",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn author(&self) -> Author {
        self.0.author.clone().into()
    }

    /// Rating of this `Review`, from 1 to 5.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.rating",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn rating(&self) -> i32 {
        self.0.rating.get().into()
    }

    /// Comment of this `Review`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.comment",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn comment(&self) -> Option<Comment> {
        self.0.comment.clone().map(Into::into)
    }

    /// Moderation status of this `Review`.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.status",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// `DateTime` when this `Review` was submitted.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "Review.createdAt",
            otel.name = api::Query::SPAN_NAME,
        ),
    )]
    pub fn created_at(&self) -> DateTime {
        self.0.created_at.coerce()
    }
}

/// Summary of the approved [`Review`]s of a vacation.
#[derive(Clone, Copy, Debug, From, Into)]
pub struct Summary(read::review::Summary);

/// Summary of the approved `Review`s of a `Vacation`.
#[graphql_object(name = "ReviewSummary", context = Context)]
impl Summary {
    /// Number of the approved `Review`s.
    #[must_use]
    pub fn count(&self) -> i32 {
        i32::try_from(self.0.count).unwrap_or(i32::MAX)
    }

    /// Average rating of the approved `Review`s, if there are any.
    #[must_use]
    pub fn average_rating(&self) -> Option<f64> {
        self.0.average.and_then(|avg| avg.to_f64())
    }
}

/// Unique identifier of a `Review`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::review::Id)]
#[into(domain::review::Id)]
#[graphql(name = "ReviewId", transparent)]
pub struct Id(Uuid);

/// Author of a `Review`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "ReviewAuthor", with = scalar::Via::<domain::review::Author>)]
pub struct Author(domain::review::Author);

/// Comment of a `Review`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(
    name = "ReviewComment",
    with = scalar::Via::<domain::review::Comment>,
)]
pub struct Comment(domain::review::Comment);

/// Moderation status of a `Review`.
#[derive(Clone, Copy, Debug, GraphQLEnum)]
#[graphql(name = "ReviewStatus")]
pub enum Status {
    /// Awaiting moderation.
    Pending,

    /// Approved and publicly visible.
    Approved,

    /// Rejected by a moderator.
    Rejected,
}

impl From<domain::review::Status> for Status {
    fn from(status: domain::review::Status) -> Self {
        use domain::review::Status as S;
        match status {
            S::Pending => Self::Pending,
            S::Approved => Self::Approved,
            S::Rejected => Self::Rejected,
        }
    }
}

/// Parses the GraphQL rating into [`domain::review::Rating`].
///
/// # Errors
///
/// Errors if the `rating` is out of `1..=5` range.
pub(crate) fn rating(rating: i32) -> Result<domain::review::Rating, Error> {
    u8::try_from(rating)
        .ok()
        .and_then(domain::review::Rating::new)
        .ok_or_else(|| api::InputError::Rating.into())
}
