//! [`Review`]-related read definitions.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{review, Review};

/// Aggregated [`review::Rating`]s of a [`Vacation`].
///
/// [`Vacation`]: crate::domain::Vacation
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Number of approved [`Review`]s.
    pub count: u32,

    /// Average [`review::Rating`], rounded to one decimal place.
    ///
    /// [`None`] if there are no approved [`Review`]s.
    pub average: Option<Decimal>,
}

impl Summary {
    /// Aggregates the approved ones among the provided [`Review`]s.
    #[must_use]
    pub fn of<'r>(reviews: impl IntoIterator<Item = &'r Review>) -> Self {
        let (count, sum) = reviews
            .into_iter()
            .filter(|r| r.status == review::Status::Approved)
            .fold((0_u32, 0_u32), |(count, sum), r| {
                (count + 1, sum + u32::from(r.rating.get()))
            });

        let average = (count > 0).then(|| {
            (Decimal::from(sum) / Decimal::from(count)).round_dp_with_strategy(
                1,
                RoundingStrategy::MidpointAwayFromZero,
            )
        });
        Self { count, average }
    }
}

#[cfg(test)]
mod spec {
    use rust_decimal::Decimal;

    use crate::domain::{review, vacation, Review};

    use super::Summary;

    fn review(rating: u8, status: review::Status) -> Review {
        Review {
            id: review::Id::new(),
            vacation_id: vacation::Id::new(),
            author: review::Author::new("Jane").unwrap(),
            rating: review::Rating::new(rating).unwrap(),
            comment: None,
            status,
            created_at: review::CreationDateTime::now(),
        }
    }

    #[test]
    fn summarizes_approved_only() {
        let reviews = [
            review(5, review::Status::Approved),
            review(4, review::Status::Approved),
            review(4, review::Status::Approved),
            review(1, review::Status::Rejected),
            review(1, review::Status::Pending),
        ];

        let summary = Summary::of(&reviews);

        assert_eq!(summary.count, 3);
        assert_eq!(summary.average, Some(Decimal::new(43, 1)));
    }

    #[test]
    fn summarizes_nothing() {
        let reviews: Vec<Review> = vec![];

        assert_eq!(
            Summary::of(&reviews),
            Summary {
                count: 0,
                average: None,
            },
        );
    }
}
