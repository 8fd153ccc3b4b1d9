//! [`Search`] definition.

use std::cmp::Reverse;

use common::{
    operations::{By, Select},
    Money,
};
use tracerr::Traced;

use crate::{
    domain::{vacation, Package, Vacation},
    infra::{database, Database},
    read::vacation::search::{Connection, Filter, Hit, Selector},
    Query, Service,
};

/// [`Query`] searching published [`Vacation`]s.
///
/// Only [`Vacation`]s having at least one [`Package`] matching the [`Filter`]
/// are found. Featured [`Vacation`]s go first, then the cheaper ones.
#[derive(Clone, Debug)]
pub struct Search(pub Selector);

impl<Db, M> Query<Search> for Service<Db, M>
where
    Db: Database<
            Select<By<Vec<Vacation>, vacation::Status>>,
            Ok = Vec<Vacation>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Package>, Vec<vacation::Id>>>,
            Ok = Vec<Package>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = Connection;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Search(selector): Search,
    ) -> Result<Self::Ok, Self::Err> {
        let Selector { arguments, filter } = selector;

        let vacations = self
            .database()
            .execute(Select(By::<Vec<Vacation>, _>::new(
                vacation::Status::Published,
            )))
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .filter(|v| filter.matches(v))
            .collect::<Vec<_>>();
        if vacations.is_empty() {
            return Ok(Connection::empty(&arguments));
        }

        let packages = self
            .database()
            .execute(Select(By::<Vec<Package>, _>::new(
                vacations.iter().map(|v| v.id).collect::<Vec<_>>(),
            )))
            .await
            .map_err(tracerr::wrap!())?;

        let mut hits = vacations
            .into_iter()
            .filter_map(|vacation| {
                let lowest_price = packages
                    .iter()
                    .filter(|p| p.vacation_id == vacation.id)
                    .filter(|p| filter.accepts(p))
                    .map(|p| p.price)
                    .min_by(Money::cmp_by_currency)?;
                Some(Hit {
                    vacation,
                    lowest_price,
                })
            })
            .collect::<Vec<_>>();
        hits.sort_by(|a, b| {
            Reverse(a.vacation.is_featured)
                .cmp(&Reverse(b.vacation.is_featured))
                .then_with(|| a.lowest_price.cmp_by_currency(&b.lowest_price))
                .then_with(|| a.vacation.id.cmp(&b.vacation.id))
        });

        Ok(Connection::paginate(&arguments, hits, |h| h.vacation.id))
    }
}

impl Filter {
    /// Checks whether the provided [`Vacation`] matches this [`Filter`].
    fn matches(&self, vacation: &Vacation) -> bool {
        if self.area_id.is_some_and(|id| id != vacation.area_id) {
            return false;
        }
        let Some(keyword) = &self.keyword else {
            return true;
        };

        let keyword = keyword.as_ref().to_lowercase();
        vacation.title.as_ref().to_lowercase().contains(&keyword)
            || vacation
                .summary
                .as_ref()
                .is_some_and(|s| s.as_ref().to_lowercase().contains(&keyword))
    }

    /// Checks whether the provided [`Package`] is acceptable by this
    /// [`Filter`].
    fn accepts(&self, package: &Package) -> bool {
        let fits = self
            .guests
            .is_none_or(|guests| guests <= package.max_guests.get());
        let affordable =
            self.max_price.is_none_or(|Money { amount, currency }| {
                package.price.currency == currency
                    && package.price.amount <= amount
            });
        fits && affordable
    }
}

#[cfg(test)]
mod spec {
    use common::{DateTime, Money};

    use crate::{
        domain::{area, lodging, package, room, vacation, Package, Vacation},
        infra::{
            database::mock::{self, Mock, State},
            mail::mock::Recorder,
        },
        read::vacation::search::{Arguments, Filter, Keyword, Selector},
        Query as _,
    };

    use super::Search;

    fn vacation(title: &str, summary: Option<&str>) -> Vacation {
        Vacation {
            id: vacation::Id::new(),
            area_id: area::Id::new(),
            lodging_id: lodging::Id::new(),
            title: vacation::Title::new(title).unwrap(),
            summary: summary.map(|s| vacation::Summary::new(s).unwrap()),
            status: vacation::Status::Published,
            is_featured: false,
            created_at: DateTime::now().coerce(),
            updated_at: DateTime::now().coerce(),
        }
    }

    fn package(price: &str, max_guests: u16) -> Package {
        Package {
            id: package::Id::new(),
            vacation_id: vacation::Id::new(),
            room_id: room::Id::new(),
            name: package::Name::new("Week").unwrap(),
            nights: package::Nights::new(7).unwrap(),
            price: price.parse().unwrap(),
            max_guests: room::Capacity::new(max_guests).unwrap(),
            created_at: DateTime::now().coerce(),
        }
    }

    #[test]
    fn matches_keyword_case_insensitively() {
        let filter = Filter {
            keyword: Some(Keyword::new("beach").unwrap()),
            ..Filter::default()
        };

        assert!(filter.matches(&vacation("Sunny BEACH week", None)));
        assert!(filter.matches(&vacation("Week", Some("Quiet beaches"))));
        assert!(!filter.matches(&vacation("Mountains", Some("Snow"))));
    }

    #[test]
    fn matches_area() {
        let v = vacation("Week", None);

        let same = Filter {
            area_id: Some(v.area_id),
            ..Filter::default()
        };
        let other = Filter {
            area_id: Some(area::Id::new()),
            ..Filter::default()
        };

        assert!(same.matches(&v));
        assert!(!other.matches(&v));
    }

    #[test]
    fn accepts_fitting_and_affordable_packages() {
        let filter = Filter {
            guests: Some(3),
            max_price: Some("500USD".parse::<Money>().unwrap()),
            ..Filter::default()
        };

        assert!(filter.accepts(&package("500USD", 3)));
        assert!(!filter.accepts(&package("500.01USD", 4)));
        assert!(!filter.accepts(&package("100USD", 2)));
        assert!(!filter.accepts(&package("100EUR", 4)));
    }

    fn priced(vacation: &Vacation, price: &str) -> Package {
        Package {
            vacation_id: vacation.id,
            ..package(price, 2)
        }
    }

    fn search(first: usize, after: Option<vacation::Id>) -> Search {
        Search(Selector {
            arguments: Arguments::new(Some(first), after, None, None, 10)
                .unwrap(),
            filter: Filter::default(),
        })
    }

    #[tokio::test]
    async fn puts_featured_first_then_cheapest() {
        let mut featured = vacation("Featured", None);
        featured.is_featured = true;
        let cheap = vacation("Cheap", None);
        let euro = vacation("Euro", None);
        let mut draft = vacation("Draft", None);
        draft.status = vacation::Status::Draft;
        let empty = vacation("Empty", None);
        let packages = [
            priced(&featured, "900USD"),
            priced(&cheap, "300USD"),
            priced(&cheap, "250USD"),
            priced(&euro, "150EUR"),
            priced(&draft, "100USD"),
        ];
        let db = Mock::with(State {
            vacations: [&featured, &cheap, &euro, &draft, &empty]
                .into_iter()
                .map(|v| (v.id, v.clone()))
                .collect(),
            packages: packages.into_iter().map(|p| (p.id, p)).collect(),
            ..State::default()
        });
        let svc = mock::service(&db, &Recorder::default());

        let first = svc.execute(search(2, None)).await.unwrap();

        assert_eq!(
            first
                .edges
                .iter()
                .map(|e| e.node.vacation.id)
                .collect::<Vec<_>>(),
            vec![featured.id, cheap.id],
        );
        assert_eq!(
            first.edges[1].node.lowest_price,
            "250USD".parse::<Money>().unwrap(),
        );
        assert!(first.page_info().has_next_page);

        let next = svc
            .execute(search(2, first.page_info().end_cursor))
            .await
            .unwrap();

        assert_eq!(
            next.edges
                .iter()
                .map(|e| e.node.vacation.id)
                .collect::<Vec<_>>(),
            vec![euro.id],
        );
        assert!(!next.page_info().has_next_page);
    }

    #[tokio::test]
    async fn finds_nothing_without_published_vacations() {
        let db = Mock::default();
        let svc = mock::service(&db, &Recorder::default());

        let found = svc.execute(search(5, None)).await.unwrap();

        assert!(found.edges.is_empty());
        assert!(!found.page_info().has_next_page);
    }
}
