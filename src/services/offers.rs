//! Offer management and search.

use crate::domain::offer::Offer;
use crate::domain::types::{OfferId, OfferPrice, PriceRange, require_non_empty};
use crate::repository::{OfferReader, OfferWriter};

use super::{ServiceError, ServiceResult, non_empty, require_id};

fn validate_new_offer(offer: &Offer) -> ServiceResult<()> {
    require_non_empty(&offer.title, "offer title")?;
    OfferPrice::new(offer.price)?;
    Ok(())
}

/// Persist a new offer and return it with its assigned identifier.
///
/// The title must be non-empty and the price strictly positive, otherwise
/// [`ServiceError::InvalidArgument`] is returned before the repository is
/// called.
pub fn add_offer<R>(offer: Offer, repo: &R) -> ServiceResult<Offer>
where
    R: OfferWriter,
{
    if let Err(e) = validate_new_offer(&offer) {
        log::debug!("Rejected offer: {e}");
        return Err(e);
    }

    match repo.save_offer(&offer) {
        Ok(saved) => Ok(saved),
        Err(e) => {
            log::error!("Failed to save offer: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_offer_by_id<R>(id: Option<OfferId>, repo: &R) -> ServiceResult<Offer>
where
    R: OfferReader,
{
    let id = require_id(id, "offer")?;

    match repo.get_offer_by_id(id) {
        Ok(Some(offer)) => Ok(offer),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "offer not found with id: {id}"
        ))),
        Err(e) => {
            log::error!("Failed to get offer: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_all_offers<R>(repo: &R) -> ServiceResult<Vec<Offer>>
where
    R: OfferReader,
{
    match repo.list_offers() {
        Ok(offers) => Ok(offers),
        Err(e) => {
            log::error!("Failed to list offers: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_offer<R>(id: Option<OfferId>, repo: &R) -> ServiceResult<()>
where
    R: OfferReader + OfferWriter,
{
    let id = require_id(id, "offer")?;

    match repo.offer_exists(id) {
        Ok(true) => {}
        Ok(false) => {
            return Err(ServiceError::NotFound(format!(
                "offer not found with id: {id}"
            )));
        }
        Err(e) => {
            log::error!("Failed to check offer: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_offer(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete offer: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite every mutable field (title, description, price, location,
/// status) of the stored offer `id`. No field validation is applied.
pub fn update_offer<R>(id: Option<OfferId>, offer: Offer, repo: &R) -> ServiceResult<Offer>
where
    R: OfferReader + OfferWriter,
{
    let id = require_id(id, "offer")?;

    let mut existing = get_offer_by_id(Some(id), repo)?;
    existing.title = offer.title;
    existing.description = offer.description;
    existing.price = offer.price;
    existing.location = offer.location;
    existing.status = offer.status;

    match repo.save_offer(&existing) {
        Ok(saved) => Ok(saved),
        Err(e) => {
            log::error!("Failed to update offer: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Offers with exactly this title; empty when no title is given.
pub fn get_offers_by_title<R>(title: Option<&str>, repo: &R) -> ServiceResult<Vec<Offer>>
where
    R: OfferReader,
{
    let Some(title) = non_empty(title) else {
        return Ok(Vec::new());
    };

    match repo.list_offers_by_title(title) {
        Ok(offers) => Ok(offers),
        Err(e) => {
            log::error!("Failed to search offers by title: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Offers in exactly this location; empty when no location is given.
pub fn get_offers_by_location<R>(location: Option<&str>, repo: &R) -> ServiceResult<Vec<Offer>>
where
    R: OfferReader,
{
    let Some(location) = non_empty(location) else {
        return Ok(Vec::new());
    };

    match repo.list_offers_by_location(location) {
        Ok(offers) => Ok(offers),
        Err(e) => {
            log::error!("Failed to search offers by location: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Offers priced between `min_price` and `max_price` inclusive.
///
/// Returns an empty list instead of an error when a bound is missing,
/// negative or NaN, or when `min_price > max_price`. An upper bound of
/// `f64::INFINITY` searches without a ceiling.
pub fn get_offers_by_price_range<R>(
    min_price: Option<f64>,
    max_price: Option<f64>,
    repo: &R,
) -> ServiceResult<Vec<Offer>>
where
    R: OfferReader,
{
    let Some(range) = PriceRange::from_bounds(min_price, max_price) else {
        log::debug!("Ignoring invalid price range {min_price:?}..{max_price:?}");
        return Ok(Vec::new());
    };

    match repo.list_offers_by_price(range) {
        Ok(offers) => Ok(offers),
        Err(e) => {
            log::error!("Failed to search offers by price: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Whether an offer with this identifier is stored; `false` when no id is
/// given.
pub fn offer_exists<R>(id: Option<OfferId>, repo: &R) -> ServiceResult<bool>
where
    R: OfferReader,
{
    let Some(id) = id else {
        return Ok(false);
    };

    match repo.offer_exists(id) {
        Ok(exists) => Ok(exists),
        Err(e) => {
            log::error!("Failed to check offer: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;

    fn id(value: i32) -> OfferId {
        OfferId::new(value).unwrap()
    }

    fn sample_offers() -> Vec<Offer> {
        vec![
            Offer::with_details("Leak repair", "Fix leaking pipes", 50.0, "Paris").with_id(id(1)),
            Offer::with_details("Boiler service", "Annual check", 120.0, "Lyon").with_id(id(2)),
            Offer::with_details("Full renovation", "Bathroom", 2500.0, "Paris").with_id(id(3)),
        ]
    }

    fn seeded() -> TestRepository {
        TestRepository::new().with_offers(sample_offers())
    }

    #[test]
    fn add_assigns_identity() {
        let repo = TestRepository::new();

        let saved = add_offer(Offer::new("Leak repair", 80.0), &repo).unwrap();

        assert_eq!(saved.id, Some(id(1)));
        assert_eq!(saved.title, "Leak repair");
        assert_eq!(repo.calls(), vec!["save_offer"]);
    }

    #[test]
    fn add_rejects_empty_title() {
        let repo = TestRepository::new();

        let err = add_offer(Offer::new("", 80.0), &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::InvalidArgument("offer title cannot be empty".to_string())
        );
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn add_rejects_zero_price_before_any_repository_call() {
        let repo = TestRepository::new();

        let err = add_offer(Offer::new("Leak repair", 0.0), &repo).unwrap_err();

        assert_eq!(
            err,
            ServiceError::InvalidArgument("price must be greater than zero".to_string())
        );
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn add_rejects_negative_and_nan_prices() {
        let repo = TestRepository::new();

        assert!(add_offer(Offer::new("Leak repair", -10.0), &repo).is_err());
        assert!(add_offer(Offer::new("Leak repair", f64::NAN), &repo).is_err());
        assert!(!repo.was_called("save_offer"));
    }

    #[test]
    fn get_by_id_returns_offer_or_errors() {
        let repo = seeded();

        assert_eq!(get_offer_by_id(Some(id(2)), &repo).unwrap().title, "Boiler service");
        assert!(matches!(
            get_offer_by_id(Some(id(42)), &repo).unwrap_err(),
            ServiceError::NotFound(_)
        ));

        let fresh = seeded();
        assert!(matches!(
            get_offer_by_id(None, &fresh).unwrap_err(),
            ServiceError::InvalidArgument(_)
        ));
        assert!(fresh.calls().is_empty());
    }

    #[test]
    fn get_all_returns_every_offer() {
        assert_eq!(get_all_offers(&seeded()).unwrap().len(), 3);
        assert!(get_all_offers(&TestRepository::new()).unwrap().is_empty());
    }

    #[test]
    fn delete_checks_existence_first() {
        let repo = seeded();

        delete_offer(Some(id(1)), &repo).unwrap();
        assert_eq!(repo.calls(), vec!["offer_exists", "delete_offer"]);
        assert!(!offer_exists(Some(id(1)), &repo).unwrap());

        let repo = seeded();
        let err = delete_offer(Some(id(9)), &repo).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(!repo.was_called("delete_offer"));
    }

    #[test]
    fn delete_without_id_is_invalid() {
        let repo = seeded();

        let err = delete_offer(None, &repo).unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn update_overwrites_all_mutable_fields() {
        let repo = seeded();
        let changes = Offer {
            id: None,
            title: "Emergency leak repair".to_string(),
            description: None,
            price: 95.5,
            location: Some("Marseille".to_string()),
            status: Some("ACTIVE".to_string()),
        };

        let updated = update_offer(Some(id(1)), changes, &repo).unwrap();

        assert_eq!(updated.id, Some(id(1)));
        assert_eq!(updated.title, "Emergency leak repair");
        assert_eq!(updated.description, None);
        assert_eq!(updated.price, 95.5);
        assert_eq!(updated.location.as_deref(), Some("Marseille"));
        assert_eq!(updated.status.as_deref(), Some("ACTIVE"));
    }

    #[test]
    fn update_does_not_validate_new_values() {
        let repo = seeded();

        let updated = update_offer(Some(id(2)), Offer::new("", 0.0), &repo).unwrap();

        assert_eq!(updated.title, "");
        assert_eq!(updated.price, 0.0);
    }

    #[test]
    fn update_requires_existing_offer_and_id() {
        let repo = seeded();

        assert!(matches!(
            update_offer(None, Offer::new("x", 1.0), &repo).unwrap_err(),
            ServiceError::InvalidArgument(_)
        ));
        assert!(matches!(
            update_offer(Some(id(77)), Offer::new("x", 1.0), &repo).unwrap_err(),
            ServiceError::NotFound(_)
        ));
        assert!(!repo.was_called("save_offer"));
    }

    #[test]
    fn search_by_title_and_location() {
        let repo = seeded();

        let by_title = get_offers_by_title(Some("Boiler service"), &repo).unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, Some(id(2)));

        let in_paris = get_offers_by_location(Some("Paris"), &repo).unwrap();
        assert_eq!(in_paris.iter().map(|o| o.id).collect::<Vec<_>>(), vec![
            Some(id(1)),
            Some(id(3))
        ]);
    }

    #[test]
    fn search_without_filter_returns_empty_without_repository_call() {
        let repo = seeded();

        assert!(get_offers_by_title(None, &repo).unwrap().is_empty());
        assert!(get_offers_by_title(Some(""), &repo).unwrap().is_empty());
        assert!(get_offers_by_location(None, &repo).unwrap().is_empty());
        assert!(get_offers_by_location(Some(""), &repo).unwrap().is_empty());
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn price_range_returns_offers_within_bounds() {
        let repo = seeded();

        let offers = get_offers_by_price_range(Some(50.0), Some(200.0), &repo).unwrap();

        assert_eq!(offers.len(), 2);
        assert!(offers.iter().all(|o| (50.0..=200.0).contains(&o.price)));
    }

    #[test]
    fn open_ended_price_range_reaches_repository() {
        let repo = seeded();

        let offers = get_offers_by_price_range(Some(0.0), Some(f64::INFINITY), &repo).unwrap();

        assert_eq!(offers.len(), 3);
        assert_eq!(repo.calls(), vec!["list_offers_by_price"]);
    }

    #[test]
    fn nan_price_bounds_return_empty() {
        let repo = seeded();

        assert!(get_offers_by_price_range(Some(f64::NAN), Some(200.0), &repo).unwrap().is_empty());
        assert!(get_offers_by_price_range(Some(0.0), Some(f64::NAN), &repo).unwrap().is_empty());
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn invalid_price_ranges_return_empty() {
        let repo = seeded();

        assert!(get_offers_by_price_range(None, Some(200.0), &repo).unwrap().is_empty());
        assert!(get_offers_by_price_range(Some(50.0), None, &repo).unwrap().is_empty());
        assert!(get_offers_by_price_range(Some(-1.0), Some(200.0), &repo).unwrap().is_empty());
        assert!(get_offers_by_price_range(Some(200.0), Some(50.0), &repo).unwrap().is_empty());
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn exists_is_false_without_id() {
        let repo = seeded();

        assert!(!offer_exists(None, &repo).unwrap());
        assert!(repo.calls().is_empty());
        assert!(offer_exists(Some(id(3)), &repo).unwrap());
        assert!(!offer_exists(Some(id(4)), &repo).unwrap());
    }

    #[test]
    fn repository_failures_surface_as_internal() {
        let repo = seeded().failing();

        assert_eq!(get_all_offers(&repo).unwrap_err(), ServiceError::Internal);
        assert_eq!(
            get_offers_by_title(Some("Leak repair"), &repo).unwrap_err(),
            ServiceError::Internal
        );
        assert_eq!(offer_exists(Some(id(1)), &repo).unwrap_err(), ServiceError::Internal);
    }
}
