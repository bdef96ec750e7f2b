use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::offer::Offer;
use crate::domain::types::{CategoryId, OfferId, PriceRange};

use self::errors::RepositoryResult;

pub mod category;
pub mod errors;
pub mod offer;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every stored category ordered by identifier.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// Whether a category with this identifier is stored.
    fn category_exists(&self, id: CategoryId) -> RepositoryResult<bool>;
    /// Whether a category with exactly this name is stored.
    fn category_name_exists(&self, name: &str) -> RepositoryResult<bool>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Insert the category when it has no identifier, otherwise overwrite the
    /// stored row. Returns the persisted value with its identifier.
    fn save_category(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category by id, returning the number of removed rows.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for offer entities.
pub trait OfferReader {
    /// List every stored offer ordered by identifier.
    fn list_offers(&self) -> RepositoryResult<Vec<Offer>>;
    /// Retrieve an offer by its identifier.
    fn get_offer_by_id(&self, id: OfferId) -> RepositoryResult<Option<Offer>>;
    /// Whether an offer with this identifier is stored.
    fn offer_exists(&self, id: OfferId) -> RepositoryResult<bool>;
    /// Offers whose title equals `title`.
    fn list_offers_by_title(&self, title: &str) -> RepositoryResult<Vec<Offer>>;
    /// Offers whose location equals `location`.
    fn list_offers_by_location(&self, location: &str) -> RepositoryResult<Vec<Offer>>;
    /// Offers priced within `range`, bounds included.
    fn list_offers_by_price(&self, range: PriceRange) -> RepositoryResult<Vec<Offer>>;
}

/// Write operations for offer entities.
pub trait OfferWriter {
    /// Insert or overwrite an offer, see [`CategoryWriter::save_category`].
    fn save_offer(&self, offer: &Offer) -> RepositoryResult<Offer>;
    /// Delete an offer by id, returning the number of removed rows.
    fn delete_offer(&self, id: OfferId) -> RepositoryResult<usize>;
}
