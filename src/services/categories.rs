//! Category management: validation in front of [`CategoryReader`] and
//! [`CategoryWriter`].

use crate::domain::category::Category;
use crate::domain::types::{CategoryId, require_non_empty};
use crate::repository::{CategoryReader, CategoryWriter};

use super::{ServiceError, ServiceResult, non_empty, require_id};

/// Persist a new category and return it with the identifier assigned by the
/// repository.
///
/// Fails with [`ServiceError::InvalidArgument`] when the name is empty; the
/// repository is not touched in that case.
pub fn add_category<R>(category: Category, repo: &R) -> ServiceResult<Category>
where
    R: CategoryWriter,
{
    if let Err(e) = require_non_empty(&category.name, "category name") {
        log::debug!("Rejected category: {e}");
        return Err(e.into());
    }

    match repo.save_category(&category) {
        Ok(saved) => Ok(saved),
        Err(e) => {
            log::error!("Failed to save category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_category_by_id<R>(id: Option<CategoryId>, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    let id = require_id(id, "category")?;

    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound(format!(
            "category not found with id: {id}"
        ))),
        Err(e) => {
            log::error!("Failed to get category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_all_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Same listing as [`get_all_categories`].
pub fn find_all_categories<R>(repo: &R) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader,
{
    get_all_categories(repo)
}

/// Delete a stored category. Missing categories are reported as
/// [`ServiceError::NotFound`] without issuing a delete.
pub fn delete_category<R>(id: Option<CategoryId>, repo: &R) -> ServiceResult<()>
where
    R: CategoryReader + CategoryWriter,
{
    let id = require_id(id, "category")?;

    match repo.category_exists(id) {
        Ok(true) => {}
        Ok(false) => {
            return Err(ServiceError::NotFound(format!(
                "category not found with id: {id}"
            )));
        }
        Err(e) => {
            log::error!("Failed to check category: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_category(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Overwrite name and description of the stored category `id` with the
/// values from `category`. The identifier of the stored record is kept.
///
/// Unlike [`add_category`] the new name is not validated.
pub fn update_category<R>(
    id: Option<CategoryId>,
    category: Category,
    repo: &R,
) -> ServiceResult<Category>
where
    R: CategoryReader + CategoryWriter,
{
    let id = require_id(id, "category")?;

    let mut existing = get_category_by_id(Some(id), repo)?;
    existing.name = category.name;
    existing.description = category.description;

    match repo.save_category(&existing) {
        Ok(saved) => Ok(saved),
        Err(e) => {
            log::error!("Failed to update category: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Whether a category with exactly this name exists. A missing or empty
/// name yields `false` without querying the repository.
pub fn category_name_exists<R>(name: Option<&str>, repo: &R) -> ServiceResult<bool>
where
    R: CategoryReader,
{
    let Some(name) = non_empty(name) else {
        return Ok(false);
    };

    match repo.category_name_exists(name) {
        Ok(exists) => Ok(exists),
        Err(e) => {
            log::error!("Failed to check category name: {e}");
            Err(ServiceError::Internal)
        }
    }
}
