use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// Insertable/patchable form of [`Category`].
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(treat_none_as_null = true)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Some(category.id.try_into()?),
            name: category.name,
            description: category.description,
        })
    }
}

impl From<&DomainCategory> for NewCategory {
    fn from(category: &DomainCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}
