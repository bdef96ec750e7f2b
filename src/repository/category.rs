use diesel::prelude::*;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::id.asc())
            .select(DbCategory::as_select())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let category = categories::table
            .find(id.get())
            .select(DbCategory::as_select())
            .first::<DbCategory>(&mut conn)
            .optional()?;

        let category = category.map(TryInto::try_into).transpose()?;
        Ok(category)
    }

    fn category_exists(&self, id: CategoryId) -> RepositoryResult<bool> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let exists = diesel::select(diesel::dsl::exists(categories::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }

    fn category_name_exists(&self, name: &str) -> RepositoryResult<bool> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let exists = diesel::select(diesel::dsl::exists(
            categories::table.filter(categories::name.eq(name)),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }
}

impl CategoryWriter for DieselRepository {
    fn save_category(&self, category: &Category) -> RepositoryResult<Category> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let changes = DbNewCategory::from(category);

        let row = match category.id {
            None => diesel::insert_into(categories::table)
                .values(&changes)
                .returning(DbCategory::as_returning())
                .get_result::<DbCategory>(&mut conn)?,
            Some(id) => conn.transaction::<_, diesel::result::Error, _>(|conn| {
                let updated = diesel::update(categories::table.find(id.get()))
                    .set(&changes)
                    .returning(DbCategory::as_returning())
                    .get_result::<DbCategory>(conn)
                    .optional()?;

                match updated {
                    Some(row) => Ok(row),
                    None => diesel::insert_into(categories::table)
                        .values((categories::id.eq(id.get()), &changes))
                        .returning(DbCategory::as_returning())
                        .get_result::<DbCategory>(conn),
                }
            })?,
        };

        Ok(Category::try_from(row)?)
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let affected = diesel::delete(categories::table.find(id.get())).execute(&mut conn)?;

        Ok(affected)
    }
}
