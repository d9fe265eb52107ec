use diesel::prelude::*;

use crate::domain::category::{Category as DomainCategory, NewCategory as DomainNewCategory};
use crate::models::category::{Category as DbCategory, NewCategory as DbNewCategory};
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, CategoryWriter, DieselRepository};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<DomainCategory>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;
        let rows = categories::table
            .filter(categories::is_active.eq(true))
            .order(categories::name.asc())
            .load::<DbCategory>(&mut conn)?;

        Ok(rows.into_iter().map(DomainCategory::from).collect())
    }
}

impl CategoryWriter for DieselRepository {
    fn create_category(&self, new_category: &DomainNewCategory) -> RepositoryResult<DomainCategory> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(categories::table)
            .values(&DbNewCategory::from(new_category))
            .get_result::<DbCategory>(&mut conn)?;

        Ok(DomainCategory::from(created))
    }
}
