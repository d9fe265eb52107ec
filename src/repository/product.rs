use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery, ProductSort,
};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(DomainProduct::from))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let ProductListQuery {
            category_id,
            search,
            min_price_cents,
            max_price_cents,
            in_stock,
            sort,
            pagination,
        } = query;

        let search_pattern = search.as_ref().map(|term| format!("%{term}%"));

        let mut count_query = products::table
            .filter(products::is_active.eq(true))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = category_id {
            count_query = count_query.filter(products::category_id.eq(category));
        }

        if let Some(ref pattern) = search_pattern {
            count_query = count_query.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern.clone())),
            );
        }

        if let Some(min) = min_price_cents {
            count_query = count_query.filter(products::price_cents.ge(min));
        }

        if let Some(max) = max_price_cents {
            count_query = count_query.filter(products::price_cents.le(max));
        }

        if in_stock {
            count_query = count_query.filter(products::stock.gt(0));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = products::table
            .filter(products::is_active.eq(true))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category) = category_id {
            items = items.filter(products::category_id.eq(category));
        }

        if let Some(ref pattern) = search_pattern {
            items = items.filter(
                products::name
                    .like(pattern.clone())
                    .or(products::description.like(pattern.clone())),
            );
        }

        if let Some(min) = min_price_cents {
            items = items.filter(products::price_cents.ge(min));
        }

        if let Some(max) = max_price_cents {
            items = items.filter(products::price_cents.le(max));
        }

        if in_stock {
            items = items.filter(products::stock.gt(0));
        }

        items = match sort {
            ProductSort::PriceAsc => items.order(products::price_cents.asc()),
            ProductSort::PriceDesc => items.order(products::price_cents.desc()),
            ProductSort::NameAsc => items.order(products::name.asc()),
            ProductSort::NameDesc => items.order(products::name.desc()),
            ProductSort::Newest => items.order(products::created_at.desc()),
        };

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items = items.offset(offset).limit(limit);
        }

        let rows = items.load::<DbProduct>(&mut conn)?;

        Ok((total, rows.into_iter().map(DomainProduct::from).collect()))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let created = diesel::insert_into(products::table)
            .values(&DbNewProduct::from(new_product))
            .get_result::<DbProduct>(&mut conn)?;

        Ok(DomainProduct::from(created))
    }
}
