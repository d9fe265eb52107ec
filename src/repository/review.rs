use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::models::review::{
    NewReview as DbNewReview, Review as DbReview, UpdateReview as DbUpdateReview,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_product_reviews(
        &self,
        product_id: i32,
    ) -> RepositoryResult<Vec<(DomainReview, String)>> {
        use crate::schema::{reviews, users};

        let mut conn = self.conn()?;
        let rows = reviews::table
            .inner_join(users::table)
            .filter(reviews::product_id.eq(product_id))
            .order(reviews::created_at.desc())
            .select((DbReview::as_select(), users::username))
            .load::<(DbReview, String)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(review, username)| (DomainReview::from(review), username))
            .collect())
    }

    fn get_user_review(
        &self,
        user_id: i32,
        product_id: i32,
    ) -> RepositoryResult<Option<DomainReview>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let review = reviews::table
            .filter(reviews::user_id.eq(user_id))
            .filter(reviews::product_id.eq(product_id))
            .first::<DbReview>(&mut conn)
            .optional()?;

        Ok(review.map(DomainReview::from))
    }
}

impl ReviewWriter for DieselRepository {
    fn save_review(&self, new_review: &DomainNewReview) -> RepositoryResult<DomainReview> {
        use crate::schema::{products, reviews};

        let mut conn = self.conn()?;

        conn.transaction::<DomainReview, RepositoryError, _>(|conn| {
            let existing = reviews::table
                .filter(reviews::user_id.eq(new_review.user_id))
                .filter(reviews::product_id.eq(new_review.product_id))
                .first::<DbReview>(conn)
                .optional()?;

            let saved = match existing {
                Some(row) => diesel::update(reviews::table.filter(reviews::id.eq(row.id)))
                    .set(&DbUpdateReview::from(new_review))
                    .get_result::<DbReview>(conn)?,
                None => diesel::insert_into(reviews::table)
                    .values(&DbNewReview::from(new_review))
                    .get_result::<DbReview>(conn)?,
            };

            // Keep the denormalized product rating in step with the
            // review rows, rounded to one decimal place.
            let ratings: Vec<i32> = reviews::table
                .filter(reviews::product_id.eq(new_review.product_id))
                .select(reviews::rating)
                .load(conn)?;

            let average = if ratings.is_empty() {
                0.0
            } else {
                f64::from(ratings.iter().sum::<i32>()) / ratings.len() as f64
            };
            let rounded = (average * 10.0).round() / 10.0;

            diesel::update(products::table.filter(products::id.eq(new_review.product_id)))
                .set((
                    products::rating.eq(rounded),
                    products::updated_at.eq(new_review.updated_at),
                ))
                .execute(conn)?;

            Ok(DomainReview::from(saved))
        })
    }
}
