use chrono::NaiveDateTime;
use serde::Serialize;

use crate::auth::AuthenticatedUser;
use crate::domain::review::Review;
use crate::forms::reviews::SubmitReviewForm;
use crate::repository::{ProductReader, ReviewWriter};
use crate::services::{ServiceError, ServiceResult};

/// View of a review as exposed to clients.
#[derive(Debug, Serialize)]
pub struct ReviewView {
    pub rating: i32,
    pub content: String,
    pub username: String,
    pub created_at: NaiveDateTime,
}

impl From<(Review, String)> for ReviewView {
    fn from((review, username): (Review, String)) -> Self {
        Self {
            rating: review.rating,
            content: review.content,
            username,
            created_at: review.created_at,
        }
    }
}

/// Save the caller's review of a product. A resubmission replaces the
/// earlier review; the product's average rating is refreshed either way.
pub fn submit_review<R>(
    repo: &R,
    user: &AuthenticatedUser,
    product_id: i32,
    form: SubmitReviewForm,
) -> ServiceResult<ReviewView>
where
    R: ProductReader + ReviewWriter + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    let payload = form
        .into_new_review(user.id, product.id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let review = repo.save_review(&payload).map_err(ServiceError::from)?;

    Ok(ReviewView::from((review, user.username.clone())))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::product::{Product, ProductListQuery};
    use crate::domain::review::NewReview;
    use crate::repository::errors::RepositoryResult;
    use crate::repository::mock::{MockProductReader, MockReviewWriter};

    fn user() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            is_admin: false,
        }
    }

    fn product(id: i32) -> Product {
        Product {
            id,
            category_id: 1,
            name: format!("Product {id}"),
            description: "A product".to_string(),
            price_cents: 1000,
            discount_percent: 0,
            stock: 5,
            rating: 0.0,
            is_active: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    struct FakeRepo {
        product_reader: MockProductReader,
        review_writer: MockReviewWriter,
    }

    impl FakeRepo {
        fn new() -> Self {
            Self {
                product_reader: MockProductReader::new(),
                review_writer: MockReviewWriter::new(),
            }
        }
    }

    impl ProductReader for FakeRepo {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>> {
            self.product_reader.get_product_by_id(id)
        }

        fn list_products(
            &self,
            query: ProductListQuery,
        ) -> RepositoryResult<(usize, Vec<Product>)> {
            self.product_reader.list_products(query)
        }
    }

    impl ReviewWriter for FakeRepo {
        fn save_review(&self, new_review: &NewReview) -> RepositoryResult<Review> {
            self.review_writer.save_review(new_review)
        }
    }

    #[test]
    fn submit_review_saves_and_echoes_author() {
        let mut repo = FakeRepo::new();
        repo.product_reader
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id))));
        repo.review_writer
            .expect_save_review()
            .times(1)
            .withf(|new_review| {
                assert_eq!(new_review.user_id, 7);
                assert_eq!(new_review.product_id, 2);
                assert_eq!(new_review.rating, 4);
                assert_eq!(new_review.content, "solid");
                true
            })
            .returning(|new_review| {
                Ok(Review {
                    id: 1,
                    user_id: new_review.user_id,
                    product_id: new_review.product_id,
                    rating: new_review.rating,
                    content: new_review.content.clone(),
                    created_at: NaiveDateTime::default(),
                    updated_at: NaiveDateTime::default(),
                })
            });

        let form = SubmitReviewForm {
            rating: 4,
            comment: " solid ".to_string(),
        };

        let view = submit_review(&repo, &user(), 2, form).expect("expected success");
        assert_eq!(view.rating, 4);
        assert_eq!(view.username, "alice");
    }

    #[test]
    fn submit_review_requires_existing_product() {
        let mut repo = FakeRepo::new();
        repo.product_reader
            .expect_get_product_by_id()
            .returning(|_| Ok(None));

        let form = SubmitReviewForm {
            rating: 4,
            comment: String::new(),
        };

        let err = submit_review(&repo, &user(), 2, form).expect_err("expected failure");
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn submit_review_rejects_out_of_range_rating() {
        let mut repo = FakeRepo::new();
        repo.product_reader
            .expect_get_product_by_id()
            .returning(|id| Ok(Some(product(id))));

        let form = SubmitReviewForm {
            rating: 9,
            comment: String::new(),
        };

        let err = submit_review(&repo, &user(), 2, form).expect_err("expected failure");
        assert!(matches!(err, ServiceError::Form(_)));
    }
}
