use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::review::NewReview;

/// Result type returned by the review payload helpers.
pub type ReviewFormResult<T> = Result<T, ReviewFormError>;

/// Errors that can occur while processing review payloads.
#[derive(Debug, Error)]
pub enum ReviewFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

/// JSON payload submitted when rating a product. An empty comment is
/// allowed; a rating is not optional.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitReviewForm {
    /// Star rating, 1 to 5.
    #[validate(range(min = 1, max = 5))]
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

impl SubmitReviewForm {
    /// Validates the payload into a domain `NewReview`.
    pub fn into_new_review(self, user_id: i32, product_id: i32) -> ReviewFormResult<NewReview> {
        self.validate()?;

        Ok(NewReview::new(
            user_id,
            product_id,
            self.rating,
            self.comment.trim(),
        ))
    }
}
