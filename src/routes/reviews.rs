use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::reviews::SubmitReviewForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::reviews;

#[post("/products/{product_id}/reviews")]
pub async fn submit_review(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    form: web::Json<SubmitReviewForm>,
) -> impl Responder {
    match reviews::submit_review(repo.get_ref(), &user, path.into_inner(), form.into_inner()) {
        Ok(review) => HttpResponse::Ok().json(json!({ "success": true, "review": review })),
        Err(err) => error_response(err),
    }
}
