use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::cards::AddCardForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::cards;

#[get("/credit-cards")]
pub async fn list_cards(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match cards::list_cards(repo.get_ref(), &user) {
        Ok(items) => HttpResponse::Ok().json(json!({ "success": true, "cards": items })),
        Err(err) => error_response(err),
    }
}

#[post("/credit-cards")]
pub async fn add_card(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCardForm>,
) -> impl Responder {
    match cards::create_card(repo.get_ref(), &user, form.into_inner()) {
        Ok(card) => HttpResponse::Ok().json(json!({ "success": true, "card": card })),
        Err(err) => error_response(err),
    }
}

#[delete("/credit-cards/{card_id}")]
pub async fn delete_card(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match cards::delete_card(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(err) => error_response(err),
    }
}
