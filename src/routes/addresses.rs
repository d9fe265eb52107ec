use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::addresses::AddAddressForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::addresses;

#[get("/addresses")]
pub async fn list_addresses(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match addresses::list_addresses(repo.get_ref(), &user) {
        Ok(items) => HttpResponse::Ok().json(json!({ "success": true, "addresses": items })),
        Err(err) => error_response(err),
    }
}

#[post("/addresses")]
pub async fn add_address(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddAddressForm>,
) -> impl Responder {
    match addresses::create_address(repo.get_ref(), &user, form.into_inner()) {
        Ok(address) => HttpResponse::Ok().json(json!({ "success": true, "address": address })),
        Err(err) => error_response(err),
    }
}

#[delete("/addresses/{address_id}")]
pub async fn delete_address(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match addresses::delete_address(repo.get_ref(), &user, path.into_inner()) {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(err) => error_response(err),
    }
}
