use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::orders;

#[get("/orders")]
pub async fn list_orders(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::list_user_orders(repo.get_ref(), &user) {
        Ok(items) => HttpResponse::Ok().json(json!({ "success": true, "orders": items })),
        Err(err) => error_response(err),
    }
}

#[get("/orders/{order_id}")]
pub async fn show_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match orders::get_user_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(json!({ "success": true, "order": order })),
        Err(err) => error_response(err),
    }
}

/// Called by the confirmation page; the first call moves the order from
/// `pending` to `processing`.
#[post("/orders/{order_id}/acknowledge")]
pub async fn acknowledge_order(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match orders::acknowledge_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(json!({ "success": true, "order": order })),
        Err(err) => error_response(err),
    }
}
