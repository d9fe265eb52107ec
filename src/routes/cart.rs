use actix_session::Session;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::cart::{AddToCartPayload, RemoveCartPayload, UpdateCartPayload};
use crate::repository::DieselRepository;
use crate::routes::{error_response, load_cart, session_error_response, store_cart};
use crate::services::cart as cart_service;

#[get("/cart")]
pub async fn view_cart(session: Session, repo: web::Data<DieselRepository>) -> impl Responder {
    let mut cart = load_cart(&session);

    match cart_service::view_cart(repo.get_ref(), &mut cart) {
        Ok(view) => {
            // Reconciliation may have dropped or clamped lines; write
            // the corrected cart back before responding.
            if let Err(err) = store_cart(&session, &cart) {
                return session_error_response(err);
            }
            HttpResponse::Ok().json(json!({ "success": true, "cart": view }))
        }
        Err(err) => error_response(err),
    }
}

#[post("/cart/add")]
pub async fn add_to_cart(
    _user: AuthenticatedUser,
    session: Session,
    repo: web::Data<DieselRepository>,
    payload: web::Json<AddToCartPayload>,
) -> impl Responder {
    let mut cart = load_cart(&session);

    match cart_service::add_to_cart(repo.get_ref(), &mut cart, payload.into_inner()) {
        Ok(summary) => {
            if let Err(err) = store_cart(&session, &cart) {
                return session_error_response(err);
            }
            HttpResponse::Ok().json(json!({ "success": true, "cart_count": summary.item_count }))
        }
        Err(err) => error_response(err),
    }
}

#[post("/cart/update")]
pub async fn update_cart(
    _user: AuthenticatedUser,
    session: Session,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UpdateCartPayload>,
) -> impl Responder {
    let mut cart = load_cart(&session);

    match cart_service::update_cart(repo.get_ref(), &mut cart, payload.into_inner()) {
        Ok(totals) => {
            if let Err(err) = store_cart(&session, &cart) {
                return session_error_response(err);
            }
            HttpResponse::Ok().json(json!({ "success": true, "totals": totals }))
        }
        Err(err) => error_response(err),
    }
}

#[post("/cart/remove")]
pub async fn remove_from_cart(
    _user: AuthenticatedUser,
    session: Session,
    payload: web::Json<RemoveCartPayload>,
) -> impl Responder {
    let mut cart = load_cart(&session);

    let outcome = cart_service::remove_from_cart(&mut cart, payload.product_id);
    if let Err(err) = store_cart(&session, &cart) {
        return session_error_response(err);
    }

    HttpResponse::Ok().json(json!({
        "success": true,
        "removed": outcome.removed,
        "cart_count": outcome.item_count,
    }))
}

#[post("/cart/clear")]
pub async fn clear_cart(_user: AuthenticatedUser, session: Session) -> impl Responder {
    session.remove(super::CART_SESSION_KEY);
    HttpResponse::Ok().json(json!({ "success": true }))
}
