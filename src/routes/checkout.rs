use actix_session::Session;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::checkout::CheckoutPayload;
use crate::repository::DieselRepository;
use crate::routes::{error_response, load_cart, session_error_response, store_cart};
use crate::services::checkout;

#[post("/orders")]
pub async fn create_order(
    user: AuthenticatedUser,
    session: Session,
    repo: web::Data<DieselRepository>,
    payload: web::Json<CheckoutPayload>,
) -> impl Responder {
    let mut cart = load_cart(&session);

    match checkout::place_order(repo.get_ref(), &user, &mut cart, payload.into_inner()) {
        Ok(order) => {
            // The cart is empty after a successful checkout.
            if let Err(err) = store_cart(&session, &cart) {
                return session_error_response(err);
            }
            HttpResponse::Ok().json(json!({ "success": true, "order_id": order.id }))
        }
        Err(err) => error_response(err),
    }
}
