use actix_web::{HttpResponse, Responder, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::orders;

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: String,
}

#[post("/orders/{order_id}/status")]
pub async fn update_order_status(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
    payload: web::Json<UpdateStatusPayload>,
) -> impl Responder {
    match orders::set_order_status(repo.get_ref(), &user, path.into_inner(), &payload.status) {
        Ok(order) => HttpResponse::Ok().json(json!({ "success": true, "order": order })),
        Err(err) => error_response(err),
    }
}
