use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde_json::json;

use crate::auth::{self, AuthenticatedUser};
use crate::forms::auth::{LoginForm, RegisterForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::auth as auth_service;

#[post("/register")]
pub async fn register(
    repo: web::Data<DieselRepository>,
    form: web::Json<RegisterForm>,
) -> impl Responder {
    match auth_service::register(repo.get_ref(), form.into_inner()) {
        Ok(user) => HttpResponse::Ok().json(json!({
            "success": true,
            "user": { "id": user.id, "username": user.username, "email": user.email },
        })),
        Err(err) => error_response(err),
    }
}

#[post("/login")]
pub async fn login(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    form: web::Json<LoginForm>,
) -> impl Responder {
    match auth_service::authenticate(repo.get_ref(), form.into_inner()) {
        Ok(claims) => {
            if let Err(err) = auth::login(&req, &claims) {
                log::error!("Failed to attach identity: {err}");
                return HttpResponse::InternalServerError().finish();
            }
            HttpResponse::Ok().json(json!({ "success": true, "user": claims }))
        }
        Err(err) => error_response(err),
    }
}

#[post("/logout")]
pub async fn logout(identity: Option<Identity>) -> impl Responder {
    if let Some(identity) = identity {
        identity.logout();
    }
    HttpResponse::Ok().json(json!({ "success": true }))
}

#[get("/profile")]
pub async fn show_profile(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match auth_service::load_profile(repo.get_ref(), &user) {
        Ok(profile) => HttpResponse::Ok().json(json!({
            "success": true,
            "user": profile.user,
            "orders": profile.orders,
        })),
        Err(err) => error_response(err),
    }
}
