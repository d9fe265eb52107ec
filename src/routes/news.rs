use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::news;

#[get("/news")]
pub async fn list_news(repo: web::Data<DieselRepository>) -> impl Responder {
    match news::list_news(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(json!({ "success": true, "news": items })),
        Err(err) => error_response(err),
    }
}

#[get("/news/{news_id}")]
pub async fn show_news(repo: web::Data<DieselRepository>, path: web::Path<i32>) -> impl Responder {
    match news::get_news(repo.get_ref(), path.into_inner()) {
        Ok(article) => HttpResponse::Ok().json(json!({ "success": true, "news": article })),
        Err(err) => error_response(err),
    }
}
