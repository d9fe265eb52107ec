use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products;

#[get("/")]
pub async fn show_index(repo: web::Data<DieselRepository>) -> impl Responder {
    match products::load_index_page(repo.get_ref()) {
        Ok(data) => HttpResponse::Ok().json(json!({
            "success": true,
            "products": data.products,
            "categories": data.categories,
        })),
        Err(err) => error_response(err),
    }
}

#[get("/products")]
pub async fn list_products(
    params: web::Query<products::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::load_products_page(repo.get_ref(), params.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(json!({
            "success": true,
            "products": data.products,
            "categories": data.categories,
            "search": data.search,
        })),
        Err(err) => error_response(err),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    repo: web::Data<DieselRepository>,
    path: web::Path<i32>,
) -> impl Responder {
    match products::load_product_detail(repo.get_ref(), path.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(json!({
            "success": true,
            "product": data.product,
            "reviews": data.reviews,
        })),
        Err(err) => error_response(err),
    }
}
