use std::env;

use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use storefront::db::establish_connection_pool;
use storefront::repository::DieselRepository;
use storefront::routes::addresses::{add_address, delete_address, list_addresses};
use storefront::routes::admin::update_order_status;
use storefront::routes::auth::{login, logout, register, show_profile};
use storefront::routes::cards::{add_card, delete_card, list_cards};
use storefront::routes::cart::{add_to_cart, clear_cart, remove_from_cart, update_cart, view_cart};
use storefront::routes::checkout::create_order;
use storefront::routes::news::{list_news, show_news};
use storefront::routes::orders::{acknowledge_order, list_orders, show_order};
use storefront::routes::products::{list_products, show_index, show_product};
use storefront::routes::reviews::submit_review;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let secret_key = match env::var("SECRET_KEY") {
        Ok(key) => Key::from(key.as_bytes()),
        Err(_) => Key::generate(),
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(false) // set to true in prod
                    .build(),
            )
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(show_index)
            .service(list_products)
            .service(show_product)
            .service(submit_review)
            .service(list_news)
            .service(show_news)
            .service(view_cart)
            .service(add_to_cart)
            .service(update_cart)
            .service(remove_from_cart)
            .service(clear_cart)
            .service(create_order)
            .service(list_orders)
            .service(show_order)
            .service(acknowledge_order)
            .service(list_addresses)
            .service(add_address)
            .service(delete_address)
            .service(list_cards)
            .service(add_card)
            .service(delete_card)
            .service(register)
            .service(login)
            .service(logout)
            .service(show_profile)
            .service(web::scope("/admin").service(update_order_status))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
