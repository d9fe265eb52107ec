//! Seeds the database with an admin account and a starter catalog.

use std::env;

use dotenvy::dotenv;

use storefront::auth::hash_password;
use storefront::db::establish_connection_pool;
use storefront::domain::category::NewCategory;
use storefront::domain::news::NewNewsArticle;
use storefront::domain::product::NewProduct;
use storefront::domain::user::NewUser;
use storefront::repository::{
    CategoryWriter, DieselRepository, NewsWriter, ProductWriter, UserReader, UserWriter,
};

const ADMIN_EMAIL: &str = "admin@example.com";
const ADMIN_PASSWORD: &str = "admin123";

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    if let Err(e) = seed(&repo) {
        log::error!("Seeding failed: {e}");
        std::process::exit(1);
    }

    log::info!("Database seeded. Admin login: {ADMIN_EMAIL} / {ADMIN_PASSWORD}");
}

fn seed(repo: &DieselRepository) -> Result<(), Box<dyn std::error::Error>> {
    let admin = match repo.get_user_by_email(ADMIN_EMAIL)? {
        Some(existing) => existing,
        None => {
            let password_hash = hash_password(ADMIN_PASSWORD)?;
            let created =
                repo.create_user(&NewUser::new("admin", ADMIN_EMAIL, password_hash).admin())?;
            log::info!("Created admin account");
            created
        }
    };

    let electronics = repo.create_category(
        &NewCategory::new("Electronics")
            .with_description("Phones, laptops and accessories")
            .with_icon("laptop", "#0d6efd"),
    )?;
    let home = repo.create_category(
        &NewCategory::new("Home & Kitchen")
            .with_description("Everything for the house")
            .with_icon("house", "#198754"),
    )?;

    repo.create_product(
        &NewProduct::new(
            electronics.id,
            "Wireless Headphones",
            "Over-ear headphones with active noise cancelling.",
            12999,
        )
        .with_stock(25)
        .with_discount(10),
    )?;
    repo.create_product(
        &NewProduct::new(
            electronics.id,
            "Mechanical Keyboard",
            "Tenkeyless board with hot-swappable switches.",
            8999,
        )
        .with_stock(40),
    )?;
    repo.create_product(
        &NewProduct::new(
            home.id,
            "Pour-Over Coffee Kit",
            "Dripper, server and a pack of filters.",
            3499,
        )
        .with_stock(60)
        .with_discount(15),
    )?;

    repo.create_news(
        &NewNewsArticle::new(
            admin.id,
            "Grand opening",
            "The storefront is live. Browse the catalog and tell us what you think.",
        )
        .with_summary("We are open for business")
        .published(),
    )?;

    Ok(())
}
