pub mod auth;
pub mod db;
pub mod domain;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Value-added tax applied to cart and order totals, in percent.
pub const TAX_RATE_PERCENT: i64 = 18;
