use std::sync::Arc;
use std::sync::Barrier;
use std::thread;

use storefront::auth::AuthenticatedUser;
use storefront::domain::address::NewAddress;
use storefront::domain::cart::{Cart, CartLine};
use storefront::domain::category::NewCategory;
use storefront::domain::credit_card::NewCreditCard;
use storefront::domain::order::OrderStatus;
use storefront::domain::product::NewProduct;
use storefront::domain::user::NewUser;
use storefront::forms::cart::AddToCartPayload;
use storefront::forms::checkout::CheckoutPayload;
use diesel::prelude::*;
use storefront::repository::{
    AddressWriter, CategoryWriter, CreditCardWriter, DieselRepository, ProductReader,
    ProductWriter, UserWriter,
};
use storefront::services::{ServiceError, cart as cart_service, checkout, orders};

mod common;

struct Shopper {
    user: AuthenticatedUser,
    address_id: i32,
    credit_card_id: i32,
}

impl Shopper {
    fn checkout_payload(&self) -> CheckoutPayload {
        CheckoutPayload {
            address_id: self.address_id,
            credit_card_id: self.credit_card_id,
        }
    }
}

fn seed_shopper(repo: &DieselRepository, username: &str, email: &str) -> Shopper {
    let user = repo
        .create_user(&NewUser::new(username, email, "hash"))
        .expect("create user");

    let address = repo
        .create_address(
            &NewAddress::new(user.id, "Home", "1 Main St", "Springfield", "12345", "5551234")
                .default_address(),
        )
        .expect("create address");

    let card = repo
        .create_credit_card(
            &NewCreditCard::new(user.id, "Personal", "4111111111111111", username, 12, 2030)
                .default_card(),
        )
        .expect("create card");

    Shopper {
        user: AuthenticatedUser {
            id: user.id,
            username: user.username,
            email: user.email,
            is_admin: false,
        },
        address_id: address.id,
        credit_card_id: card.id,
    }
}

fn seed_product(repo: &DieselRepository, name: &str, price_cents: i64, stock: i32) -> i32 {
    let category = repo
        .create_category(&NewCategory::new(format!("Category for {name}")))
        .expect("create category");
    repo.create_product(&NewProduct::new(category.id, name, "Description", price_cents).with_stock(stock))
        .expect("create product")
        .id
}

fn add(repo: &DieselRepository, cart: &mut Cart, product_id: i32, quantity: i32) {
    cart_service::add_to_cart(
        repo,
        cart,
        AddToCartPayload {
            product_id,
            quantity,
        },
    )
    .expect("add to cart");
}

#[test]
fn test_checkout_commits_order_items_and_stock_together() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shopper = seed_shopper(&repo, "alice", "alice@example.com");

    let product_a = seed_product(&repo, "Product A", 1000, 5);
    let product_b = seed_product(&repo, "Product B", 500, 3);

    let mut cart = Cart::default();
    add(&repo, &mut cart, product_a, 2);
    add(&repo, &mut cart, product_b, 1);

    let order = checkout::place_order(&repo, &shopper.user, &mut cart, shopper.checkout_payload())
        .expect("checkout");

    // 25.00 subtotal, 18% tax included.
    assert_eq!(order.total_cents, 2950);
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.items.len(), 2);
    assert!(cart.is_empty());

    let stock_a = repo
        .get_product_by_id(product_a)
        .expect("get product")
        .expect("product exists")
        .stock;
    let stock_b = repo
        .get_product_by_id(product_b)
        .expect("get product")
        .expect("product exists")
        .stock;
    assert_eq!(stock_a, 3);
    assert_eq!(stock_b, 2);

    let persisted = orders::get_user_order(&repo, &shopper.user, order.id).expect("get order");
    assert_eq!(persisted.total_cents, 2950);
    assert_eq!(persisted.item_count(), 3);
}

#[test]
fn test_order_total_is_immune_to_later_price_changes() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shopper = seed_shopper(&repo, "alice", "alice@example.com");
    let product_id = seed_product(&repo, "Product A", 1000, 5);

    let mut cart = Cart::default();
    add(&repo, &mut cart, product_id, 1);

    let order = checkout::place_order(&repo, &shopper.user, &mut cart, shopper.checkout_payload())
        .expect("checkout");
    assert_eq!(order.items[0].price_cents, 1000);

    // A later catalog price change must not leak into the stored order.
    use storefront::schema::products;
    let mut conn = test_db.pool().get().expect("connection");
    diesel::update(products::table.filter(products::id.eq(product_id)))
        .set(products::price_cents.eq(99_999_i64))
        .execute(&mut conn)
        .expect("price update");

    let persisted = orders::get_user_order(&repo, &shopper.user, order.id).expect("get order");
    assert_eq!(persisted.total_cents, 1180);
    assert_eq!(persisted.items[0].price_cents, 1000);
}

#[test]
fn test_stale_cart_fails_at_commit_time_with_no_partial_state() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shopper = seed_shopper(&repo, "alice", "alice@example.com");

    let product_a = seed_product(&repo, "Product A", 1000, 5);
    let product_b = seed_product(&repo, "Product B", 500, 1);

    // A stale session cart that was filled before product B sold down.
    let mut cart = Cart::default();
    cart.upsert(CartLine {
        product_id: product_a,
        name: "Product A".to_string(),
        unit_price_cents: 1000,
        quantity: 1,
    });
    cart.upsert(CartLine {
        product_id: product_b,
        name: "Product B".to_string(),
        unit_price_cents: 500,
        quantity: 2,
    });

    let err = checkout::place_order(&repo, &shopper.user, &mut cart, shopper.checkout_payload())
        .expect_err("expected failure");

    match err {
        ServiceError::InsufficientStock {
            product_id,
            available,
            ..
        } => {
            assert_eq!(product_id, product_b);
            assert_eq!(available, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // All-or-nothing: the decrement of product A rolled back and no
    // order row survived.
    assert_eq!(
        repo.get_product_by_id(product_a)
            .expect("get product")
            .expect("product exists")
            .stock,
        5
    );
    assert_eq!(
        repo.get_product_by_id(product_b)
            .expect("get product")
            .expect("product exists")
            .stock,
        1
    );
    assert!(
        orders::list_user_orders(&repo, &shopper.user)
            .expect("list orders")
            .is_empty()
    );
    assert!(!cart.is_empty());
}

#[test]
fn test_two_sequential_checkouts_cannot_oversell_the_last_unit() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let alice = seed_shopper(&repo, "alice", "alice@example.com");
    let bob = seed_shopper(&repo, "bob", "bob@example.com");
    let product_id = seed_product(&repo, "Last One", 1000, 1);

    // Both carts were filled while the unit was still available.
    let mut alice_cart = Cart::default();
    add(&repo, &mut alice_cart, product_id, 1);
    let mut bob_cart = Cart::default();
    add(&repo, &mut bob_cart, product_id, 1);

    checkout::place_order(&repo, &alice.user, &mut alice_cart, alice.checkout_payload())
        .expect("first checkout");

    let err = checkout::place_order(&repo, &bob.user, &mut bob_cart, bob.checkout_payload())
        .expect_err("expected failure");
    assert!(matches!(
        err,
        ServiceError::InsufficientStock { available: 0, .. }
    ));

    assert_eq!(
        repo.get_product_by_id(product_id)
            .expect("get product")
            .expect("product exists")
            .stock,
        0
    );
    assert!(
        orders::list_user_orders(&repo, &bob.user)
            .expect("list orders")
            .is_empty()
    );
}

#[test]
fn test_two_concurrent_checkouts_exactly_one_succeeds() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let alice = seed_shopper(&repo, "alice", "alice@example.com");
    let bob = seed_shopper(&repo, "bob", "bob@example.com");
    let product_id = seed_product(&repo, "Last One", 1000, 1);

    let mut alice_cart = Cart::default();
    add(&repo, &mut alice_cart, product_id, 1);
    let mut bob_cart = Cart::default();
    add(&repo, &mut bob_cart, product_id, 1);

    let barrier = Arc::new(Barrier::new(2));
    let mut handles = Vec::new();

    for (shopper, mut cart) in [(alice, alice_cart), (bob, bob_cart)] {
        let repo = repo.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            checkout::place_order(&repo, &shopper.user, &mut cart, shopper.checkout_payload())
        }));
    }

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    let successes = results.iter().filter(|result| result.is_ok()).count();
    assert_eq!(successes, 1);

    for result in &results {
        if let Err(err) = result {
            assert!(matches!(
                err,
                ServiceError::InsufficientStock { available: 0, .. }
            ));
        }
    }

    assert_eq!(
        repo.get_product_by_id(product_id)
            .expect("get product")
            .expect("product exists")
            .stock,
        0
    );
}

#[test]
fn test_acknowledge_flips_pending_to_processing_exactly_once() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shopper = seed_shopper(&repo, "alice", "alice@example.com");
    let product_id = seed_product(&repo, "Product A", 1000, 5);

    let mut cart = Cart::default();
    add(&repo, &mut cart, product_id, 1);

    let order = checkout::place_order(&repo, &shopper.user, &mut cart, shopper.checkout_payload())
        .expect("checkout");
    assert_eq!(order.status, OrderStatus::Pending);

    let acknowledged =
        orders::acknowledge_order(&repo, &shopper.user, order.id).expect("acknowledge");
    assert_eq!(acknowledged.status, OrderStatus::Processing);

    let again = orders::acknowledge_order(&repo, &shopper.user, order.id).expect("acknowledge");
    assert_eq!(again.status, OrderStatus::Processing);
    assert_eq!(again.updated_at, acknowledged.updated_at);
}

#[test]
fn test_admin_status_transitions_follow_the_table() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let shopper = seed_shopper(&repo, "alice", "alice@example.com");
    let product_id = seed_product(&repo, "Product A", 1000, 5);

    let admin = AuthenticatedUser {
        id: 999,
        username: "root".to_string(),
        email: "root@example.com".to_string(),
        is_admin: true,
    };

    let mut cart = Cart::default();
    add(&repo, &mut cart, product_id, 1);
    let order = checkout::place_order(&repo, &shopper.user, &mut cart, shopper.checkout_payload())
        .expect("checkout");

    // The buyer cannot drive admin transitions.
    let err = orders::set_order_status(&repo, &shopper.user, order.id, "shipped")
        .expect_err("expected failure");
    assert!(matches!(err, ServiceError::Unauthorized));

    // pending -> shipped skips processing and is rejected.
    let err = orders::set_order_status(&repo, &admin, order.id, "shipped")
        .expect_err("expected failure");
    assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));

    let order = orders::set_order_status(&repo, &admin, order.id, "processing")
        .expect("processing transition");
    let order =
        orders::set_order_status(&repo, &admin, order.id, "shipped").expect("shipped transition");
    let order = orders::set_order_status(&repo, &admin, order.id, "delivered")
        .expect("delivered transition");
    assert_eq!(order.status, OrderStatus::Delivered);

    let err = orders::set_order_status(&repo, &admin, order.id, "cancelled")
        .expect_err("expected failure");
    assert!(matches!(err, ServiceError::InvalidStatusTransition { .. }));

    let err = orders::set_order_status(&repo, &admin, order.id, "teleported")
        .expect_err("expected failure");
    assert!(matches!(err, ServiceError::InvalidStatus(_)));
}

#[test]
fn test_cart_view_reconciles_against_live_stock() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let alice = seed_shopper(&repo, "alice", "alice@example.com");
    let product_id = seed_product(&repo, "Product A", 1000, 3);

    // Bob fills his cart, then Alice buys most of the stock.
    let mut bob_cart = Cart::default();
    add(&repo, &mut bob_cart, product_id, 3);

    let mut alice_cart = Cart::default();
    add(&repo, &mut alice_cart, product_id, 2);
    checkout::place_order(&repo, &alice.user, &mut alice_cart, alice.checkout_payload())
        .expect("checkout");

    let view = cart_service::view_cart(&repo, &mut bob_cart).expect("view cart");
    assert_eq!(view.lines.len(), 1);
    assert_eq!(view.lines[0].quantity, 1);
    assert_eq!(view.lines[0].stock, 1);
    assert_eq!(view.totals.subtotal_cents, 1000);
    assert_eq!(bob_cart.item_count(), 1);
}
