use serde::Serialize;

use crate::domain::cart::{Cart, CartLine, CartTotals};
use crate::forms::cart::{AddToCartPayload, UpdateCartPayload};
use crate::repository::ProductReader;
use crate::services::{ServiceError, ServiceResult};

/// Item count reported after a cart mutation.
#[derive(Debug, Serialize)]
pub struct CartSummary {
    pub item_count: i32,
}

/// Outcome of a removal; removing an absent line is not an error.
#[derive(Debug, Serialize)]
pub struct RemovalOutcome {
    pub removed: bool,
    pub item_count: i32,
}

/// One reconciled cart line, annotated with live stock for the client.
#[derive(Debug, Serialize)]
pub struct CartLineView {
    pub product_id: i32,
    pub name: String,
    pub unit_price_cents: i64,
    pub quantity: i32,
    pub stock: i32,
}

/// The reconciled cart with totals computed from live prices.
#[derive(Debug, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub totals: CartTotals,
}

/// Add a product to the cart, snapshotting the current discounted unit
/// price. Fails without mutating the cart when the product is missing,
/// inactive, or the requested quantity exceeds stock.
pub fn add_to_cart<R>(
    repo: &R,
    cart: &mut Cart,
    payload: AddToCartPayload,
) -> ServiceResult<CartSummary>
where
    R: ProductReader + ?Sized,
{
    let payload = payload
        .validated()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let product = repo
        .get_product_by_id(payload.product_id)
        .map_err(ServiceError::from)?
        .filter(|product| product.is_active)
        .ok_or(ServiceError::NotFound)?;

    if product.stock < payload.quantity {
        return Err(ServiceError::InsufficientStock {
            product_id: product.id,
            name: product.name,
            available: product.stock,
        });
    }

    cart.upsert(CartLine {
        product_id: product.id,
        name: product.name.clone(),
        unit_price_cents: product.current_price_cents(),
        quantity: payload.quantity,
    });

    Ok(CartSummary {
        item_count: cart.item_count(),
    })
}

/// Set a line's quantity. Fails without mutating the cart when the line
/// or product is gone, the quantity is non-positive, or stock cannot
/// satisfy it; the stock error advertises the maximum available.
pub fn update_cart<R>(
    repo: &R,
    cart: &mut Cart,
    payload: UpdateCartPayload,
) -> ServiceResult<CartTotals>
where
    R: ProductReader + ?Sized,
{
    if cart.line(payload.product_id).is_none() {
        return Err(ServiceError::NotFound);
    }

    let product = repo
        .get_product_by_id(payload.product_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if payload.quantity <= 0 {
        return Err(ServiceError::InvalidQuantity);
    }

    if product.stock < payload.quantity {
        return Err(ServiceError::InsufficientStock {
            product_id: product.id,
            name: product.name,
            available: product.stock,
        });
    }

    if let Some(line) = cart.line_mut(payload.product_id) {
        line.quantity = payload.quantity;
    }

    Ok(cart.totals())
}

/// Remove a line if present. Idempotent.
pub fn remove_from_cart(cart: &mut Cart, product_id: i32) -> RemovalOutcome {
    let removed = cart.remove(product_id);
    RemovalOutcome {
        removed,
        item_count: cart.item_count(),
    }
}

/// Reconcile the cart against the live catalog: drop lines whose
/// product vanished, clamp quantities to stock, and refresh unit prices
/// to the current discounted price. The returned totals always derive
/// from live prices, never from stale snapshots.
pub fn view_cart<R>(repo: &R, cart: &mut Cart) -> ServiceResult<CartView>
where
    R: ProductReader + ?Sized,
{
    let mut lines = Vec::new();

    for product_id in cart.product_ids() {
        let product = repo
            .get_product_by_id(product_id)
            .map_err(ServiceError::from)?;

        let Some(product) = product else {
            cart.remove(product_id);
            continue;
        };

        if let Some(line) = cart.line_mut(product_id) {
            line.name = product.name.clone();
            line.unit_price_cents = product.current_price_cents();
            if line.quantity > product.stock {
                line.quantity = product.stock;
            }

            lines.push(CartLineView {
                product_id,
                name: line.name.clone(),
                unit_price_cents: line.unit_price_cents,
                quantity: line.quantity,
                stock: product.stock,
            });
        }
    }

    Ok(CartView {
        lines,
        totals: cart.totals(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::domain::product::Product;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockProductReader;

    fn sample_product(id: i32, price_cents: i64, stock: i32) -> Product {
        Product {
            id,
            category_id: 1,
            name: format!("Product {id}"),
            description: "A product".to_string(),
            price_cents,
            discount_percent: 0,
            stock,
            rating: 0.0,
            is_active: true,
            created_at: NaiveDateTime::default(),
            updated_at: NaiveDateTime::default(),
        }
    }

    fn add_payload(product_id: i32, quantity: i32) -> AddToCartPayload {
        AddToCartPayload {
            product_id,
            quantity,
        }
    }

    #[test]
    fn add_to_cart_inserts_and_increments() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 10))));

        let mut cart = Cart::default();

        let summary =
            add_to_cart(&repo, &mut cart, add_payload(1, 2)).expect("expected success");
        assert_eq!(summary.item_count, 2);

        let summary =
            add_to_cart(&repo, &mut cart, add_payload(1, 3)).expect("expected success");
        assert_eq!(summary.item_count, 5);
        assert_eq!(cart.line(1).map(|line| line.quantity), Some(5));
    }

    #[test]
    fn add_to_cart_snapshots_discounted_price() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().returning(|id| {
            let mut product = sample_product(id, 1000, 10);
            product.discount_percent = 25;
            Ok(Some(product))
        });

        let mut cart = Cart::default();
        add_to_cart(&repo, &mut cart, add_payload(1, 1)).expect("expected success");

        assert_eq!(cart.line(1).map(|line| line.unit_price_cents), Some(750));
    }

    #[test]
    fn add_to_cart_rejects_oversized_quantity() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 2))));

        let mut cart = Cart::default();
        let err =
            add_to_cart(&repo, &mut cart, add_payload(1, 3)).expect_err("expected failure");

        assert!(matches!(
            err,
            ServiceError::InsufficientStock { available: 2, .. }
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn add_to_cart_rejects_missing_or_inactive_product() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().returning(|id| match id {
            1 => Ok(None),
            _ => {
                let mut product = sample_product(id, 1000, 5);
                product.is_active = false;
                Ok(Some(product))
            }
        });

        let mut cart = Cart::default();
        assert!(matches!(
            add_to_cart(&repo, &mut cart, add_payload(1, 1)),
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            add_to_cart(&repo, &mut cart, add_payload(2, 1)),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn add_to_cart_rejects_non_positive_quantity_as_form_error() {
        let repo = MockProductReader::new();
        let mut cart = Cart::default();

        assert!(matches!(
            add_to_cart(&repo, &mut cart, add_payload(1, 0)),
            Err(ServiceError::Form(_))
        ));
    }

    #[test]
    fn update_cart_recomputes_totals() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 10))));

        let mut cart = Cart::default();
        add_to_cart(&repo, &mut cart, add_payload(1, 1)).expect("expected success");

        let totals = update_cart(
            &repo,
            &mut cart,
            UpdateCartPayload {
                product_id: 1,
                quantity: 3,
            },
        )
        .expect("expected success");

        assert_eq!(totals.subtotal_cents, 3000);
        assert_eq!(totals.tax_cents, 540);
        assert_eq!(totals.grand_total_cents, 3540);
    }

    #[test]
    fn update_cart_requires_existing_line() {
        let repo = MockProductReader::new();
        let mut cart = Cart::default();

        let err = update_cart(
            &repo,
            &mut cart,
            UpdateCartPayload {
                product_id: 9,
                quantity: 1,
            },
        )
        .expect_err("expected failure");

        assert!(matches!(err, ServiceError::NotFound));
    }

    #[test]
    fn update_cart_rejects_non_positive_quantity() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 10))));

        let mut cart = Cart::default();
        add_to_cart(&repo, &mut cart, add_payload(1, 2)).expect("expected success");

        let err = update_cart(
            &repo,
            &mut cart,
            UpdateCartPayload {
                product_id: 1,
                quantity: 0,
            },
        )
        .expect_err("expected failure");

        assert!(matches!(err, ServiceError::InvalidQuantity));
        assert_eq!(cart.line(1).map(|line| line.quantity), Some(2));
    }

    #[test]
    fn update_cart_over_stock_leaves_cart_untouched_and_reports_ceiling() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 4))));

        let mut cart = Cart::default();
        add_to_cart(&repo, &mut cart, add_payload(1, 2)).expect("expected success");

        let err = update_cart(
            &repo,
            &mut cart,
            UpdateCartPayload {
                product_id: 1,
                quantity: 5,
            },
        )
        .expect_err("expected failure");

        assert!(matches!(
            err,
            ServiceError::InsufficientStock { available: 4, .. }
        ));
        assert_eq!(cart.line(1).map(|line| line.quantity), Some(2));
    }

    #[test]
    fn remove_from_cart_reports_whether_removal_occurred() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 10))));

        let mut cart = Cart::default();
        add_to_cart(&repo, &mut cart, add_payload(1, 2)).expect("expected success");

        let outcome = remove_from_cart(&mut cart, 1);
        assert!(outcome.removed);
        assert_eq!(outcome.item_count, 0);

        let outcome = remove_from_cart(&mut cart, 1);
        assert!(!outcome.removed);
    }

    #[test]
    fn view_cart_drops_vanished_products() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().returning(|id| match id {
            1 => Ok(Some(sample_product(1, 1000, 10))),
            _ => Ok(None),
        });

        let mut cart = Cart::default();
        cart.upsert(CartLine {
            product_id: 1,
            name: "Product 1".to_string(),
            unit_price_cents: 1000,
            quantity: 1,
        });
        cart.upsert(CartLine {
            product_id: 2,
            name: "Deleted".to_string(),
            unit_price_cents: 500,
            quantity: 3,
        });

        let view = view_cart(&repo, &mut cart).expect("expected success");

        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].product_id, 1);
        assert!(cart.line(2).is_none());
        assert_eq!(view.totals.subtotal_cents, 1000);
    }

    #[test]
    fn view_cart_clamps_quantity_to_stock() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|id| Ok(Some(sample_product(id, 1000, 2))));

        let mut cart = Cart::default();
        cart.upsert(CartLine {
            product_id: 1,
            name: "Product 1".to_string(),
            unit_price_cents: 1000,
            quantity: 5,
        });

        let view = view_cart(&repo, &mut cart).expect("expected success");

        assert_eq!(view.lines[0].quantity, 2);
        assert_eq!(view.totals.subtotal_cents, 2000);
    }

    #[test]
    fn view_cart_recomputes_totals_from_live_prices() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id().returning(|id| {
            let mut product = sample_product(id, 2000, 10);
            product.discount_percent = 10;
            Ok(Some(product))
        });

        let mut cart = Cart::default();
        // Stale snapshot from before a price change.
        cart.upsert(CartLine {
            product_id: 1,
            name: "Product 1".to_string(),
            unit_price_cents: 999,
            quantity: 2,
        });

        let view = view_cart(&repo, &mut cart).expect("expected success");

        assert_eq!(view.lines[0].unit_price_cents, 1800);
        assert_eq!(view.totals.subtotal_cents, 3600);
    }

    #[test]
    fn view_cart_propagates_repository_errors() {
        let mut repo = MockProductReader::new();
        repo.expect_get_product_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let mut cart = Cart::default();
        cart.upsert(CartLine {
            product_id: 1,
            name: "Product 1".to_string(),
            unit_price_cents: 1000,
            quantity: 1,
        });

        assert!(view_cart(&repo, &mut cart).is_err());
    }
}
