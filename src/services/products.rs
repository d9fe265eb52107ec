use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::product::{Product, ProductListQuery, ProductSort};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CategoryReader, ProductReader, ReviewReader};
use crate::services::reviews::ReviewView;
use crate::services::{ServiceError, ServiceResult};

/// Number of latest products shown on the landing page.
const INDEX_PRODUCT_COUNT: usize = 8;

/// Query parameters accepted by the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub category_id: Option<i32>,
    /// Optional search string entered by the user.
    pub search: Option<String>,
    pub min_price_cents: Option<i64>,
    pub max_price_cents: Option<i64>,
    #[serde(default)]
    pub in_stock: bool,
    pub sort: Option<ProductSort>,
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
}

/// View of a product as exposed to clients, with the discounted price
/// precomputed.
#[derive(Debug, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub discount_percent: i32,
    pub current_price_cents: i64,
    pub stock: i32,
    pub rating: f64,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        let current_price_cents = product.current_price_cents();
        Self {
            id: product.id,
            category_id: product.category_id,
            name: product.name,
            description: product.description,
            price_cents: product.price_cents,
            discount_percent: product.discount_percent,
            current_price_cents,
            stock: product.stock,
            rating: product.rating,
        }
    }
}

/// Data for the catalog listing.
pub struct ProductsPageData {
    pub products: Paginated<ProductView>,
    pub categories: Vec<Category>,
    pub search: Option<String>,
}

/// Data for the landing page: latest arrivals plus the category tree.
pub struct IndexPageData {
    pub products: Vec<ProductView>,
    pub categories: Vec<Category>,
}

/// Data for a product detail page.
#[derive(Debug)]
pub struct ProductDetailData {
    pub product: ProductView,
    pub reviews: Vec<ReviewView>,
}

/// Loads the filtered, sorted, paginated catalog listing.
pub fn load_products_page<R>(repo: &R, query: ProductsQuery) -> ServiceResult<ProductsPageData>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let ProductsQuery {
        category_id,
        search,
        min_price_cents,
        max_price_cents,
        in_stock,
        sort,
        page,
    } = query;

    let page = page.unwrap_or(1);
    let mut list_query = ProductListQuery::new()
        .sort(sort.unwrap_or_default())
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(category) = category_id {
        list_query = list_query.category(category);
    }

    if let Some(term) = search.as_ref() {
        list_query = list_query.search(term);
    }

    if let Some(min) = min_price_cents {
        list_query = list_query.min_price_cents(min);
    }

    if let Some(max) = max_price_cents {
        list_query = list_query.max_price_cents(max);
    }

    if in_stock {
        list_query = list_query.in_stock();
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;

    let view_items: Vec<ProductView> = items.into_iter().map(ProductView::from).collect();
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(ProductsPageData {
        products: Paginated::new(view_items, page, total_pages),
        categories,
        search,
    })
}

/// Loads the landing page data.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<IndexPageData>
where
    R: ProductReader + CategoryReader + ?Sized,
{
    let list_query = ProductListQuery::new()
        .sort(ProductSort::Newest)
        .paginate(1, INDEX_PRODUCT_COUNT);

    let (_, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let categories = repo.list_categories().map_err(ServiceError::from)?;

    Ok(IndexPageData {
        products: items.into_iter().map(ProductView::from).collect(),
        categories,
    })
}

/// Loads a product detail page with its reviews. Inactive products are
/// hidden from the storefront.
pub fn load_product_detail<R>(repo: &R, product_id: i32) -> ServiceResult<ProductDetailData>
where
    R: ProductReader + ReviewReader + ?Sized,
{
    let product = repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .filter(|product| product.is_active)
        .ok_or(ServiceError::NotFound)?;

    let reviews = repo
        .list_product_reviews(product.id)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(ReviewView::from)
        .collect();

    Ok(ProductDetailData {
        product: ProductView::from(product),
        reviews,
    })
}
