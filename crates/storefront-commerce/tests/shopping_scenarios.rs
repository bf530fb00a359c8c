//! End-to-end shopping scenarios against a loaded storefront.

use storefront_commerce::prelude::*;

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::USD).unwrap()
}

fn product(id: u64, price: f64, category: &str) -> Product {
    Product::new(
        id,
        format!("Product {id}"),
        usd(price),
        format!("https://example.com/{id}.jpg"),
        category,
    )
}

fn storefront_with(products: Vec<Product>) -> Storefront {
    let mut store = Storefront::new();
    store.catalog_mut().begin().unwrap();
    store.catalog_mut().succeed(products).unwrap();
    store
}

fn sample_catalog() -> Vec<Product> {
    vec![
        product(1, 109.95, "men's clothing"),
        product(2, 22.3, "men's clothing"),
        product(5, 695.0, "jewelery"),
        product(9, 64.0, "electronics"),
        product(15, 56.99, "women's clothing"),
        product(18, 9.85, "women's clothing"),
    ]
}

#[test]
fn electronics_low_keeps_only_cheap_electronics() {
    let products = vec![product(1, 30.0, "electronics"), product(2, 150.0, "electronics")];
    let mut store = storefront_with(products);

    store.set_category_filter(CategoryFilter::from("electronics"));
    store.set_price_range(PriceRange::Low);

    let ids: Vec<u64> = store.visible_products().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn all_selectors_return_catalog_unchanged() {
    let catalog = sample_catalog();
    let store = storefront_with(catalog.clone());

    let visible: Vec<Product> = store.visible_products().into_iter().cloned().collect();
    assert_eq!(visible, catalog);
}

#[test]
fn filter_products_matches_filter_apply() {
    let catalog = sample_catalog();
    for range in PriceRange::ALL {
        for category in CategoryFilter::options() {
            let filter = Filter::new(category.clone(), range);
            assert_eq!(
                filter.apply(&catalog),
                filter_products(&catalog, &category, range)
            );
        }
    }
}

#[test]
fn adding_twice_gives_one_line_of_two() {
    let mut store = storefront_with(vec![product(7, 20.0, "electronics")]);

    assert!(store.cart().total().is_zero());
    store.add_to_cart(ProductId::new(7)).unwrap();
    store.add_to_cart(ProductId::new(7)).unwrap();

    let summary = store.cart_summary();
    assert_eq!(summary.lines.len(), 1);
    assert_eq!(summary.lines[0].quantity, 2);
    assert_eq!(summary.total, usd(40.0));
    assert_eq!(summary.total_line(), "Total: $40.00");
}

#[test]
fn buy_now_then_submit_clears_cart_and_form() {
    let mut store = storefront_with(sample_catalog());
    store.add_to_cart(ProductId::new(1)).unwrap();
    store.add_to_cart(ProductId::new(18)).unwrap();

    store.buy_now().unwrap();
    assert_eq!(store.checkout_step(), CheckoutStep::DeliveryModalOpen);

    *store.delivery_mut() = DeliveryDetails::new("Grace Hopper", "1 Navy Way", "555-0199");
    let notice = store.submit_delivery().unwrap();

    assert_eq!(notice.message(), "Purchase completed! Thank you for your order.");
    assert!(store.cart().is_empty());
    assert!(store.delivery().is_blank());
    assert_eq!(store.checkout_step(), CheckoutStep::Browsing);
}

#[test]
fn buy_now_with_blank_field_is_refused() {
    let mut store = storefront_with(sample_catalog());
    store.add_to_cart(ProductId::new(5)).unwrap();
    store.buy_now().unwrap();

    store.delivery_mut().name = "Grace Hopper".to_string();
    store.delivery_mut().phone = "555-0199".to_string();

    assert!(matches!(
        store.submit_delivery(),
        Err(CommerceError::IncompleteDelivery(_))
    ));
    assert_eq!(store.checkout_step(), CheckoutStep::DeliveryModalOpen);
    assert_eq!(store.cart().line_count(), 1);

    store.delivery_mut().address = "1 Navy Way".to_string();
    assert!(store.submit_delivery().is_ok());
}

#[test]
fn checkout_then_confirm_keeps_cart() {
    let mut store = storefront_with(sample_catalog());
    store.add_to_cart(ProductId::new(9)).unwrap();
    store.add_to_cart(ProductId::new(15)).unwrap();
    let before = store.cart_summary();

    store.checkout().unwrap();
    assert_eq!(store.confirmation_text(), "Your total is $120.99.");
    let notice = store.confirm_checkout().unwrap();

    assert_eq!(notice, Notice::ProceedingToCheckout);
    assert_eq!(store.cart_summary(), before);
    assert_eq!(store.checkout_step(), CheckoutStep::Browsing);
}

#[test]
fn category_sections_cover_fixed_buckets() {
    let store = storefront_with(sample_catalog());
    let index = store.categories().unwrap();

    let counts: Vec<(&str, usize)> = index
        .sections()
        .map(|s| (s.category.title(), s.products.len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("Men's Clothing", 2),
            ("Women's Clothing", 2),
            ("Electronics", 1),
            ("Jewelery", 1),
        ]
    );
}

#[test]
fn failed_load_shows_error_and_blocks_cart() {
    let mut store = Storefront::new();
    store.catalog_mut().begin().unwrap();
    store.catalog_mut().fail("HTTP 503: Service Unavailable").unwrap();

    assert_eq!(
        store.catalog().placeholder().as_deref(),
        Some("Error: HTTP 503: Service Unavailable")
    );
    assert!(store.visible_products().is_empty());
    assert_eq!(
        store.add_to_cart(ProductId::new(1)),
        Err(CommerceError::CatalogNotLoaded("failed"))
    );
}
