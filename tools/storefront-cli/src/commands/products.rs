//! Filtered product listing.

use anyhow::{bail, Result};
use storefront_commerce::catalog::Product;
use storefront_commerce::Storefront;

use super::ProductsArgs;
use crate::context::Context;
use crate::output::{status_badge, truncate};

const ID_WIDTH: usize = 4;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 18;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filter = args.filter.filter();
    let mut store = Storefront::new();
    store.set_category_filter(filter.category.clone());
    store.set_price_range(filter.price);

    let status = ctx.load_catalog(&mut store).await?;
    ctx.output.debug(&format!("Catalog {}", status_badge(status)));
    if let Some(text) = store.catalog().placeholder() {
        bail!("{}", text);
    }

    let products = store.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} / {}",
        filter.category.label(),
        filter.price.label()
    ));

    if products.is_empty() {
        ctx.output.info("No products match the selected filters.");
        return Ok(());
    }

    print_table(&products, ctx);

    let total = store.catalog().products().map_or(0, |p| p.len());
    ctx.output.info(&format!("{} of {} products", products.len(), total));

    Ok(())
}

fn print_table(products: &[&Product], ctx: &Context) {
    let title_width = title_width(ctx.output.term_width());
    let widths = [ID_WIDTH, title_width, PRICE_WIDTH, CATEGORY_WIDTH];

    ctx.output
        .table_row(&["ID", "TITLE", "PRICE", "CATEGORY"], &widths);
    for product in products {
        let row = product_row(product, title_width);
        let cols: Vec<&str> = row.iter().map(String::as_str).collect();
        ctx.output.table_row(&cols, &widths);
    }
}

/// Column budget for titles on a terminal `term_width` columns wide.
fn title_width(term_width: usize) -> usize {
    let fixed = ID_WIDTH + PRICE_WIDTH + CATEGORY_WIDTH + 2 + 3 * 2;
    term_width.saturating_sub(fixed).clamp(16, 60)
}

fn product_row(product: &Product, title_width: usize) -> [String; 4] {
    [
        product.id.to_string(),
        truncate(&product.title, title_width),
        product.price_display(),
        product.category.clone(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::money::{Currency, Money};

    #[test]
    fn test_product_row() {
        let product = Product::new(
            9,
            "WD 2TB Elements Portable External Hard Drive - USB 3.0",
            Money::new(6400, Currency::USD),
            "",
            "electronics",
        );

        let row = product_row(&product, 20);

        assert_eq!(row[0], "9");
        assert_eq!(row[1], "WD 2TB Elements P...");
        assert_eq!(row[2], "$64.00");
        assert_eq!(row[3], "electronics");
    }

    #[test]
    fn test_title_width_bounds() {
        assert_eq!(title_width(0), 16);
        assert_eq!(title_width(80), 80 - 40);
        assert_eq!(title_width(400), 60);
    }
}
