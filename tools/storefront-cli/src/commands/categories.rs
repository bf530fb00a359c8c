//! Products grouped by category.

use anyhow::{bail, Result};
use storefront_commerce::catalog::CategorySection;
use storefront_commerce::Storefront;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let mut store = Storefront::new();
    ctx.load_catalog(&mut store).await?;
    if let Some(text) = store.catalog().placeholder() {
        bail!("{}", text);
    }

    let index = store.categories()?;

    if ctx.output.is_json() {
        ctx.output.json(&index);
        return Ok(());
    }

    for section in index.sections() {
        ctx.output.header(&section_heading(section));
        if args.counts {
            continue;
        }
        if section.products.is_empty() {
            ctx.output.info("No products in this category.");
        }
        for product in &section.products {
            ctx.output
                .list_item(&format!("{} - {}", product.title, product.price_display()));
        }
    }

    Ok(())
}

fn section_heading(section: &CategorySection) -> String {
    format!("{} ({})", section.category.title(), section.products.len())
}
