//! Interactive shopping session.
//!
//! Renders the filtered listing and a menu on each turn, mirroring the
//! storefront screen: selectors, add to cart, the cart badge, and the two
//! checkout dialogs.

use anyhow::{bail, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use storefront_commerce::catalog::LoadStatus;
use storefront_commerce::ids::ProductId;
use storefront_commerce::search::{CategoryFilter, PriceRange};
use storefront_commerce::{CommerceError, Storefront};
use tracing::debug;

use super::ShopArgs;
use crate::context::Context;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Reload,
    ChooseCategory,
    ChoosePrice,
    AddToCart,
    ViewCart,
    Checkout,
    BuyNow,
    Quit,
}

impl MenuAction {
    fn label(&self, store: &Storefront) -> String {
        match self {
            MenuAction::Reload => "Reload catalog".to_string(),
            MenuAction::ChooseCategory => {
                format!("Choose a category ({})", store.filter().category.label())
            }
            MenuAction::ChoosePrice => {
                format!("Filter by price ({})", store.filter().price.label())
            }
            MenuAction::AddToCart => "Add to cart".to_string(),
            MenuAction::ViewCart => format!("View cart ({})", store.cart_summary().badge_count),
            MenuAction::Checkout => "Checkout".to_string(),
            MenuAction::BuyNow => "Buy Now".to_string(),
            MenuAction::Quit => "Quit".to_string(),
        }
    }
}

/// Actions available in the current state.
fn menu(store: &Storefront) -> Vec<MenuAction> {
    match store.load_status() {
        LoadStatus::Succeeded => {}
        LoadStatus::Failed => return vec![MenuAction::Reload, MenuAction::Quit],
        LoadStatus::Idle | LoadStatus::Loading => return vec![MenuAction::Quit],
    }

    let mut actions = vec![
        MenuAction::ChooseCategory,
        MenuAction::ChoosePrice,
        MenuAction::AddToCart,
        MenuAction::ViewCart,
        MenuAction::Checkout,
    ];
    if !store.cart().is_empty() {
        actions.push(MenuAction::BuyNow);
    }
    actions.push(MenuAction::Quit);
    actions
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and does not support --json");
    }

    let theme = ColorfulTheme::default();
    let filter = args.filter.filter();
    let mut store = Storefront::new();
    store.set_category_filter(filter.category);
    store.set_price_range(filter.price);

    ctx.load_catalog(&mut store).await?;

    loop {
        render_listing(&store, ctx);

        let actions = menu(&store);
        let labels: Vec<String> = actions.iter().map(|a| a.label(&store)).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        let Some(action) = actions.get(choice).copied() else {
            break;
        };
        debug!(?action, "menu selection");

        match action {
            MenuAction::Reload => {
                ctx.load_catalog(&mut store).await?;
            }
            MenuAction::ChooseCategory => choose_category(&mut store, &theme)?,
            MenuAction::ChoosePrice => choose_price(&mut store, &theme)?,
            MenuAction::AddToCart => add_to_cart(&mut store, &theme, ctx)?,
            MenuAction::ViewCart => show_cart(&store, ctx),
            MenuAction::Checkout => checkout(&mut store, &theme, ctx)?,
            MenuAction::BuyNow => buy_now(&mut store, &theme, ctx)?,
            MenuAction::Quit => break,
        }
    }

    Ok(())
}

fn render_listing(store: &Storefront, ctx: &Context) {
    match store.catalog().placeholder() {
        Some(text) if store.load_status() == LoadStatus::Failed => {
            ctx.output.error(&text);
            return;
        }
        Some(text) => {
            ctx.output.info(&text);
            return;
        }
        None => {}
    }

    let filter = store.filter();
    ctx.output.header(&format!(
        "Products - {} / {}",
        filter.category.label(),
        filter.price.label()
    ));

    let products = store.visible_products();
    if products.is_empty() {
        ctx.output.info("No products match the selected filters.");
    }
    for product in products {
        ctx.output
            .list_item(&format!("{} - {}", product.title, product.price_display()));
    }

    ctx.output.line("");
    ctx.output
        .kv("Cart", &store.cart_summary().badge_count.to_string());
}

fn choose_category(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let options = CategoryFilter::options();
    let labels: Vec<&str> = options.iter().map(|o| o.label()).collect();
    let current = options
        .iter()
        .position(|o| *o == store.filter().category)
        .unwrap_or(0);

    if let Some(choice) = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact_opt()?
    {
        if let Some(option) = options.get(choice) {
            store.set_category_filter(option.clone());
        }
    }
    Ok(())
}

fn choose_price(store: &mut Storefront, theme: &ColorfulTheme) -> Result<()> {
    let labels: Vec<&str> = PriceRange::ALL.iter().map(|r| r.label()).collect();
    let current = PriceRange::ALL
        .iter()
        .position(|r| *r == store.filter().price)
        .unwrap_or(0);

    if let Some(choice) = Select::with_theme(theme)
        .with_prompt("Price")
        .items(&labels)
        .default(current)
        .interact_opt()?
    {
        if let Some(range) = PriceRange::ALL.get(choice) {
            store.set_price_range(*range);
        }
    }
    Ok(())
}

fn add_to_cart(store: &mut Storefront, theme: &ColorfulTheme, ctx: &Context) -> Result<()> {
    let choices: Vec<(ProductId, String)> = store
        .visible_products()
        .into_iter()
        .map(|p| (p.id, format!("{} - {}", p.title, p.price_display())))
        .collect();

    if choices.is_empty() {
        ctx.output.info("No products match the selected filters.");
        return Ok(());
    }

    let labels: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    let Some(choice) = Select::with_theme(theme)
        .with_prompt("Add which product?")
        .items(&labels)
        .default(0)
        .interact_opt()?
    else {
        return Ok(());
    };

    if let Some((id, _)) = choices.get(choice) {
        let quantity = store.add_to_cart(*id)?;
        if let Some(line) = store.cart().get(*id) {
            ctx.output.success(&format!(
                "Added {} (x{})",
                line.product.title, quantity
            ));
        }
    }
    Ok(())
}

fn show_cart(store: &Storefront, ctx: &Context) {
    let summary = store.cart_summary();
    ctx.output.header("Cart");

    if summary.lines.is_empty() {
        ctx.output.info("Your cart is empty.");
        return;
    }

    for line in &summary.lines {
        ctx.output.list_item(&line.summary());
    }
    ctx.output.line(&summary.total_line());
}

/// Checkout confirmation dialog. Confirming leaves the cart as it was.
fn checkout(store: &mut Storefront, theme: &ColorfulTheme, ctx: &Context) -> Result<()> {
    store.checkout()?;
    ctx.output.header(store.checkout_step().display_name());
    ctx.output.line(&store.confirmation_text());

    Select::with_theme(theme)
        .items(&["Confirm Checkout"])
        .default(0)
        .interact()?;

    let notice = store.confirm_checkout()?;
    ctx.output.success(notice.message());
    Ok(())
}

/// Delivery details dialog. Re-prompts until every field is filled in.
fn buy_now(store: &mut Storefront, theme: &ColorfulTheme, ctx: &Context) -> Result<()> {
    store.buy_now()?;
    ctx.output.header(store.checkout_step().display_name());

    loop {
        let draft = store.delivery().clone();
        let name = prompt_field(theme, "Name", &draft.name)?;
        let address = prompt_field(theme, "Address", &draft.address)?;
        let phone = prompt_field(theme, "Phone Number", &draft.phone)?;

        let details = store.delivery_mut();
        details.name = name;
        details.address = address;
        details.phone = phone;

        match store.submit_delivery() {
            Ok(notice) => {
                ctx.output.success(notice.message());
                return Ok(());
            }
            Err(CommerceError::IncompleteDelivery(missing)) => {
                ctx.output.warn(&format!("Please fill in: {}", missing));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn prompt_field(theme: &ColorfulTheme, prompt: &str, current: &str) -> Result<String> {
    let value = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}
