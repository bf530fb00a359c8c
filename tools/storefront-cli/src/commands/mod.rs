//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};
use storefront_commerce::search::{CategoryFilter, Filter, PriceRange};

/// Category and price selectors shared by the listing commands.
#[derive(Args, Clone)]
pub struct FilterArgs {
    /// Category label to show, or "all".
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Price range: all, low (< $50), medium ($50 - $100) or high (>= $100).
    #[arg(long, default_value = "all", value_parser = parse_price_range)]
    pub price: PriceRange,
}

impl FilterArgs {
    /// The selectors as a filter.
    pub fn filter(&self) -> Filter {
        Filter::new(CategoryFilter::from(self.category.as_str()), self.price)
    }
}

fn parse_price_range(value: &str) -> Result<PriceRange, String> {
    value.parse::<PriceRange>().map_err(|e| e.to_string())
}

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Show only section titles and product counts.
    #[arg(long)]
    pub counts: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Initial selectors.
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
