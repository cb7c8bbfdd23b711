use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use tcg_binder_shop::{
    PricingMode, Product, find_product, load_listing, load_products, load_tree, visible_categories,
};

use crate::CliError;

use super::column;

fn pricing_mode(wishlist: bool) -> PricingMode {
    if wishlist {
        PricingMode::Wishlist
    } else {
        PricingMode::Shop
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// List index categories that have products.
pub(crate) fn run_categories(data: &Path) -> Result<(), CliError> {
    let categories = visible_categories(data).map_err(CliError::shop)?;
    if categories.is_empty() {
        log::info!(
            "{}",
            "No categories with products.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return Ok(());
    }
    log::info!("{}", "Categories:".if_supports_color(Stdout, |t| t.bold()));
    for category in &categories {
        log::info!(
            "  {} {} {}",
            column(&category.key, 20).if_supports_color(Stdout, |t| t.bold()),
            column(&category.entry.name, 30),
            category.entry.link(&category.key).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// List subcategories and products under a path.
pub(crate) fn run_items(data: &Path, path: &str, wishlist: bool) -> Result<(), CliError> {
    let segments = segments(path);
    let listing = load_listing(data, &segments).map_err(CliError::shop)?;
    let mode = pricing_mode(wishlist);

    log::info!("{}", listing.breadcrumb.if_supports_color(Stdout, |t| t.bold()));
    if listing.path_walk.len() < segments.len() {
        log::warn!(
            "Only {} of {} path segments exist",
            listing.path_walk.len(),
            segments.len()
        );
    }
    crate::log_blank();

    for sub in &listing.subcategories {
        let target = sub.external_url.as_deref().unwrap_or(&sub.path);
        log::info!(
            "  {} {}",
            column(&format!("{}/", sub.name), 40).if_supports_color(Stdout, |t| t.cyan()),
            target.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    if !listing.subcategories.is_empty() && !listing.products.is_empty() {
        crate::log_blank();
    }
    for product in &listing.products {
        log::info!("  {}", product_line(product, mode));
    }
    if listing.is_empty() {
        log::info!("{}", "Nothing here.".if_supports_color(Stdout, |t| t.dimmed()));
    }
    Ok(())
}

fn product_line(product: &Product, mode: PricingMode) -> String {
    let price = if product.variable_price {
        "variable".to_string()
    } else {
        format!("€{:.2}", product.breakdown(mode, false).total)
    };
    let sale = if mode == PricingMode::Shop && product.is_on_sale() {
        format!(" (was €{:.2})", product.price)
    } else {
        String::new()
    };
    format!(
        "{} {} {:>10}{}",
        column(&product.id, 10),
        column(&product.name, 40),
        price,
        sale
    )
}

/// Show one product and its price breakdown.
pub(crate) fn run_product(
    data: &Path,
    path: &str,
    id: &str,
    wishlist: bool,
    shipping: bool,
) -> Result<(), CliError> {
    let segments = segments(path);
    let root = segments
        .first()
        .ok_or_else(|| CliError::not_found("empty category path"))?;
    let tree = load_tree(data, root).map_err(CliError::shop)?;
    let product = match find_product(&tree, &segments, id) {
        Some(p) => p.clone(),
        None => load_products(data, &segments)
            .map_err(CliError::shop)?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CliError::not_found(format!("product '{}' in {}", id, path)))?,
    };

    let mode = pricing_mode(wishlist);
    let breakdown = product.breakdown(mode, shipping);

    log::info!(
        "{} {}",
        product.name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{}]", product.id).if_supports_color(Stdout, |t| t.cyan()),
    );
    if let Some(url) = product.external_url() {
        log::info!("  External page: {}", url);
    }
    if let Some(info) = &product.info {
        log::info!("  {}", info);
    }
    if let Some(conditions) = &product.conditions {
        log::info!("  Conditions: {}", conditions);
    }
    if let Some(instructions) = &product.specific_instructions {
        log::info!("  Instructions: {}", instructions);
    }
    crate::log_blank();

    if product.variable_price {
        log::info!("  Price: variable");
        return Ok(());
    }
    log::info!("  Price:      €{:>9.2}", product.price);
    if mode == PricingMode::Shop && product.is_on_sale() {
        log::info!("  Sale price: €{:>9.2}", product.effective_sale_price());
    }
    if product.shipping > 0.0 {
        let note = if product.shipping_optional && !shipping {
            " (optional, not included)"
        } else {
            ""
        };
        log::info!("  Shipping:   €{:>9.2}{}", product.shipping, note);
    }
    log::info!("  Subtotal:   €{:>9.2}", breakdown.subtotal);
    if mode == PricingMode::Wishlist {
        log::info!("  Fee:        €{:>9.2}", breakdown.base_tax);
        if product.paypal_tax {
            log::info!("  PayPal fee: €{:>9.2}", breakdown.paypal_tax);
        }
        log::info!("  Taxes:      €{:>9.2}", breakdown.taxes);
    }
    log::info!(
        "  {}      €{:>9.2}",
        "Total:".if_supports_color(Stdout, |t| t.bold()),
        breakdown.total
    );
    if mode == PricingMode::Wishlist && !product.accepts_donations() {
        log::info!(
            "  {}",
            "Donations are not available for this item.".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
