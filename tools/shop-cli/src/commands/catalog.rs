//! Catalog commands: listing, categories and product details.

use anyhow::Result;
use turbo_commerce::catalog::{Product, ProductSource};
use turbo_commerce::search::{ProductFilters, SearchResults};
use turbo_commerce::ProductId;

use super::{CatalogArgs, ProductArgs};
use crate::context::Context;
use crate::output::{format_rating, stock_badge, truncate, Output};

const LIST_WIDTHS: [usize; 6] = [4, 22, 12, 10, 6, 12];

/// Run `shop catalog`.
pub async fn list(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let mut filters = ProductFilters::catalog_defaults();
    if let Some(category) = args.category {
        filters = filters.with_category(category);
    }
    if let Some(search) = args.search {
        filters = filters.with_search(search);
    }
    if let Some(sort) = args.sort {
        filters = filters.with_sort(sort);
    }
    filters = filters.with_page(
        args.page.unwrap_or(1),
        args.limit.unwrap_or(ctx.config.catalog.page_size),
    );

    let spinner = ctx.output.spinner("Loading products...");
    let results = ctx.catalog().list_products(&filters).await;
    spinner.finish_and_clear();
    let results = results?;

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header("Products");
    print_products(&ctx.output, &results);
    Ok(())
}

/// Print a page of products as a table with a paging footer.
pub fn print_products(output: &Output, results: &SearchResults<Product>) {
    if results.is_empty() {
        output.info("No products found. Try adjusting your search or filters.");
        return;
    }

    output.table_header(
        &["ID", "Name", "Category", "Price", "Rating", "Stock"],
        &LIST_WIDTHS,
    );
    for product in &results.items {
        output.table_row(
            &[
                product.id.as_str(),
                &truncate(&product.name, LIST_WIDTHS[1]),
                &product.category,
                &product.price.display(),
                &format_rating(product.rating),
                &stock_badge(product.in_stock),
            ],
            &LIST_WIDTHS,
        );
    }

    let page = &results.pagination;
    output.blank();
    output.info(&format!(
        "Showing {}-{} of {} products (page {} of {})",
        page.start_item(),
        page.end_item(),
        page.total,
        page.page,
        page.total_pages
    ));
}

/// Run `shop categories`.
pub async fn categories(ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading categories...");
    let categories = ctx.catalog().list_categories().await;
    spinner.finish_and_clear();
    let categories = categories?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(&format!(
            "{} ({}) [{}]",
            category.name, category.product_count, category.slug
        ));
    }
    Ok(())
}

/// Run `shop product <id>`.
pub async fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading product...");
    let product = ctx.catalog().get_product(&ProductId::new(args.id)).await;
    spinner.finish_and_clear();
    let product = product?;

    if ctx.output.is_json() {
        ctx.output.json(&product);
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("ID", product.id.as_str());
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Rating", &format_rating(product.rating));
    ctx.output.kv("Availability", &stock_badge(product.in_stock));
    ctx.output.kv("Image", &product.image);
    ctx.output.blank();
    ctx.output.info(&product.description);
    Ok(())
}
