//! Interactive search.
//!
//! Each line read from stdin is treated as the current contents of the
//! search box. Lines go through the debouncer, so typing quickly (or piping
//! several lines at once) runs a single search for the last one.

use anyhow::{Context as _, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use turbo_commerce::catalog::ProductSource;
use turbo_commerce::search::{debounce, ProductFilters};

use super::catalog::print_products;
use super::BrowseArgs;
use crate::context::Context;

/// Run `shop browse`.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog();

    let mut base = ProductFilters::catalog_defaults();
    if let Some(category) = args.category {
        base = base.with_category(category);
    }
    if let Some(sort) = args.sort {
        base = base.with_sort(sort);
    }
    base.limit = Some(ctx.config.catalog.page_size);

    let (input, mut searches) = debounce::<String>(ctx.config.debounce_window());

    ctx.output.info("Type to search. An empty line clears the search; Ctrl-D quits.");

    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            if !input.send(line) {
                break;
            }
        }
        Ok::<_, std::io::Error>(())
    });

    while let Some(term) = searches.recv().await {
        let mut filters = base.clone();
        let term = term.trim();
        if term.is_empty() {
            filters.clear_search();
        } else {
            filters = filters.with_search(term);
        }
        tracing::debug!(term, "running search");

        let spinner = ctx.output.spinner("Searching...");
        let results = catalog.list_products(&filters).await;
        spinner.finish_and_clear();
        let results = results?;

        if ctx.output.is_json() {
            ctx.output.json(&serde_json::json!({ "search": term, "results": results }));
            continue;
        }

        if term.is_empty() {
            ctx.output.header("All products");
        } else {
            ctx.output.header(&format!("Results for \"{}\"", term));
        }
        print_products(&ctx.output, &results);
    }

    reader
        .await
        .context("stdin reader stopped unexpectedly")?
        .context("Failed to read from stdin")?;
    Ok(())
}
