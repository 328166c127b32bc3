//! Cart commands.

use anyhow::{bail, Result};
use dialoguer::Confirm;
use serde::Serialize;
use turbo_commerce::cart::{Cart, CartItem};
use turbo_commerce::catalog::ProductSource;
use turbo_commerce::{Money, ProductId};

use super::{CartArgs, CartCommand};
use crate::context::{Context, ShopCart};
use crate::output::{truncate, Output};

const CART_WIDTHS: [usize; 5] = [4, 22, 10, 5, 11];

/// JSON view of the cart.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView<'a> {
    items: &'a [CartItem],
    subtotal: Money,
    total_qty: i64,
}

impl<'a> From<&'a Cart> for CartView<'a> {
    fn from(cart: &'a Cart) -> Self {
        Self {
            items: cart.items(),
            subtotal: cart.subtotal(),
            total_qty: cart.total_qty(),
        }
    }
}

/// Run `shop cart`.
pub async fn run(args: CartArgs, ctx: &Context, cart: &mut ShopCart) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, qty } => add(&id, qty, ctx, cart).await?,
        CartCommand::Remove { id } => remove(&id, ctx, cart),
        CartCommand::SetQty { id, qty } => set_qty(&id, qty, ctx, cart),
        CartCommand::Clear { yes } => {
            if !clear(yes, ctx, cart)? {
                return Ok(());
            }
        }
    }

    show(ctx, cart);
    Ok(())
}

async fn add(id: &str, qty: i64, ctx: &Context, cart: &mut ShopCart) -> Result<()> {
    if qty < 1 {
        bail!("Quantity must be at least 1");
    }

    let spinner = ctx.output.spinner("Looking up product...");
    let product = ctx.catalog().get_product(&ProductId::new(id)).await;
    spinner.finish_and_clear();
    let product = product?;

    if !product.in_stock {
        bail!("{} is out of stock", product.name);
    }

    cart.add(CartItem::from_product(&product, qty));
    ctx.output.success(&format!("Added {} × {} to cart", qty, product.name));
    Ok(())
}

fn remove(id: &str, ctx: &Context, cart: &mut ShopCart) {
    let id = ProductId::new(id);
    match cart.get(&id).map(|item| item.title.clone()) {
        Some(title) => {
            cart.remove(&id);
            ctx.output.success(&format!("Removed {} from cart", title));
        }
        None => ctx.output.warn(&format!("Item {} is not in the cart", id)),
    }
}

fn set_qty(id: &str, qty: i64, ctx: &Context, cart: &mut ShopCart) {
    let id = ProductId::new(id);
    let Some(title) = cart.get(&id).map(|item| item.title.clone()) else {
        ctx.output.warn(&format!("Item {} is not in the cart", id));
        return;
    };

    cart.set_qty(&id, qty);
    if qty <= 0 {
        ctx.output.success(&format!("Removed {} from cart", title));
    } else {
        ctx.output.success(&format!("Set {} quantity to {}", title, qty));
    }
}

/// Returns whether the cart was cleared.
fn clear(yes: bool, ctx: &Context, cart: &mut ShopCart) -> Result<bool> {
    if cart.is_empty() {
        ctx.output.info("Your cart is already empty");
        return Ok(true);
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all {} items from the cart?", cart.total_qty()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Cart not cleared");
            return Ok(false);
        }
    }

    cart.clear();
    ctx.output.success("Cart cleared");
    Ok(true)
}

fn show(ctx: &Context, cart: &Cart) {
    if ctx.output.is_json() {
        ctx.output.json(&CartView::from(cart));
        return;
    }

    ctx.output.header(&format!("Shopping Cart ({})", cart.total_qty()));
    print_cart(&ctx.output, cart);
}

/// Print the cart lines and totals.
pub fn print_cart(output: &Output, cart: &Cart) {
    if cart.is_empty() {
        output.info("Your cart is empty. Add some products with `shop cart add <id>`.");
        return;
    }

    output.table_header(&["ID", "Item", "Price", "Qty", "Total"], &CART_WIDTHS);
    for item in cart.items() {
        output.table_row(
            &[
                item.id.as_str(),
                &truncate(&item.title, CART_WIDTHS[1]),
                &item.price.display(),
                &item.qty.to_string(),
                &item.line_total().display(),
            ],
            &CART_WIDTHS,
        );
    }

    output.blank();
    output.kv("Items", &cart.total_qty().to_string());
    output.kv("Subtotal", &cart.subtotal().display());
}
