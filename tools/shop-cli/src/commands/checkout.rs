//! Checkout command.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input};
use turbo_commerce::checkout::{place_order, CheckoutField, CheckoutForm};
use turbo_commerce::CommerceError;

use super::cart::print_cart;
use super::CheckoutArgs;
use crate::context::{Context, ShopCart};

/// Run `shop checkout`.
pub async fn run(args: CheckoutArgs, ctx: &Context, cart: &mut ShopCart) -> Result<()> {
    if cart.is_empty() {
        bail!("Your cart is empty. Add some products before checking out.");
    }

    let interactive = !args.yes && !ctx.output.is_json();
    let mut form = form_from_args(args);

    ctx.output.header("Order Summary");
    print_cart(&ctx.output, cart);

    if interactive {
        prompt_missing(&mut form)?;

        let confirmed = Confirm::new()
            .with_prompt(format!("Place order for {}?", cart.subtotal().display()))
            .default(true)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    let spinner = ctx.output.spinner("Placing order...");
    let result = place_order(cart, &form, &ctx.gateway()).await;
    spinner.finish_and_clear();

    let confirmation = match result {
        Ok(confirmation) => confirmation,
        Err(CommerceError::Validation(errors)) => {
            if ctx.output.is_json() {
                ctx.output.json(&errors);
            }
            for error in &errors.errors {
                ctx.output.warn(&format!("{}: {}", error.field.label(), error.message));
            }
            bail!("Please fix {} field(s) and try again", errors.len());
        }
        Err(e) => {
            bail!("{}. Please try again.", e);
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&confirmation);
        return Ok(());
    }

    ctx.output.header("Order Confirmed!");
    ctx.output.success("Your order has been successfully placed.");
    ctx.output.kv("Order ID", confirmation.order_id.as_str());
    ctx.output.kv("Items", &confirmation.total_qty.to_string());
    ctx.output.kv("Total", &confirmation.subtotal.display());
    ctx.output.kv("Ship to", &confirmation.customer.full_name());
    ctx.output.kv("Address", &confirmation.customer.one_line_address());
    ctx.output.kv(
        "Placed at",
        &confirmation.placed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );
    Ok(())
}

fn form_from_args(args: CheckoutArgs) -> CheckoutForm {
    CheckoutForm {
        first_name: args.first_name.unwrap_or_default(),
        last_name: args.last_name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        zip_code: args.zip_code.unwrap_or_default(),
        country: args.country.unwrap_or_default(),
    }
}

/// Ask for every field that is blank or invalid.
fn prompt_missing(form: &mut CheckoutForm) -> Result<()> {
    for field in CheckoutField::ALL {
        if field.check(form.get(field)).is_ok() {
            continue;
        }
        let value: String = Input::new()
            .with_prompt(field.label())
            .validate_with(|input: &String| -> Result<(), String> {
                field.check(input).map_err(|e| e.message)
            })
            .interact_text()?;
        form.set(field, value);
    }
    Ok(())
}
