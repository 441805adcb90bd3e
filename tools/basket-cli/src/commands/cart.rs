//! Cart commands.

use anyhow::{Context as _, Result};
use basket_commerce::store::UpdateProductAmount;

use super::{ProductArgs, UpdateArgs};
use crate::context::Context;

/// Print the persisted cart.
pub async fn show(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    ctx.output.header("Cart");
    ctx.output.cart(&store.cart());
    Ok(())
}

/// Add one unit of a product.
pub async fn add(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store.add_product(args.id).await?;

    let amount = cart.get(args.id).map_or(0, |line| line.amount);
    ctx.output.success(&format!(
        "Added product {} (quantity: {})",
        args.id, amount
    ));
    if ctx.output.is_json() {
        ctx.output.cart(&cart);
    }
    Ok(())
}

/// Drop a product's line.
pub async fn remove(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let present = store.cart().contains(args.id);
    let cart = store.remove_product(args.id);

    if present {
        ctx.output.success(&format!("Removed product {}", args.id));
    } else {
        ctx.output.info(&format!("Product {} is not in the cart", args.id));
    }
    if ctx.output.is_json() {
        ctx.output.cart(&cart);
    }
    Ok(())
}

/// Change a product's quantity by a delta.
pub async fn update(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let cart = store
        .update_product_amount(UpdateProductAmount::new(args.id, args.delta))
        .await?;

    match cart.get(args.id) {
        Some(line) => ctx.output.success(&format!(
            "Product {} quantity is now {}",
            args.id, line.amount
        )),
        None => ctx
            .output
            .info(&format!("Product {} is not in the cart", args.id)),
    }
    if ctx.output.is_json() {
        ctx.output.cart(&cart);
    }
    Ok(())
}

/// Query the stock service for a product.
pub async fn stock(args: ProductArgs, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let amount = store
        .product_stock(args.id)
        .await
        .with_context(|| format!("Failed to fetch stock for product {}", args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "id": args.id, "amount": amount }));
    } else {
        ctx.output
            .kv(&format!("product {}", args.id), &format!("{} in stock", amount));
    }
    Ok(())
}

/// Delete the persisted cart.
pub async fn clear(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    store
        .persistence()
        .clear()
        .context("Failed to clear the cart")?;

    ctx.output.success("Cart cleared");
    Ok(())
}
