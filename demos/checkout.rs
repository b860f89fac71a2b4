//! Walks a cart session through the storefront flow: hydrate from the durable
//! store, mutate, render the summary, then hand the snapshot off to checkout.

use std::{env, io};

use anyhow::{Context, Result};
use cellar::{
    catalog::ProductCatalog,
    fixtures::Fixture,
    products::Category,
    session::CartSession,
    store::FileStore,
    summary::write_summary,
    utils::CheckoutDemoArgs,
};
use clap::Parser;
use rusty_money::iso;

fn main() -> Result<()> {
    let args = CheckoutDemoArgs::parse();

    let catalog = Fixture::new()
        .load_products(&args.fixture)
        .context("failed to load product fixtures")?;

    let store_dir = args
        .store_dir
        .clone()
        .unwrap_or_else(|| env::temp_dir().join("cellar-demo").display().to_string());

    let mut session = CartSession::open(FileStore::new(&store_dir), &args.key)?;

    let wine = catalog
        .product(Category::Wine, "dalat-classic-red")
        .context("missing wine fixture")?;
    let glasses = catalog
        .product(Category::Accessory, "crystal-glass-pair")
        .context("missing accessory fixture")?;
    let hamper = catalog
        .product(Category::Gift, "tet-hamper")
        .context("missing gift fixture")?;

    session.add_product(wine.clone())?;
    session.add_product(wine)?;
    session.add_product(glasses)?;
    session.add_product(hamper)?;
    session.update_quantity(Category::Gift, "tet-hamper", 0)?;

    write_summary(io::stdout(), session.cart(), iso::VND)?;

    // Checkout handoff: submit the snapshot first, clear only after the order
    // is durably accepted.
    let order = session.state();

    println!(
        "Placing order: {} units across {} lines.",
        order.item_count,
        order.items.len()
    );

    session.clear()?;

    println!("Order accepted; cart cleared.");

    Ok(())
}
