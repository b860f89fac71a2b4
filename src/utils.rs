//! Utils

use clap::Parser;

/// Arguments for the checkout demo
#[derive(Debug, Parser)]
pub struct CheckoutDemoArgs {
    /// Fixture set to load the product catalog from
    #[clap(short, long, default_value = "storefront")]
    pub fixture: String,

    /// Directory for the durable cart store (defaults to a temp directory)
    #[clap(short, long)]
    pub store_dir: Option<String>,

    /// Session key for the stored cart
    #[clap(short, long, default_value = "demo-cart")]
    pub key: String,
}
