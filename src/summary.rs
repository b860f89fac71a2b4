//! Cart Summary

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::cart::Cart;

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// An amount does not fit the display currency's representation.
    #[error("amount {0} does not fit the display currency")]
    AmountTooLarge(u64),

    /// IO error
    #[error("IO error")]
    Io,
}

/// Renders the cart as a table of line items with a totals footer.
///
/// Amounts are formatted in `currency`; the storefront displays VND.
///
/// # Errors
///
/// Returns a [`SummaryError`] if an amount cannot be represented or the sink
/// cannot be written.
pub fn write_summary(
    mut out: impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> Result<(), SummaryError> {
    let mut builder = Builder::default();

    builder.push_record(["", "Item", "Category", "Qty", "Unit Price", "Line Total"]);

    for (idx, item) in cart.items().iter().enumerate() {
        let product = item.product();

        builder.push_record([
            format!("#{:<3}", idx + 1),
            product.name.clone(),
            product.category.to_string(),
            item.quantity().to_string(),
            format!("{}", money(product.price, currency)?),
            format!("{}", money(item.line_total(), currency)?),
        ]);
    }

    write_summary_table(&mut out, builder)?;
    write_summary_footer(&mut out, cart, currency)?;

    Ok(())
}

fn write_summary_table(out: &mut impl io::Write, builder: Builder) -> Result<(), SummaryError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| SummaryError::Io)
}

fn write_summary_footer(
    out: &mut impl io::Write,
    cart: &Cart,
    currency: &'static Currency,
) -> Result<(), SummaryError> {
    let total = money(cart.total(), currency)?;

    writeln!(out, " Items: {}", cart.item_count()).map_err(|_err| SummaryError::Io)?;
    writeln!(out, " \x1b[1mTotal:\x1b[0m {total}").map_err(|_err| SummaryError::Io)?;
    writeln!(out).map_err(|_err| SummaryError::Io)
}

fn money(minor: u64, currency: &'static Currency) -> Result<Money<'static, Currency>, SummaryError> {
    let minor_units = i64::try_from(minor).map_err(|_err| SummaryError::AmountTooLarge(minor))?;

    Ok(Money::from_minor(minor_units, currency))
}
