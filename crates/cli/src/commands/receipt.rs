//! Receipt command.

use std::fmt::Write;

use bebek_core::{ReceiptRecord, Storage};
use chrono::FixedOffset;

use super::CommandError;

/// Render the stored receipt.
///
/// # Errors
///
/// Returns [`CommandError::Receipt`] if there is no receipt or it is
/// malformed.
pub fn show(storage: &impl Storage, offset: FixedOffset) -> Result<String, CommandError> {
    let record = ReceiptRecord::load(storage)?;
    Ok(render(&record, offset))
}

/// Format a receipt as a printable slip.
#[must_use]
pub fn render(record: &ReceiptRecord, offset: FixedOffset) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Bebek Top Global");
    let _ = writeln!(out, "Present this slip at pickup\n");
    let _ = writeln!(out, "Order Code  {}", record.code);
    let _ = writeln!(out, "Issued      {}", record.issued_at(offset));
    let _ = writeln!(out, "Order Type  {}", record.order_type.label());
    let _ = writeln!(out, "Payment     {}\n", record.payment);

    if record.items.is_empty() {
        let _ = writeln!(out, "  No items found.");
    }
    for item in &record.items {
        let _ = writeln!(
            out,
            "  {:>3} x {:<20} {:>10} {:>11}",
            item.quantity,
            item.name,
            item.price.to_string(),
            item.line_total().to_string()
        );
    }

    let _ = writeln!(out, "\nTotal Due   {}", record.total);
    out
}
