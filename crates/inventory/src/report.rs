//! Console report of current holdings.

use std::fmt::Write as _;

use crate::store::Inventory;

/// Render the holdings listing.
///
/// One line per item in key order, with an explicit indicator when the
/// inventory has no entries.
pub fn render(inventory: &Inventory) -> String {
    let mut out = String::new();
    out.push_str("\n--- Items Report ---\n");
    if inventory.is_empty() {
        out.push_str("Inventory is empty.\n");
    }
    for (item, quantity) in inventory.iter() {
        let _ = writeln!(out, "{item} -> {quantity}");
    }
    out.push_str("--------------------\n");
    out
}

/// Print the holdings listing to stdout.
pub fn print(inventory: &Inventory) {
    print!("{}", render(inventory));
}
