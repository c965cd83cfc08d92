//! Demonstration entry point: exercises the inventory operations in
//! sequence against the snapshot file.

use stockbook_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, MutationLog, report};
use stockbook_persistence as persistence;

fn main() {
    stockbook_observability::init();

    let data_file = std::env::var("STOCKBOOK_DATA_FILE")
        .unwrap_or_else(|_| persistence::DEFAULT_DATA_FILE.to_string());

    let mut inventory = persistence::load(&data_file);
    let mut log = MutationLog::new();

    inventory.add("apple", 10, Some(&mut log));
    inventory.add("banana", 5, Some(&mut log));

    // Decrement via add, then an add that fails validation.
    inventory.add("banana", -2, Some(&mut log));
    inventory.add("", 10, Some(&mut log));

    inventory.remove("apple", 3);
    inventory.remove("orange", 1);

    println!("Apple stock: {}", inventory.quantity("apple"));
    println!(
        "Low items: {:?}",
        inventory.low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    );

    report::print(&inventory);
    persistence::save(&inventory, &data_file);

    tracing::info!("recorded {} mutation log entries", log.len());
}
