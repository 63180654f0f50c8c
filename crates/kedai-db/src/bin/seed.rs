//! # Seed Data Generator
//!
//! Populates the database with a demo menu, inventory and expenses for
//! development.
//!
//! ## Usage
//! ```bash
//! cargo run -p kedai-db --bin seed
//!
//! # Specify database path
//! cargo run -p kedai-db --bin seed -- --db ./data/kedai.db
//! ```

use std::env;

use chrono::{Duration, Utc};
use kedai_db::repository::inventory::generate_inventory_id;
use kedai_db::{Database, DbConfig};
use kedai_core::ExpenseCategory;

/// Demo menu: (name, price in rupiah, category, description).
const MENUS: &[(&str, i64, &str, &str)] = &[
    ("Wonton Kuah", 15_000, "Makanan", "Pangsit rebus dengan kuah kaldu"),
    ("Wonton Goreng", 17_000, "Makanan", "Pangsit goreng isi ayam"),
    ("Mie Ayam", 18_000, "Makanan", "Mie dengan topping ayam kecap"),
    ("Nasi Goreng Spesial", 22_000, "Makanan", "Nasi goreng telur dan ayam"),
    ("Bakso Urat", 20_000, "Makanan", "Bakso urat kuah sapi"),
    ("Es Teh Manis", 5_000, "Minuman", "Teh manis dingin"),
    ("Es Jeruk", 7_000, "Minuman", "Jeruk peras dingin"),
    ("Kopi Susu", 12_000, "Minuman", "Kopi susu gula aren"),
];

/// Demo inventory: (name, stock, unit).
const INVENTORY: &[(&str, f64, &str)] = &[
    ("Tepung Terigu", 12.5, "kg"),
    ("Daging Ayam", 8.0, "kg"),
    ("Mie Telur", 6.0, "kg"),
    ("Teh Celup", 120.0, "pcs"),
    ("Gula Pasir", 10.0, "kg"),
    ("Minyak Goreng", 9.0, "liter"),
];

/// Demo expenses: (days ago, amount, description, category).
const EXPENSES: &[(i64, i64, &str, ExpenseCategory)] = &[
    (1, 250_000, "Belanja bahan baku mingguan", ExpenseCategory::BahanBaku),
    (2, 120_000, "Tagihan listrik", ExpenseCategory::Utilitas),
    (3, 60_000, "Gas LPG", ExpenseCategory::Operasional),
    (5, 400_000, "Gaji harian karyawan", ExpenseCategory::Gaji),
    (6, 35_000, "Kantong plastik dan kemasan", ExpenseCategory::Lainnya),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./kedai_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kedai Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./kedai_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Kedai Seed Data Generator");
    println!("=========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("Connected, migrations applied");

    let existing = db.menus().count().await?;
    if existing > 0 {
        println!("Database already has {} menu items, skipping seed.", existing);
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    for (name, price, category, description) in MENUS {
        db.menus()
            .create(name, *price, category, None, Some((*description).to_string()))
            .await?;
    }
    println!("Seeded {} menu items", MENUS.len());

    for (name, stock, unit) in INVENTORY {
        db.inventory()
            .upsert(&generate_inventory_id(), name, *stock, unit)
            .await?;
    }
    println!("Seeded {} inventory rows", INVENTORY.len());

    let today = Utc::now().date_naive();
    for (days_ago, amount, description, category) in EXPENSES {
        db.expenses()
            .create(today - Duration::days(*days_ago), *amount, description, *category)
            .await?;
    }
    println!("Seeded {} expenses", EXPENSES.len());

    println!();
    println!("Seed complete!");

    Ok(())
}
