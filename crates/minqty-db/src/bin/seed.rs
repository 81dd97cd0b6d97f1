//! # Seed Data Generator
//!
//! Populates the database with sample products and minimum order quantities
//! for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 products (default)
//! cargo run -p minqty-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p minqty-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p minqty-db --bin seed -- --db ./data/minqty.db
//! ```
//!
//! ## Generated Minimums
//! Every third product gets a minimum drawn from [`MINIMUMS`]. Every
//! seventh gets a deliberately unreadable value so the "no constraint"
//! path shows up in the admin listing too.

use chrono::Utc;
use minqty_core::{MetadataStore, Product, MIN_QUANTITY_META_KEY};
use minqty_db::repository::product::generate_product_id;
use minqty_db::{Database, DbConfig};
use std::env;

/// Product families sold in bulk.
const FAMILIES: &[(&str, &[&str])] = &[
    ("BLK", &["Basmati Rice", "Rolled Oats", "Lentils", "Chickpeas", "Flour"]),
    ("PKG", &["Shipping Boxes", "Bubble Wrap", "Packing Tape", "Kraft Paper"]),
    ("OFF", &["Copy Paper", "Ballpoint Pens", "Sticky Notes", "Staples"]),
    ("CAF", &["Coffee Beans", "Paper Cups", "Stir Sticks", "Napkins"]),
];

/// Pack sizes appended to each name.
const SIZES: &[&str] = &["Single", "Pack of 6", "Pack of 12", "Case", "Pallet"];

/// Minimums handed out to constrained products.
const MINIMUMS: &[u32] = &[2, 5, 6, 10, 12, 24, 50];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./minqty_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("minqty Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 200)");
                println!("  -d, --db <PATH>    Database file path (default: ./minqty_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 minqty Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let products = db.products();
    let meta = db.meta();
    let start = std::time::Instant::now();
    let mut generated = 0;
    let mut constrained = 0;

    'outer: for (family_code, names) in FAMILIES {
        for name in names.iter() {
            for size in SIZES {
                if generated >= count {
                    break 'outer;
                }

                let product = generate_product(family_code, name, size, generated);
                if let Err(e) = products.insert(&product).await {
                    eprintln!("Failed to insert {}: {}", product.sku, e);
                    continue;
                }

                if let Some(value) = minimum_for(generated) {
                    meta.set_meta(&product.id, MIN_QUANTITY_META_KEY, &value)
                        .await?;
                    constrained += 1;
                }

                generated += 1;
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    println!("  {} with a stored minimum", constrained);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Stored minimum for the `seed`-th product, if it gets one.
fn minimum_for(seed: usize) -> Option<String> {
    if seed % 7 == 6 {
        Some("bulk".to_string())
    } else if seed % 3 == 0 {
        Some(MINIMUMS[(seed / 3) % MINIMUMS.len()].to_string())
    } else {
        None
    }
}

/// Builds one product.
fn generate_product(family: &str, name: &str, size: &str, seed: usize) -> Product {
    let now = Utc::now();
    let stem: String = name
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .take(3)
        .collect::<String>()
        .to_uppercase();

    Product {
        id: generate_product_id(),
        sku: format!("{}-{}-{:04}", family, stem, seed),
        name: format!("{} ({})", name, size),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}
