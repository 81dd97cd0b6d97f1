//! # minqty Storefront Entry Point
//!
//! Opens the store, restores the configured cart session and prints the
//! state a host would render on startup.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration from `MINQTY_*` variables
//! 3. Open the database (app data directory unless `MINQTY_DB_PATH`)
//! 4. Restore the cart session
//! 5. Render the admin listing and print a JSON status

use serde_json::json;
use tracing::{error, info};

use minqty_db::migrations::migration_status;
use minqty_storefront::hooks::{self, admin, cart};
use minqty_storefront::state::ConfigState;
use minqty_storefront::{init_tracing, Storefront};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        error!("Storefront failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigState::from_env();
    info!(store = %config.store_name, session = %config.session_id, "Starting minqty storefront");

    let sf = Storefront::open(config).await?;

    let restored = cart::restore_cart(&sf.db, &sf.cart, &sf.config).await?;
    let listing = admin::render_listing(&sf.db, &sf.config).await?;

    let db = sf.db.inner();
    let (total, applied) = migration_status(db.pool()).await?;
    let healthy = db.health_check().await;

    let status = json!({
        "config": hooks::get_config(&sf.config),
        "database": {
            "healthy": healthy,
            "migrations": { "total": total, "applied": applied },
        },
        "restoredCart": restored,
        "cart": cart::get_cart(&sf.cart),
        "columns": admin::list_columns(Vec::new()),
        "listing": listing,
    });

    println!("{}", serde_json::to_string_pretty(&status)?);

    db.close().await;
    Ok(())
}
