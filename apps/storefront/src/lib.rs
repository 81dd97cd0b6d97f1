//! # minqty Storefront Library
//!
//! The host-facing layer of the minimum order quantity engine: opens the
//! database, owns per-process state and exposes the hooks.
//!
//! ## Module Organization
//! ```text
//! minqty_storefront/
//! ├── lib.rs          ◄─── You are here (startup & state bundle)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── cart.rs     ◄─── Cart state management
//! │   ├── notices.rs  ◄─── Queued shopper notices
//! │   └── config.rs   ◄─── Configuration state
//! ├── hooks/
//! │   ├── mod.rs      ◄─── Hook exports
//! │   ├── cart.rs     ◄─── Add to cart / cart update
//! │   ├── product.rs  ◄─── Product page surfaces
//! │   └── admin.rs    ◄─── Edit screen, quick edit, list column
//! └── error.rs        ◄─── API error type for hooks
//! ```
//!
//! ## State Management
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌────────────┐ ┌────────────┐ ┌──────────────┐ ┌──────────────────┐   │
//! │  │  DbState   │ │ CartState  │ │ NoticeState  │ │   ConfigState    │   │
//! │  │            │ │            │ │              │ │                  │   │
//! │  │ • Pool     │ │ • Lines    │ │ • Refusals   │ │ • Session id     │   │
//! │  │ • Repos    │ │ • Totals   │ │ • Raises     │ │ • Page size      │   │
//! │  └────────────┘ └────────────┘ └──────────────┘ └──────────────────┘   │
//! │                                                                         │
//! │  Each hook only takes the state it needs.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod hooks;
pub mod state;

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use minqty_db::{Database, DbConfig};
use state::{CartState, ConfigState, DbState, NoticeState};

/// All storefront state, opened together.
#[derive(Debug, Clone)]
pub struct Storefront {
    pub db: DbState,
    pub cart: CartState,
    pub notices: NoticeState,
    pub config: ConfigState,
}

impl Storefront {
    /// Opens the database named by `config` and sets up empty state.
    ///
    /// ## Startup Sequence
    /// 1. Determine database path
    /// 2. Connect & run migrations
    /// 3. Initialize state objects
    pub async fn open(config: ConfigState) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = database_path(&config)?;
        info!(?db_path, "Database path determined");

        let db = Database::new(DbConfig::new(db_path)).await?;
        info!("Database connected and migrations applied");

        Ok(Self::with_database(db, config))
    }

    /// Storefront over a fresh in-memory database.
    pub async fn in_memory(config: ConfigState) -> Result<Self, ApiError> {
        let db = Database::new(DbConfig::in_memory()).await?;
        Ok(Self::with_database(db, config))
    }

    fn with_database(db: Database, config: ConfigState) -> Self {
        Storefront {
            db: DbState::new(db),
            cart: CartState::new(),
            notices: NoticeState::new(),
            config,
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=minqty=trace` - Show trace for minqty crates only
/// - Default: `info,minqty=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,minqty=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.minqty.storefront/minqty.db`
/// - **Windows**: `%APPDATA%\minqty\storefront\data\minqty.db`
/// - **Linux**: `~/.local/share/storefront/minqty.db`
///
/// `MINQTY_DB_PATH` (via [`ConfigState::database_path`]) wins over all of these.
pub fn database_path(config: &ConfigState) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "minqty", "storefront")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("minqty.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_database_path_wins() {
        let config = ConfigState {
            database_path: Some(PathBuf::from("/tmp/minqty-test.db")),
            ..ConfigState::default()
        };
        assert_eq!(
            database_path(&config).unwrap(),
            PathBuf::from("/tmp/minqty-test.db")
        );
    }

    #[tokio::test]
    async fn test_in_memory_storefront_starts_empty() {
        let sf = Storefront::in_memory(ConfigState::default()).await.unwrap();
        assert!(sf.cart.with_cart(|c| c.is_empty()));
        assert!(sf.notices.is_empty());
        assert!(sf.db.inner().health_check().await);
    }
}
