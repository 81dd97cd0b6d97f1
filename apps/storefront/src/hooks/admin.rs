//! # Admin Hooks
//!
//! Product edit screen, quick edit and the product list column.
//!
//! ## Hook Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen              Hook                     Effect                    │
//! │  ──────              ────                     ──────                    │
//! │  Product edit        product_edit_field()     field prefilled           │
//! │                      save_product_edit()      missing field clears      │
//! │                                                                         │
//! │  Product list        list_columns()           "Min" column appended     │
//! │                      render_listing()         render phase, per row     │
//! │                      quick_edit_field()       empty field, once         │
//! │                      save_quick_edit()        missing field keeps value │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Activation (copying a row's hidden value into the quick edit field) runs
//! client-side against the [`RenderedListing`] via
//! [`QuickEditSession`](minqty_core::surface::QuickEditSession).

use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use minqty_core::surface::{register_column, ListColumn, NumberField, RenderedListing};
use minqty_core::validation::validate_product_id;
use minqty_core::{ProductId, SurfaceSynchronizer};

/// What a save wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResponse {
    pub product_id: ProductId,
    /// The stored value, `None` when nothing was written.
    pub written: Option<String>,
}

/// Appends the minimum quantity column to the host's columns.
pub fn list_columns(existing: Vec<ListColumn>) -> Vec<ListColumn> {
    register_column(existing)
}

/// Render phase for one page of the admin product list.
pub async fn render_listing(db: &DbState, config: &ConfigState) -> Result<RenderedListing, ApiError> {
    let db = db.inner();
    let products = db.products().list_active(config.listing_page_size).await?;
    let ids: Vec<ProductId> = products.into_iter().map(|p| p.id).collect();

    let meta = db.meta();
    let listing = SurfaceSynchronizer::new(&meta).render_listing(&ids).await;

    debug!(rows = listing.len(), "Rendered product listing");
    Ok(listing)
}

/// The product edit field, prefilled.
pub async fn product_edit_field(db: &DbState, product_id: &str) -> Result<NumberField, ApiError> {
    let product_id = validate_product_id(product_id)?;

    let meta = db.inner().meta();
    Ok(SurfaceSynchronizer::new(&meta)
        .product_edit_field(&product_id)
        .await)
}

/// The quick edit field. Always empty until a row is activated.
pub fn quick_edit_field() -> NumberField {
    minqty_core::surface::quick_edit_field()
}

/// Saves a product edit submission.
///
/// `submitted == None` means the form did not carry the field, which clears
/// the stored value.
pub async fn save_product_edit(
    db: &DbState,
    product_id: &str,
    submitted: Option<&str>,
) -> Result<SaveResponse, ApiError> {
    let product_id = validate_product_id(product_id)?;

    let meta = db.inner().meta();
    let written = SurfaceSynchronizer::new(&meta)
        .save_product_edit(&product_id, submitted)
        .await?;

    info!(product_id = %product_id, written = ?written, "Product edit saved");
    Ok(SaveResponse {
        product_id,
        written,
    })
}

/// Saves a quick edit submission.
///
/// `submitted == None` leaves the stored value untouched.
pub async fn save_quick_edit(
    db: &DbState,
    product_id: &str,
    submitted: Option<&str>,
) -> Result<SaveResponse, ApiError> {
    let product_id = validate_product_id(product_id)?;

    let meta = db.inner().meta();
    let written = SurfaceSynchronizer::new(&meta)
        .save_quick_edit(&product_id, submitted)
        .await?;

    info!(product_id = %product_id, written = ?written, "Quick edit saved");
    Ok(SaveResponse {
        product_id,
        written,
    })
}
