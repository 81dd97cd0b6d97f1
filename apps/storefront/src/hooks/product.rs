//! # Product Page Hooks
//!
//! What the storefront product page needs: the quantity widget arguments
//! and the "Minimum order quantity" line under the price.

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::DbState;
use minqty_core::surface::QuantityInputArgs;
use minqty_core::validation::validate_product_id;
use minqty_core::SurfaceSynchronizer;

/// Everything the product page renders for the constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductConstraintView {
    pub input: QuantityInputArgs,
    pub summary: Option<String>,
}

/// Adjusts the host's quantity widget arguments.
///
/// `host` defaults to the platform arguments when the caller has none.
pub async fn quantity_input_args(
    db: &DbState,
    product_id: &str,
    host: Option<QuantityInputArgs>,
) -> Result<QuantityInputArgs, ApiError> {
    let product_id = validate_product_id(product_id)?;
    debug!(product_id = %product_id, "quantity_input_args hook");

    let meta = db.inner().meta();
    let args = SurfaceSynchronizer::new(&meta)
        .quantity_input_args(&product_id, host.unwrap_or_default())
        .await;

    Ok(args)
}

/// The summary line, `None` when the product has no minimum.
pub async fn product_summary(db: &DbState, product_id: &str) -> Result<Option<String>, ApiError> {
    let product_id = validate_product_id(product_id)?;

    let meta = db.inner().meta();
    Ok(SurfaceSynchronizer::new(&meta)
        .summary_message(&product_id)
        .await)
}

/// Widget arguments and summary together, for a full page render.
pub async fn product_constraint_view(
    db: &DbState,
    product_id: &str,
) -> Result<ProductConstraintView, ApiError> {
    Ok(ProductConstraintView {
        input: quantity_input_args(db, product_id, None).await?,
        summary: product_summary(db, product_id).await?,
    })
}
