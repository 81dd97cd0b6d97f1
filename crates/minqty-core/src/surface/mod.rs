//! # Surface Synchronizer
//!
//! Every place the minimum shows up, kept in step with one stored value.
//!
//! ## Surfaces
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     _custom_minimum_quantity                            │
//! │                               │                                         │
//! │            ┌──────────────────┼──────────────────┐                      │
//! │            ▼                  ▼                  ▼                      │
//! │   STOREFRONT             ADMIN EDIT          ADMIN LIST                 │
//! │   ├── quantity input     ├── product field   ├── "Min" column           │
//! │   │   (value, min)       │   (prefilled)     │   (visible + hidden)     │
//! │   └── summary line       └── quick edit ◄────┘   activation copies      │
//! │                              field                the row's hidden value│
//! │                                                                         │
//! │   Reads go through ConstraintResolver. Writes go through the save       │
//! │   policies in [`fields`] and then straight to the store.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submodules
//! - [`input`] - storefront quantity widget and summary line
//! - [`fields`] - admin fields and save policies
//! - [`listing`] - list column, render phase, quick edit activation

pub mod fields;
pub mod input;
pub mod listing;

pub use fields::{
    product_edit_field, quick_edit_field, value_to_store, NumberField, SaveSource,
    FIELD_DESCRIPTION, FIELD_LABEL,
};
pub use input::{summary_message, QuantityInputArgs};
pub use listing::{
    register_column, render_cell, ActivationTarget, ColumnCell, ListColumn, QuickEditInput,
    QuickEditSession, RenderedListing, HIDDEN_ATTRIBUTE, MIN_QUANTITY_COLUMN,
    MIN_QUANTITY_COLUMN_LABEL,
};

use tracing::debug;

use crate::resolver::ConstraintResolver;
use crate::store::MetadataStore;
use crate::types::ProductId;
use crate::MIN_QUANTITY_META_KEY;

/// Projects a product's minimum onto storefront and admin surfaces.
#[derive(Debug)]
pub struct SurfaceSynchronizer<'a, S: ?Sized> {
    store: &'a S,
    resolver: ConstraintResolver<'a, S>,
}

impl<'a, S> SurfaceSynchronizer<'a, S>
where
    S: MetadataStore + ?Sized,
{
    /// Creates a synchronizer over `store`.
    pub fn new(store: &'a S) -> Self {
        SurfaceSynchronizer {
            store,
            resolver: ConstraintResolver::new(store),
        }
    }

    // =========================================================================
    // Storefront
    // =========================================================================

    /// Adjusts the host's quantity widget arguments for `product_id`.
    pub async fn quantity_input_args(
        &self,
        product_id: &ProductId,
        host: QuantityInputArgs,
    ) -> QuantityInputArgs {
        host.with_minimum(self.resolver.resolve(product_id).await)
    }

    /// Summary line for the product page, `None` when unconstrained.
    pub async fn summary_message(&self, product_id: &ProductId) -> Option<String> {
        summary_message(self.resolver.resolve(product_id).await)
    }

    // =========================================================================
    // Admin Edit
    // =========================================================================

    /// The product edit field, prefilled with the resolved minimum.
    pub async fn product_edit_field(&self, product_id: &ProductId) -> NumberField {
        product_edit_field(self.resolver.resolve(product_id).await)
    }

    /// The quick edit field. It carries no value until a row is activated.
    pub fn quick_edit_field(&self) -> NumberField {
        quick_edit_field()
    }

    /// Persists a product edit submission.
    ///
    /// A missing field clears the stored value. Returns what was written.
    pub async fn save_product_edit(
        &self,
        product_id: &ProductId,
        submitted: Option<&str>,
    ) -> Result<Option<String>, S::Error> {
        self.save(product_id, submitted, SaveSource::ProductEdit).await
    }

    /// Persists a quick edit submission.
    ///
    /// A missing field leaves the stored value alone and returns `Ok(None)`.
    pub async fn save_quick_edit(
        &self,
        product_id: &ProductId,
        submitted: Option<&str>,
    ) -> Result<Option<String>, S::Error> {
        self.save(product_id, submitted, SaveSource::QuickEdit).await
    }

    async fn save(
        &self,
        product_id: &ProductId,
        submitted: Option<&str>,
        source: SaveSource,
    ) -> Result<Option<String>, S::Error> {
        let Some(value) = value_to_store(submitted, source) else {
            debug!(product_id = %product_id, ?source, "No minimum submitted, keeping stored value");
            return Ok(None);
        };

        self.store
            .set_meta(product_id, MIN_QUANTITY_META_KEY, &value)
            .await?;

        debug!(product_id = %product_id, ?source, value = %value, "Saved minimum quantity");
        Ok(Some(value))
    }

    // =========================================================================
    // Admin List
    // =========================================================================

    /// Render phase: resolves every listed product once and embeds the value.
    pub async fn render_listing<'p, I>(&self, product_ids: I) -> RenderedListing
    where
        I: IntoIterator<Item = &'p ProductId>,
    {
        let mut listing = RenderedListing::new();
        for product_id in product_ids {
            let minimum = self.resolver.resolve(product_id).await;
            listing.push(render_cell(product_id, minimum));
        }
        listing
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryMetaStore;

    fn id(s: &str) -> ProductId {
        ProductId::from(s)
    }

    #[tokio::test]
    async fn test_storefront_surfaces_follow_store() {
        let store = MemoryMetaStore::new().with_value("1", MIN_QUANTITY_META_KEY, "10");
        let sync = SurfaceSynchronizer::new(&store);

        let args = sync
            .quantity_input_args(&id("1"), QuantityInputArgs::default())
            .await;
        assert_eq!((args.input_value, args.min_value), (10, 10));
        assert_eq!(
            sync.summary_message(&id("1")).await.as_deref(),
            Some("Minimum order quantity: 10")
        );

        let args = sync
            .quantity_input_args(&id("2"), QuantityInputArgs::default())
            .await;
        assert_eq!(args, QuantityInputArgs::default());
        assert!(sync.summary_message(&id("2")).await.is_none());
    }

    #[tokio::test]
    async fn test_product_edit_save_then_read_back() {
        let store = MemoryMetaStore::new();
        let sync = SurfaceSynchronizer::new(&store);

        let written = sync.save_product_edit(&id("1"), Some(" 7 ")).await.unwrap();
        assert_eq!(written.as_deref(), Some("7"));
        assert_eq!(sync.product_edit_field(&id("1")).await.value, "7");
    }

    #[tokio::test]
    async fn test_product_edit_without_field_clears() {
        let store = MemoryMetaStore::new().with_value("1", MIN_QUANTITY_META_KEY, "7");
        let sync = SurfaceSynchronizer::new(&store);

        sync.save_product_edit(&id("1"), None).await.unwrap();

        assert_eq!(
            store.get_meta(&id("1"), MIN_QUANTITY_META_KEY).await.unwrap(),
            Some(String::new())
        );
        assert!(sync.summary_message(&id("1")).await.is_none());
    }

    #[tokio::test]
    async fn test_quick_edit_without_field_keeps_value() {
        let store = MemoryMetaStore::new().with_value("1", MIN_QUANTITY_META_KEY, "7");
        let sync = SurfaceSynchronizer::new(&store);

        assert_eq!(sync.save_quick_edit(&id("1"), None).await.unwrap(), None);
        assert_eq!(
            store.get_meta(&id("1"), MIN_QUANTITY_META_KEY).await.unwrap(),
            Some("7".to_string())
        );
    }

    #[tokio::test]
    async fn test_render_then_activate() {
        let store = MemoryMetaStore::new()
            .with_value("5", MIN_QUANTITY_META_KEY, "5")
            .with_value("6", MIN_QUANTITY_META_KEY, "junk");
        let sync = SurfaceSynchronizer::new(&store);

        let ids = [id("5"), id("6")];
        let listing = sync.render_listing(&ids).await;
        assert_eq!(listing.len(), 2);

        let mut session = QuickEditSession::new();
        let target = ActivationTarget::RowElement("post-6".to_string());
        assert_eq!(session.activate(&listing, &target).unwrap().field.value, "");

        let target = ActivationTarget::RowElement("post-5".to_string());
        assert_eq!(session.activate(&listing, &target).unwrap().field.value, "5");
    }
}
