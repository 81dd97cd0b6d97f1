//! End-to-end constraint flows against an in-memory store.

use chrono::Utc;

use minqty_core::surface::listing::row_element_id;
use minqty_core::surface::{ActivationTarget, QuickEditSession, MIN_QUANTITY_COLUMN};
use minqty_core::{Notice, Product, ProductId, ValidationOutcome};
use minqty_storefront::error::ErrorCode;
use minqty_storefront::hooks::{self, admin, cart, product};
use minqty_storefront::state::ConfigState;
use minqty_storefront::Storefront;

async fn storefront() -> Storefront {
    Storefront::in_memory(ConfigState::default()).await.unwrap()
}

async fn insert_product(sf: &Storefront, id: &str, name: &str) -> ProductId {
    let now = Utc::now();
    let product = Product {
        id: ProductId::new(id),
        sku: format!("SKU-{}", id),
        name: name.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    sf.db.inner().products().insert(&product).await.unwrap();
    product.id
}

#[tokio::test]
async fn test_minimum_lifecycle() {
    let sf = storefront().await;
    insert_product(&sf, "42", "P").await;

    // No minimum stored: anything positive goes through.
    let added = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "42", Some(1))
        .await
        .unwrap();
    assert!(added.admitted);
    assert_eq!(added.outcome, ValidationOutcome::Accepted { quantity: 1 });
    cart::clear_cart(&sf.db, &sf.cart, &sf.config).await.unwrap();

    admin::save_product_edit(&sf.db, "42", Some("10")).await.unwrap();

    // Below the minimum on add: refused, cart untouched.
    let refused = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "42", Some(3))
        .await
        .unwrap();
    assert!(!refused.admitted);
    assert!(refused.line_key.is_none());
    assert!(refused.cart.items.is_empty());
    assert_eq!(
        hooks::take_notices(&sf.notices),
        vec![Notice::error("The minimum order quantity for P is 10.")]
    );

    // A line already holding 3 (minimum set afterwards) is raised on update.
    admin::save_product_edit(&sf.db, "42", None).await.unwrap();
    let added = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "42", Some(3))
        .await
        .unwrap();
    let key = added.line_key.unwrap();
    admin::save_product_edit(&sf.db, "42", Some("10")).await.unwrap();

    let updated = cart::update_cart_item(&sf.db, &sf.cart, &sf.notices, &sf.config, &key, 3)
        .await
        .unwrap();
    assert!(matches!(
        updated.outcome,
        Some(ValidationOutcome::Corrected { quantity: 10, .. })
    ));
    assert_eq!(updated.cart.items[0].quantity, 10);
    assert_eq!(
        hooks::take_notices(&sf.notices)[0].message,
        "The minimum order quantity for P is 10. The quantity has been updated to the minimum allowed."
    );

    // Re-validating the corrected quantity changes nothing.
    let again = cart::update_cart_item(&sf.db, &sf.cart, &sf.notices, &sf.config, &key, 10)
        .await
        .unwrap();
    assert_eq!(again.outcome, Some(ValidationOutcome::Accepted { quantity: 10 }));
    assert!(sf.notices.is_empty());
}

#[tokio::test]
async fn test_at_or_above_minimum_is_accepted() {
    let sf = storefront().await;
    insert_product(&sf, "7", "Widget").await;
    admin::save_product_edit(&sf.db, "7", Some("5")).await.unwrap();

    let added = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "7", Some(5))
        .await
        .unwrap();
    assert!(added.admitted);
    assert_eq!(added.outcome, ValidationOutcome::Accepted { quantity: 5 });
    assert!(sf.notices.is_empty());
}

#[tokio::test]
async fn test_unreadable_minimum_means_no_constraint() {
    let sf = storefront().await;
    let id = insert_product(&sf, "9", "Bolt").await;
    sf.db
        .inner()
        .meta()
        .upsert(&id, minqty_core::MIN_QUANTITY_META_KEY, "bulk")
        .await
        .unwrap();

    assert_eq!(product::product_summary(&sf.db, "9").await.unwrap(), None);

    let added = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "9", Some(1))
        .await
        .unwrap();
    assert!(added.admitted);
}

#[tokio::test]
async fn test_zero_quantity_update_removes_line() {
    let sf = storefront().await;
    insert_product(&sf, "3", "Nut").await;

    let added = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "3", Some(2))
        .await
        .unwrap();
    admin::save_product_edit(&sf.db, "3", Some("50")).await.unwrap();

    let updated = cart::update_cart_item(
        &sf.db,
        &sf.cart,
        &sf.notices,
        &sf.config,
        &added.line_key.unwrap(),
        0,
    )
    .await
    .unwrap();
    assert!(updated.outcome.is_none());
    assert!(updated.cart.items.is_empty());
    assert!(sf.notices.is_empty());
}

#[tokio::test]
async fn test_product_page_surfaces() {
    let sf = storefront().await;
    insert_product(&sf, "11", "Washer").await;

    let plain = product::product_constraint_view(&sf.db, "11").await.unwrap();
    assert_eq!(plain.input.min_value, 0);
    assert_eq!(plain.input.input_value, 1);
    assert_eq!(plain.summary, None);

    admin::save_product_edit(&sf.db, "11", Some("12")).await.unwrap();
    let view = product::product_constraint_view(&sf.db, "11").await.unwrap();
    assert_eq!(view.input.min_value, 12);
    assert_eq!(view.input.input_value, 12);
    assert_eq!(view.summary.as_deref(), Some("Minimum order quantity: 12"));
}

#[tokio::test]
async fn test_save_policies() {
    let sf = storefront().await;
    insert_product(&sf, "5", "Gear").await;

    admin::save_quick_edit(&sf.db, "5", Some("8")).await.unwrap();
    // Quick edit without the field keeps the value.
    let kept = admin::save_quick_edit(&sf.db, "5", None).await.unwrap();
    assert_eq!(kept.written, None);
    assert_eq!(admin::product_edit_field(&sf.db, "5").await.unwrap().value, "8");

    // Product edit without the field clears it.
    let cleared = admin::save_product_edit(&sf.db, "5", None).await.unwrap();
    assert_eq!(cleared.written.as_deref(), Some(""));
    assert_eq!(admin::product_edit_field(&sf.db, "5").await.unwrap().value, "");
}

#[tokio::test]
async fn test_quick_edit_activation_uses_row_value() {
    let sf = storefront().await;
    let a = insert_product(&sf, "100", "Alpha").await;
    let b = insert_product(&sf, "200", "Beta").await;
    admin::save_product_edit(&sf.db, "100", Some("4")).await.unwrap();

    let columns = admin::list_columns(Vec::new());
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].key, MIN_QUANTITY_COLUMN);

    let listing = admin::render_listing(&sf.db, &sf.config).await.unwrap();
    assert_eq!(listing.len(), 2);

    let mut session = QuickEditSession::new();
    let input = session
        .activate(&listing, &ActivationTarget::RowElement(row_element_id(&a)))
        .unwrap();
    assert_eq!(input.field.value, "4");
    assert_eq!(admin::quick_edit_field().value, "");

    let input = session
        .activate(&listing, &ActivationTarget::RowElement(row_element_id(&b)))
        .unwrap();
    assert_eq!(input.product_id, b);
    assert_eq!(input.field.value, "");
}

#[tokio::test]
async fn test_cart_survives_restore() {
    let sf = storefront().await;
    insert_product(&sf, "8", "Spring").await;
    cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "8", Some(6))
        .await
        .unwrap();

    sf.cart.replace(Default::default());
    assert!(cart::restore_cart(&sf.db, &sf.cart, &sf.config).await.unwrap());
    assert_eq!(cart::get_cart(&sf.cart).totals.total_quantity, 6);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let sf = storefront().await;
    let err = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "404", None)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn test_large_minimum_is_reachable_and_stable() {
    let sf = storefront().await;
    insert_product(&sf, "77", "Pallet").await;

    let added = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "77", Some(3))
        .await
        .unwrap();
    let key = added.line_key.unwrap();
    admin::save_product_edit(&sf.db, "77", Some("10000")).await.unwrap();

    let raised = cart::update_cart_item(&sf.db, &sf.cart, &sf.notices, &sf.config, &key, 3)
        .await
        .unwrap();
    assert!(matches!(
        raised.outcome,
        Some(ValidationOutcome::Corrected { quantity: 10_000, .. })
    ));

    let again = cart::update_cart_item(&sf.db, &sf.cart, &sf.notices, &sf.config, &key, 10_000)
        .await
        .unwrap();
    assert_eq!(again.outcome, Some(ValidationOutcome::Accepted { quantity: 10_000 }));

    cart::clear_cart(&sf.db, &sf.cart, &sf.config).await.unwrap();
    let fresh = cart::add_to_cart(&sf.db, &sf.cart, &sf.notices, &sf.config, "77", Some(10_000))
        .await
        .unwrap();
    assert!(fresh.admitted);
    assert_eq!(fresh.outcome, ValidationOutcome::Accepted { quantity: 10_000 });
}
