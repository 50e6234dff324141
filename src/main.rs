mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod form;
mod listing;
mod product_store;
mod storage;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn, Instrument};

use crate::app_system::{setup_tracing, AppError, InventoryConfig, InventorySystem};
use crate::form::{EditorFields, FormSession};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = InventoryConfig::from_env()?;
    let system = InventorySystem::start(&config)?;
    let controller = system.form_controller();

    // New product through the editor
    let mut session = FormSession::new();
    let span = tracing::info_span!("editor_session", title = session.title());
    let saved = async {
        let mut input = EditorFields::new("Widget", "2", "10", "");
        session.mark_changed();
        input.step_stock(true)?;
        info!(
            stock = %input.stock,
            unsaved = session.needs_discard_confirmation(),
            "Editor filled in"
        );
        controller.save(session.bound_id(), &input).await
    }
    .instrument(span)
    .await?;
    session.apply_save(&saved);
    info!(
        result = %saved,
        state = ?session.state(),
        changed = session.has_changed(),
        can_delete = session.can_delete(),
        "Editor saved"
    );

    // Untouched form leaves the table alone
    let skipped = controller.save(None, &EditorFields::default()).await?;
    info!(result = %skipped, "Blank form");

    // List rows and sell from the first one
    let products = system.product_client.list_products().await?;
    for row in listing::rows(&products) {
        info!(
            id = row.id,
            name = %row.name,
            stock = row.stock,
            price = row.price,
            picture = %row.picture,
            sell_visible = row.sell_visible,
            "Row"
        );
    }

    if let Some(id) = session.bound_id() {
        let sale = controller.quick_sell(id, 3).await;
        info!(result = %sale, "Quick sell");
        let restock = controller.quick_restock(id, 2).await;
        info!(result = %restock, "Quick restock");

        // Reopen the product, rename it, then delete it
        let mut edit = FormSession::editing(id);
        let mut fields = controller.load(id).await?;
        fields.name = "Widget Pro".to_string();
        edit.mark_changed();
        let updated = controller.save(edit.bound_id(), &fields).await?;
        edit.apply_save(&updated);
        info!(result = %updated, "Editor updated");

        let deleted = controller.delete(id).await;
        edit.apply_delete(&deleted);
        info!(result = %deleted, closed = edit.is_closed(), "Editor delete");

        let again = controller.delete(id).await;
        warn!(result = %again, "Second delete of the same product");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
