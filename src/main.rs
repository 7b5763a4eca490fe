use std::sync::Arc;

use anyhow::Context;
use bookstore_kernel::{InitCtx, ModuleRegistry};
use bookstore_kernel::settings::Settings;
use bookstore_store::{BookStore, MemoryBookStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;

    bookstore_telemetry::init(&settings.telemetry.log_format);

    tracing::info!(
        env = ?settings.environment,
        seed = settings.store.seed,
        "bookstore-app bootstrap starting"
    );

    let store: Arc<dyn BookStore> = Arc::new(MemoryBookStore::new());

    let mut registry = ModuleRegistry::new();
    bookstore_app::modules::register_all(&mut registry, store);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    bookstore_http::start_server(&registry, &settings).await?;

    registry.stop_modules().await?;

    tracing::info!("bookstore-app shut down");
    Ok(())
}
