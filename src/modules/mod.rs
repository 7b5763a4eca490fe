pub mod books;

use std::sync::Arc;

use bookstore_kernel::ModuleRegistry;
use bookstore_store::BookStore;

/// Register all project-specific modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, store: Arc<dyn BookStore>) {
    registry.register(books::create_module(store));
}
