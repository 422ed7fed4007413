//! builtins
//!
//! Handlers that ship with the console.
//!
//! - [`core_script`] - The `core` alias (`echo`, `aliases`, `verbs`, `usage`)

pub mod core_script;

pub use core_script::{core_factory, CoreScript, CORE_ALIAS};

use std::sync::Arc;

use crate::registry::{CommandRegistry, InMemoryRegistry, RegistryError};

/// Register all built-in aliases in `registry`.
///
/// # Errors
///
/// Returns `RegistryError::Duplicate` if a built-in alias is already taken.
pub fn register_builtins(registry: &Arc<InMemoryRegistry>) -> Result<(), RegistryError> {
    let shared: Arc<dyn CommandRegistry> = registry.clone();
    registry.register(CORE_ALIAS, core_factory(Arc::downgrade(&shared)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_core() {
        let registry = Arc::new(InMemoryRegistry::new());
        register_builtins(&registry).unwrap();
        assert_eq!(registry.aliases(), [CORE_ALIAS]);
    }

    #[test]
    fn twice_is_duplicate() {
        let registry = Arc::new(InMemoryRegistry::new());
        register_builtins(&registry).unwrap();
        assert_eq!(
            register_builtins(&registry),
            Err(RegistryError::Duplicate(CORE_ALIAS.to_string()))
        );
    }
}
