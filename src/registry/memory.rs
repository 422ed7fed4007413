//! registry::memory
//!
//! In-memory command registry.
//!
//! # Design
//!
//! Factories live in a `RwLock`-guarded map. Lookups take the read lock
//! just long enough to clone the factory `Arc`, so handler creation and
//! verb execution never run under the lock. Registration and removal may
//! happen at any time from any thread.
//!
//! # Example
//!
//! ```
//! use kraken_console::registry::{CommandRegistry, InMemoryRegistry};
//! use kraken_console::engine::handler::{TableFactory, VerbTable};
//!
//! let registry = InMemoryRegistry::new();
//! let table: VerbTable<()> = VerbTable::new();
//! registry.register("empty", TableFactory::with_default_state("empty", table)).unwrap();
//!
//! assert!(registry.lookup("empty").is_some());
//! assert!(registry.unregister("empty"));
//! assert!(registry.lookup("empty").is_none());
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::traits::{validate_alias, CommandRegistry, HandlerFactory, RegistryError};

/// Thread-safe alias directory.
#[derive(Default)]
pub struct InMemoryRegistry {
    factories: RwLock<BTreeMap<String, Arc<dyn HandlerFactory>>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `alias`.
    ///
    /// # Errors
    ///
    /// - `InvalidAlias` if the alias cannot be typed as a command prefix
    /// - `Duplicate` if the alias is taken
    pub fn register(
        &self,
        alias: &str,
        factory: impl HandlerFactory + 'static,
    ) -> Result<(), RegistryError> {
        self.register_shared(alias, Arc::new(factory))
    }

    /// Register an already shared factory.
    pub fn register_shared(
        &self,
        alias: &str,
        factory: Arc<dyn HandlerFactory>,
    ) -> Result<(), RegistryError> {
        validate_alias(alias)?;

        let mut factories = self.write();
        if factories.contains_key(alias) {
            return Err(RegistryError::Duplicate(alias.to_string()));
        }
        factories.insert(alias.to_string(), factory);
        tracing::debug!(alias, "registered command alias");
        Ok(())
    }

    /// Remove the factory under `alias`. Returns whether one was present.
    pub fn unregister(&self, alias: &str) -> bool {
        let removed = self.write().remove(alias).is_some();
        if removed {
            tracing::debug!(alias, "unregistered command alias");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-updated,
    // so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Arc<dyn HandlerFactory>>> {
        self.factories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Arc<dyn HandlerFactory>>> {
        self.factories.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CommandRegistry for InMemoryRegistry {
    fn lookup(&self, alias: &str) -> Option<Arc<dyn HandlerFactory>> {
        self.read().get(alias).cloned()
    }

    fn aliases(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }
}

impl std::fmt::Debug for InMemoryRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRegistry")
            .field("aliases", &self.aliases())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::handler::Handler;
    use std::thread;

    struct NoHandler;

    impl HandlerFactory for NoHandler {
        fn create(&self) -> Option<Box<dyn Handler>> {
            None
        }
    }

    #[test]
    fn register_and_lookup() {
        let registry = InMemoryRegistry::new();
        registry.register("svc", NoHandler).unwrap();

        assert!(registry.lookup("svc").is_some());
        assert!(registry.lookup("other").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_rejected() {
        let registry = InMemoryRegistry::new();
        registry.register("svc", NoHandler).unwrap();
        assert_eq!(
            registry.register("svc", NoHandler),
            Err(RegistryError::Duplicate("svc".into()))
        );
    }

    #[test]
    fn invalid_alias_rejected() {
        let registry = InMemoryRegistry::new();
        assert!(matches!(
            registry.register("a.b", NoHandler),
            Err(RegistryError::InvalidAlias(_))
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn aliases_sorted() {
        let registry = InMemoryRegistry::new();
        registry.register("zeta", NoHandler).unwrap();
        registry.register("alpha", NoHandler).unwrap();
        assert_eq!(registry.aliases(), ["alpha", "zeta"]);
    }

    #[test]
    fn unregister_then_reregister() {
        let registry = InMemoryRegistry::new();
        registry.register("svc", NoHandler).unwrap();
        assert!(registry.unregister("svc"));
        assert!(!registry.unregister("svc"));
        registry.register("svc", NoHandler).unwrap();
        assert!(registry.lookup("svc").is_some());
    }

    #[test]
    fn concurrent_readers_and_writer() {
        let registry = Arc::new(InMemoryRegistry::new());
        registry.register("stable", NoHandler).unwrap();

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..200 {
                        assert!(registry.lookup("stable").is_some());
                    }
                })
            })
            .collect();

        for i in 0..50 {
            let alias = format!("dyn{i}");
            registry.register(&alias, NoHandler).unwrap();
            assert!(registry.unregister(&alias));
        }

        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(registry.aliases(), ["stable"]);
    }
}
