//! Name-to-logger lookup table

use super::logger::Logger;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::thread::{self, ThreadId};

static GLOBAL: OnceLock<Arc<LoggerRegistry>> = OnceLock::new();

/// Maps logger names to shared loggers.
///
/// Usually reached through [`LoggerRegistry::global`]; a standalone instance
/// can be handed to a [`LogManager`](super::manager::LogManager) instead.
#[derive(Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<dyn Logger>>>,
    /// Name of each thread's current logger in this registry
    current: Mutex<HashMap<ThreadId, String>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> Arc<LoggerRegistry> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(LoggerRegistry::new())))
    }

    /// Register `logger` under its name and make it this thread's current
    /// logger. Returns the logger previously registered under that name.
    pub fn register(&self, logger: Arc<dyn Logger>) -> Option<Arc<dyn Logger>> {
        let name = logger.name().to_string();
        let previous = self.loggers.write().insert(name.clone(), logger);
        self.current.lock().insert(thread::current().id(), name);
        previous
    }

    pub fn unregister(&self, name: &str) -> Option<Arc<dyn Logger>> {
        let removed = self.loggers.write().remove(name);
        if removed.is_some() {
            self.current.lock().retain(|_, current| current != name);
        }
        removed
    }

    pub fn unregister_all(&self) {
        self.loggers.write().clear();
        self.current.lock().clear();
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Logger>> {
        self.loggers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.loggers.read().contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.loggers.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }

    /// Select this thread's current logger by name; `None` clears it.
    ///
    /// Returns `false`, leaving the selection unchanged, when `name` is not
    /// registered here.
    pub fn set_current(&self, name: Option<&str>) -> bool {
        let id = thread::current().id();
        match name {
            Some(name) if !self.contains(name) => false,
            Some(name) => {
                self.current.lock().insert(id, name.to_string());
                true
            }
            None => {
                self.current.lock().remove(&id);
                true
            }
        }
    }

    /// The logger most recently registered or selected on this thread.
    pub fn current(&self) -> Option<Arc<dyn Logger>> {
        let name = self.current_name()?;
        self.get(&name)
    }

    pub fn current_name(&self) -> Option<String> {
        self.current.lock().get(&thread::current().id()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sync_logger::SyncLogger;
    use std::thread;

    fn logger(name: &str) -> Arc<dyn Logger> {
        Arc::new(SyncLogger::new(name))
    }

    #[test]
    fn test_register_and_get() {
        let registry = LoggerRegistry::new();
        assert!(registry.register(logger("a")).is_none());
        assert!(registry.register(logger("b")).is_none());

        assert_eq!(registry.get("a").map(|l| l.name().to_string()), Some("a".into()));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_register_replaces_same_name() {
        let registry = LoggerRegistry::new();
        let first = logger("dup");
        registry.register(Arc::clone(&first));

        let previous = registry.register(logger("dup"));
        assert!(previous.is_some_and(|p| Arc::ptr_eq(&p, &first)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unregister() {
        let registry = LoggerRegistry::new();
        registry.register(logger("gone"));
        assert!(registry.unregister("gone").is_some());
        assert!(registry.unregister("gone").is_none());
        assert!(!registry.contains("gone"));
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_unregister_all() {
        let registry = LoggerRegistry::new();
        registry.register(logger("x"));
        registry.register(logger("y"));
        registry.unregister_all();
        assert!(registry.is_empty());
        assert!(registry.current_name().is_none());
    }

    #[test]
    fn test_current_is_thread_local() {
        let registry = Arc::new(LoggerRegistry::new());
        registry.register(logger("main-thread"));
        assert_eq!(
            registry.current().map(|l| l.name().to_string()),
            Some("main-thread".into())
        );

        let shared = Arc::clone(&registry);
        let other = thread::spawn(move || shared.current().is_none())
            .join()
            .unwrap();
        assert!(other);
    }

    #[test]
    fn test_set_current_by_name() {
        let registry = LoggerRegistry::new();
        registry.register(logger("first"));
        registry.register(logger("second"));
        assert_eq!(registry.current_name().as_deref(), Some("second"));

        assert!(registry.set_current(Some("first")));
        assert_eq!(registry.current_name().as_deref(), Some("first"));

        assert!(!registry.set_current(Some("unknown")));
        assert_eq!(registry.current_name().as_deref(), Some("first"));

        assert!(registry.set_current(None));
        assert!(registry.current().is_none());
    }

    #[test]
    fn test_registries_keep_separate_current_loggers() {
        let global = LoggerRegistry::global();
        let before = global.current_name();

        let private = LoggerRegistry::new();
        private.register(logger("registry.private.only"));
        assert_eq!(
            private.current_name().as_deref(),
            Some("registry.private.only")
        );
        assert_eq!(global.current_name(), before);
        assert!(!global.contains("registry.private.only"));

        private.unregister_all();
        assert_eq!(global.current_name(), before);
    }

    #[test]
    fn test_current_does_not_hold_unregistered_logger() {
        let registry = LoggerRegistry::new();
        let held = logger("weakly.held");
        registry.register(Arc::clone(&held));
        registry.unregister("weakly.held");
        assert_eq!(Arc::strong_count(&held), 1);
    }

    #[test]
    fn test_global_is_shared() {
        let a = LoggerRegistry::global();
        let b = LoggerRegistry::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
