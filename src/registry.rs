use hashbrown::HashMap;
use thiserror::Error;

use crate::action::ActionDescriptor;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("handler for action '{controller}.{method}' is already registered")]
    DuplicateHandler { controller: String, method: String },
}

/// Explicit dispatch registry: `(controller, method)` to a caller-supplied
/// handler, populated at startup and looked up by descriptor. This lives on
/// the dispatcher's side of the boundary; the matching engine only produces
/// descriptors and never performs the lookup.
#[derive(Debug)]
pub struct ActionRegistry<H> {
    handlers: HashMap<String, HashMap<String, H>>,
}

impl<H> ActionRegistry<H> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(
        &mut self,
        controller: impl Into<String>,
        method: impl Into<String>,
        handler: H,
    ) -> Result<(), RegistryError> {
        let controller = controller.into();
        let method = method.into();
        let methods = self.handlers.entry(controller.clone()).or_default();
        if methods.contains_key(&method) {
            return Err(RegistryError::DuplicateHandler { controller, method });
        }
        methods.insert(method, handler);
        Ok(())
    }

    /// `None` means no handler was registered for the descriptor; the caller
    /// decides the fallback.
    pub fn resolve(&self, action: &ActionDescriptor) -> Option<&H> {
        self.handlers
            .get(action.controller.as_str())?
            .get(action.method.as_str())
    }

    pub fn len(&self) -> usize {
        self.handlers.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.values().all(HashMap::is_empty)
    }
}

impl<H> Default for ActionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
