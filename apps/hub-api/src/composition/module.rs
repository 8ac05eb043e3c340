//! Feature module contract and the context a module is built in

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::Router;
use tracing::debug;

use super::bindings::{downcast, erase, Capability};
use super::{Bindings, CompositionError, Token};

/// One bounded context's composition unit
pub trait FeatureModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Modules whose exports this module may resolve
    fn imports(&self) -> &'static [&'static str] {
        &[]
    }

    /// Construct services, declare exports and mount routes
    fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError>;
}

/// Providers and exports of a module that has been built
#[derive(Default)]
pub(crate) struct BuiltModule {
    pub(crate) providers: HashMap<&'static str, Capability>,
    pub(crate) exports: HashSet<&'static str>,
}

/// Build-time view of the graph for one module
pub struct ModuleContext<'a> {
    module: &'static str,
    imports: &'static [&'static str],
    built: &'a HashMap<&'static str, BuiltModule>,
    bindings: &'a Bindings,
    own: BuiltModule,
    router: Router,
}

impl<'a> ModuleContext<'a> {
    pub(crate) fn new(
        module: &'static str,
        imports: &'static [&'static str],
        built: &'a HashMap<&'static str, BuiltModule>,
        bindings: &'a Bindings,
    ) -> Self {
        Self {
            module,
            imports,
            built,
            bindings,
            own: BuiltModule::default(),
            router: Router::new(),
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Register an instance private to this module
    pub fn provide<T: ?Sized + Send + Sync + 'static>(&mut self, token: Token<T>, instance: Arc<T>) {
        debug!(module = self.module, capability = token.name(), "Provider registered");
        self.own.providers.insert(token.name(), erase(instance));
    }

    /// Make a provided instance resolvable by importing modules
    pub fn export<T: ?Sized>(&mut self, token: Token<T>) -> Result<(), CompositionError> {
        if !self.own.providers.contains_key(token.name()) {
            return Err(CompositionError::ExportWithoutProvider {
                module: self.module,
                capability: token.name(),
            });
        }
        self.own.exports.insert(token.name());
        Ok(())
    }

    /// Provide and export in one step
    pub fn provide_exported<T: ?Sized + Send + Sync + 'static>(
        &mut self,
        token: Token<T>,
        instance: Arc<T>,
    ) -> Result<(), CompositionError> {
        self.provide(token, instance);
        self.export(token)
    }

    /// Resolve a dependency
    ///
    /// Looks in this module's own providers, then the exports of its direct
    /// imports, then the root bindings. A capability an import keeps private
    /// is never satisfied from the root bindings instead.
    ///
    /// # Errors
    ///
    /// - `NotExported` if an import provides it without exporting it
    /// - `MissingBinding` if nothing has it
    pub fn resolve<T: ?Sized + Send + Sync + 'static>(
        &self,
        token: Token<T>,
    ) -> Result<Arc<T>, CompositionError> {
        let name = token.name();
        if let Some(capability) = self.own.providers.get(name) {
            return downcast(token, capability);
        }

        let mut hidden_in = None;
        for import in self.imports {
            let Some(module) = self.built.get(import) else {
                continue;
            };
            match module.providers.get(name) {
                Some(capability) if module.exports.contains(name) => {
                    return downcast(token, capability);
                }
                Some(_) => hidden_in = hidden_in.or(Some(*import)),
                None => {}
            }
        }

        if let Some(owner) = hidden_in {
            return Err(CompositionError::NotExported {
                module: self.module,
                capability: name,
                owner,
            });
        }

        self.bindings
            .lookup(token)?
            .ok_or(CompositionError::MissingBinding {
                module: self.module,
                capability: name,
            })
    }

    /// Resolve from the root bindings only
    pub fn binding<T: ?Sized + Send + Sync + 'static>(
        &self,
        token: Token<T>,
    ) -> Result<Arc<T>, CompositionError> {
        self.bindings
            .lookup(token)?
            .ok_or(CompositionError::MissingBinding {
                module: self.module,
                capability: token.name(),
            })
    }

    /// Optional root binding, e.g. a repository override
    pub fn try_binding<T: ?Sized + Send + Sync + 'static>(
        &self,
        token: Token<T>,
    ) -> Result<Option<Arc<T>>, CompositionError> {
        self.bindings.lookup(token)
    }

    /// Add routes served by this module
    pub fn mount(&mut self, router: Router) {
        let current = std::mem::take(&mut self.router);
        self.router = current.merge(router);
    }

    pub(crate) fn finish(self) -> (BuiltModule, Router) {
        (self.own, self.router)
    }
}
