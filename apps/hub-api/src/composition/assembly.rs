//! Ordering and building of feature modules

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use axum::Router;
use tracing::{debug, info};

use super::bindings::downcast;
use super::module::{BuiltModule, ModuleContext};
use super::{Bindings, CompositionError, FeatureModule, Token};

/// Declared set of feature modules
#[derive(Default)]
pub struct Assembly {
    modules: Vec<Box<dyn FeatureModule>>,
}

/// Result of a successful build
pub struct Assembled {
    router: Router,
    order: Vec<&'static str>,
    built: HashMap<&'static str, BuiltModule>,
}

impl Assembled {
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Module names in build order
    pub fn order(&self) -> &[&'static str] {
        &self.order
    }

    /// Look up something a module exported
    pub fn exported<T: ?Sized + Send + Sync + 'static>(
        &self,
        module: &str,
        token: Token<T>,
    ) -> Option<Arc<T>> {
        let built = self.built.get(module)?;
        if !built.exports.contains(token.name()) {
            return None;
        }
        built
            .providers
            .get(token.name())
            .and_then(|capability| downcast(token, capability).ok())
    }
}

impl Assembly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, module: impl FeatureModule + 'static) -> Self {
        self.modules.push(Box::new(module));
        self
    }

    /// Validate the graph and build every module
    ///
    /// All-or-nothing: the first failure aborts the build and nothing
    /// partially built escapes.
    ///
    /// # Errors
    ///
    /// Any [`CompositionError`]: duplicate names, unknown imports, cycles,
    /// or a failure raised while a module registers itself.
    pub fn build(self, bindings: &Bindings) -> Result<Assembled, CompositionError> {
        let order = self.order()?;
        let mut built = HashMap::new();
        let mut router = Router::new();

        for index in &order {
            let module = &self.modules[*index];
            let mut ctx = ModuleContext::new(module.name(), module.imports(), &built, bindings);
            module.register(&mut ctx)?;
            let (own, routes) = ctx.finish();
            debug!(
                module = module.name(),
                exports = own.exports.len(),
                "Module built"
            );
            built.insert(module.name(), own);
            router = router.merge(routes);
        }

        let order: Vec<&'static str> = order.iter().map(|i| self.modules[*i].name()).collect();
        info!(modules = order.len(), "Application graph assembled");
        Ok(Assembled {
            router,
            order,
            built,
        })
    }

    /// Topological order, stable with respect to declaration order
    fn order(&self) -> Result<Vec<usize>, CompositionError> {
        let mut index_of = HashMap::new();
        for (index, module) in self.modules.iter().enumerate() {
            if index_of.insert(module.name(), index).is_some() {
                return Err(CompositionError::DuplicateModule(module.name()));
            }
        }
        for module in &self.modules {
            for import in module.imports() {
                if !index_of.contains_key(import) {
                    return Err(CompositionError::UnknownImport {
                        module: module.name(),
                        import: *import,
                    });
                }
            }
        }

        let mut placed: HashSet<&'static str> = HashSet::new();
        let mut order = Vec::with_capacity(self.modules.len());
        while order.len() < self.modules.len() {
            let next = self.modules.iter().enumerate().find(|(_, module)| {
                !placed.contains(module.name())
                    && module.imports().iter().all(|import| placed.contains(import))
            });
            match next {
                Some((index, module)) => {
                    placed.insert(module.name());
                    order.push(index);
                }
                None => return Err(CompositionError::Cycle(self.find_cycle(&placed, &index_of))),
            }
        }
        Ok(order)
    }

    /// Walk unplaced modules along their imports until one repeats
    fn find_cycle(
        &self,
        placed: &HashSet<&'static str>,
        index_of: &HashMap<&'static str, usize>,
    ) -> Vec<&'static str> {
        let Some(start) = self.modules.iter().find(|m| !placed.contains(m.name())) else {
            return Vec::new();
        };
        let mut path = vec![start.name()];
        let mut current = start;
        loop {
            let Some(next) = current
                .imports()
                .iter()
                .find(|import| !placed.contains(*import))
                .and_then(|import| index_of.get(import))
                .map(|index| &self.modules[*index])
            else {
                return path;
            };
            if let Some(position) = path.iter().position(|name| *name == next.name()) {
                let mut cycle = path.split_off(position);
                cycle.push(next.name());
                return cycle;
            }
            path.push(next.name());
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::routing::get;

    use super::*;

    trait Clock: Send + Sync {
        fn now(&self) -> &'static str;
    }

    struct Fixed;

    impl Clock for Fixed {
        fn now(&self) -> &'static str {
            "noon"
        }
    }

    struct Greeting(String);

    const CLOCK: Token<dyn Clock> = Token::new("clock");
    const GREETING: Token<Greeting> = Token::new("greeting");

    /// Provides a greeting built from the root clock
    struct Provider {
        name: &'static str,
        imports: &'static [&'static str],
        export: bool,
    }

    impl FeatureModule for Provider {
        fn name(&self) -> &'static str {
            self.name
        }

        fn imports(&self) -> &'static [&'static str] {
            self.imports
        }

        fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
            let clock = ctx.binding(CLOCK)?;
            ctx.provide(GREETING, Arc::new(Greeting(format!("good {}", clock.now()))));
            if self.export {
                ctx.export(GREETING)?;
            }
            Ok(())
        }
    }

    /// Resolves the greeting from its imports and mounts a route
    struct Consumer {
        imports: &'static [&'static str],
    }

    impl FeatureModule for Consumer {
        fn name(&self) -> &'static str {
            "consumer"
        }

        fn imports(&self) -> &'static [&'static str] {
            self.imports
        }

        fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
            let greeting = ctx.resolve(GREETING)?;
            let text = greeting.0.clone();
            ctx.mount(Router::new().route("/greet", get(move || async move { text })));
            Ok(())
        }
    }

    fn provider(export: bool) -> Provider {
        Provider {
            name: "provider",
            imports: &[],
            export,
        }
    }

    fn clock() -> Bindings {
        Bindings::new().bind(CLOCK, Arc::new(Fixed) as Arc<dyn Clock>)
    }

    #[test]
    fn test_exported_capability_resolves_in_dependency_order() {
        let assembled = Assembly::new()
            .with(Consumer {
                imports: &["provider"],
            })
            .with(provider(true))
            .build(&clock())
            .unwrap();

        assert_eq!(assembled.order(), ["provider", "consumer"]);
        let greeting = assembled.exported("provider", GREETING).unwrap();
        assert_eq!(greeting.0, "good noon");
    }

    #[test]
    fn test_unexported_capability_fails_assembly() {
        let result = Assembly::new()
            .with(provider(false))
            .with(Consumer {
                imports: &["provider"],
            })
            .build(&clock());

        assert_eq!(
            result.err(),
            Some(CompositionError::NotExported {
                module: "consumer",
                capability: "greeting",
                owner: "provider",
            })
        );
    }

    #[test]
    fn test_private_capability_is_not_replaced_by_root_binding() {
        let bindings =
            clock().bind(GREETING, Arc::new(Greeting("from the root".to_string())));
        let result = Assembly::new()
            .with(provider(false))
            .with(Consumer {
                imports: &["provider"],
            })
            .build(&bindings);

        assert_eq!(
            result.err(),
            Some(CompositionError::NotExported {
                module: "consumer",
                capability: "greeting",
                owner: "provider",
            })
        );
    }

    #[test]
    fn test_root_binding_resolves_without_importing_provider() {
        let bindings =
            clock().bind(GREETING, Arc::new(Greeting("from the root".to_string())));
        let assembled = Assembly::new()
            .with(Consumer { imports: &[] })
            .build(&bindings);

        assert!(assembled.is_ok());
    }

    #[test]
    fn test_capability_of_non_imported_module_is_missing() {
        let result = Assembly::new()
            .with(provider(true))
            .with(Consumer { imports: &[] })
            .build(&clock());

        assert!(matches!(
            result.err(),
            Some(CompositionError::MissingBinding {
                module: "consumer",
                capability: "greeting"
            })
        ));
    }

    #[test]
    fn test_missing_root_binding_fails_assembly() {
        let result = Assembly::new().with(provider(true)).build(&Bindings::new());
        assert!(matches!(
            result.err(),
            Some(CompositionError::MissingBinding {
                capability: "clock",
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let result = Assembly::new()
            .with(provider(true))
            .with(provider(true))
            .build(&clock());
        assert_eq!(
            result.err(),
            Some(CompositionError::DuplicateModule("provider"))
        );
    }

    #[test]
    fn test_unknown_import_rejected() {
        let result = Assembly::new()
            .with(Consumer {
                imports: &["nowhere"],
            })
            .build(&clock());
        assert_eq!(
            result.err(),
            Some(CompositionError::UnknownImport {
                module: "consumer",
                import: "nowhere",
            })
        );
    }

    #[test]
    fn test_cycle_rejected() {
        let result = Assembly::new()
            .with(Provider {
                name: "a",
                imports: &["b"],
                export: true,
            })
            .with(Provider {
                name: "b",
                imports: &["a"],
                export: true,
            })
            .build(&clock());
        assert_eq!(
            result.err(),
            Some(CompositionError::Cycle(vec!["a", "b", "a"]))
        );
    }

    #[test]
    fn test_export_without_provider_rejected() {
        struct Liar;

        impl FeatureModule for Liar {
            fn name(&self) -> &'static str {
                "liar"
            }

            fn register(&self, ctx: &mut ModuleContext<'_>) -> Result<(), CompositionError> {
                ctx.export(GREETING)
            }
        }

        let result = Assembly::new().with(Liar).build(&Bindings::new());
        assert!(matches!(
            result.err(),
            Some(CompositionError::ExportWithoutProvider { .. })
        ));
    }
}
