//! Root bindings: concrete instances supplied by the composition root

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::{CompositionError, Token};

/// Type-erased `Arc<T>`
pub(crate) type Capability = Arc<dyn Any + Send + Sync>;

pub(crate) fn erase<T: ?Sized + Send + Sync + 'static>(instance: Arc<T>) -> Capability {
    Arc::new(instance)
}

pub(crate) fn downcast<T: ?Sized + Send + Sync + 'static>(
    token: Token<T>,
    capability: &Capability,
) -> Result<Arc<T>, CompositionError> {
    capability
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or(CompositionError::TypeMismatch {
            capability: token.name(),
        })
}

/// Capability name → instance map handed to the assembly
///
/// Holds the adapters every module may draw on (persistence client, AI
/// backend) and optional overrides such as test doubles for repository
/// ports.
#[derive(Clone, Default)]
pub struct Bindings {
    entries: HashMap<&'static str, Capability>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `instance` under `token`, replacing any previous binding
    pub fn bind<T: ?Sized + Send + Sync + 'static>(mut self, token: Token<T>, instance: Arc<T>) -> Self {
        self.entries.insert(token.name(), erase(instance));
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// `Ok(None)` when nothing is bound under this name
    pub(crate) fn lookup<T: ?Sized + Send + Sync + 'static>(
        &self,
        token: Token<T>,
    ) -> Result<Option<Arc<T>>, CompositionError> {
        self.entries
            .get(token.name())
            .map(|capability| downcast(token, capability))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    const GREETER: Token<dyn Greeter> = Token::new("greeter");
    const WRONG: Token<String> = Token::new("greeter");

    #[test]
    fn test_bind_and_lookup_trait_object() {
        let bindings = Bindings::new().bind(GREETER, Arc::new(English) as Arc<dyn Greeter>);

        let greeter = bindings.lookup(GREETER).unwrap().unwrap();
        assert_eq!(greeter.greet(), "hello");
        assert!(bindings.contains("greeter"));
    }

    #[test]
    fn test_lookup_with_wrong_type_fails() {
        let bindings = Bindings::new().bind(GREETER, Arc::new(English) as Arc<dyn Greeter>);
        assert!(matches!(
            bindings.lookup(WRONG),
            Err(CompositionError::TypeMismatch { capability: "greeter" })
        ));
    }

    #[test]
    fn test_missing_binding_is_none() {
        assert!(Bindings::new().lookup(GREETER).unwrap().is_none());
    }
}
