//! Typed capability names

use std::fmt;
use std::marker::PhantomData;

/// Name of a capability together with the type it resolves to
///
/// `T` is usually a trait object (`Token<dyn PersistenceClient>`) or a
/// service type (`Token<CareerService>`). Instances are always shared as
/// `Arc<T>`.
pub struct Token<T: ?Sized> {
    name: &'static str,
    _type: PhantomData<fn() -> Box<T>>,
}

impl<T: ?Sized> Token<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _type: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized> Clone for Token<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Token<T> {}

impl<T: ?Sized> fmt::Debug for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.name)
    }
}

impl<T: ?Sized> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
