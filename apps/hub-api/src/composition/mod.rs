//! Module composition graph
//!
//! Feature modules declare what they provide, what they export for other
//! modules and which modules they import. [`Assembly`] orders them, builds
//! each one against the root [`Bindings`] and merges their routers. Every
//! wiring problem surfaces from [`Assembly::build`], before any request is
//! served.

mod assembly;
mod bindings;
mod module;
mod token;

pub use assembly::{Assembled, Assembly};
pub use bindings::Bindings;
pub use module::{FeatureModule, ModuleContext};
pub use token::Token;

use thiserror::Error;

/// Wiring failures; all of them are fatal at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositionError {
    #[error("module '{0}' is declared more than once")]
    DuplicateModule(&'static str),

    #[error("module '{module}' imports unknown module '{import}'")]
    UnknownImport {
        module: &'static str,
        import: &'static str,
    },

    #[error("import cycle between modules: {}", .0.join(" -> "))]
    Cycle(Vec<&'static str>),

    #[error("module '{module}' requires '{capability}' but nothing provides it")]
    MissingBinding {
        module: &'static str,
        capability: &'static str,
    },

    #[error("module '{module}' requires '{capability}', which module '{owner}' does not export")]
    NotExported {
        module: &'static str,
        capability: &'static str,
        owner: &'static str,
    },

    #[error("module '{module}' exports '{capability}' without providing it")]
    ExportWithoutProvider {
        module: &'static str,
        capability: &'static str,
    },

    #[error("capability '{capability}' is bound with an unexpected type")]
    TypeMismatch { capability: &'static str },

    #[error("persistence URL '{0}' is not supported (expected memory://)")]
    UnsupportedPersistence(String),
}
