//! Request validation contract
//!
//! Each input shape is described by an explicit [`Schema`] and checked by the
//! single generic [`validate`] function before anything reaches a service.
//! Update shapes are derived from create shapes with [`to_partial`].

mod schema;
mod validator;

pub use schema::{to_partial, FieldKind, FieldSpec, Schema};
pub use validator::{
    is_iso_date, is_uuid_v4, parse, validate, Constraint, Dto, ValidationErrors, Violation,
};

/// Implement [`Dto`] for a type with a lazily built, process-wide schema
macro_rules! dto_schema {
    ($ty:ty => $build:expr) => {
        impl $crate::validation::Dto for $ty {
            fn schema() -> &'static $crate::validation::Schema {
                static SCHEMA: ::std::sync::LazyLock<$crate::validation::Schema> =
                    ::std::sync::LazyLock::new(|| $build);
                &SCHEMA
            }
        }
    };
}

pub(crate) use dto_schema;
