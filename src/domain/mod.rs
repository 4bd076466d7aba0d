//! Domain layer: Core types for the three prediction domains.
//!
//! Pure Rust types with no I/O. Per-domain tables live in `disease`;
//! mutable form state lives in `form`.

mod disease;
mod form;
mod verdict;

pub use disease::{Disease, DomainProfile};
pub use form::{DescriptionTable, FieldSet, FormError, FormField};
pub use verdict::{ClassifierError, Verdict};
