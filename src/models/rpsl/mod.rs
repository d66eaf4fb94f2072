//! RPSL attribute and object structures.
//!
//! The textual representation is described in
//! [RFC 2622, section 2](https://datatracker.ietf.org/doc/html/rfc2622#section-2).
mod attribute;
mod object;
mod validation;

pub use attribute::*;
pub use object::*;
pub use validation::*;
