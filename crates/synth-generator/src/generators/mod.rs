//! Individual value generators for the primitive field types.
//!
//! These are the leaf generation routines; type dispatch lives on
//! [`RecordGenerator`](crate::RecordGenerator). The person-data types
//! (email, name, phone, address) go through the
//! [`FakeProvider`](crate::FakeProvider) instead.

pub mod numeric;
pub mod temporal;
pub mod text;
