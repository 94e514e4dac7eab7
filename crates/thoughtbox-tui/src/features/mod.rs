//! Feature slices.

pub mod form;
