//! Request-scoped middleware.

pub mod record;
