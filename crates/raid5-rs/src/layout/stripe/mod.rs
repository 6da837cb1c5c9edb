//! Stripe layout implementations.

pub mod raid5;
