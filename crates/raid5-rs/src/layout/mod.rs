//! Block helpers and stripe layouts.

pub mod block;
pub mod stripe;
