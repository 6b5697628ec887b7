//! Browser glue behind the `behavior` crate's platform traits.

pub mod timers;
pub mod visibility;
