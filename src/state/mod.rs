//! Client-side page state.
//!
//! Only the header chrome carries state of its own; section reveal and form
//! state live in the `behavior` crate and are bridged by the components.

pub mod ui;
