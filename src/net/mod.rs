//! Network access: posting the contact form.

pub mod api;
