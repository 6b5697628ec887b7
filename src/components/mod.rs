//! Page sections and the small building blocks they share.
//!
//! DESIGN
//! ======
//! One module per page section, in page order. Sections below the hero are
//! wrapped in [`animated_section::AnimatedSection`], which reveals them once
//! they first scroll into view.

pub mod about;
pub mod animated_section;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icon;
pub mod practice_areas;
pub mod publications;
pub mod section_header;
pub mod team;
pub mod why_choose_us;
