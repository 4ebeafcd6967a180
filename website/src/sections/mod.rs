//! Page sections in declared order. Each root element carries its
//! [`folio_core::SectionId`] string as DOM id for the navigation bar.

mod about;
mod contact;
mod experience;
mod projects;
mod skills;

pub use about::About;
pub use contact::Contact;
pub use experience::Experience;
pub use projects::Projects;
pub use skills::Skills;
