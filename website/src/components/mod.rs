pub mod footer;
pub mod navbar;
pub mod section_header;
