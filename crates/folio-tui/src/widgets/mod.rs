//! Custom widget components

mod help_bar;
mod menu;
mod navbar;
pub mod page;

pub use help_bar::HelpBar;
pub use menu::NavMenu;
pub use navbar::NavBar;
pub use page::PageView;
