pub mod footer;
pub mod mobile_menu;
pub mod navigation;
