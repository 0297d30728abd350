pub mod auth_group;
pub mod menu;
