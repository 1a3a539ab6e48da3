pub mod auth;
pub mod food;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
