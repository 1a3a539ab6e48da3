pub mod auth_service;
pub mod billing_service;
pub mod food_service;
pub mod invoice_service;
pub mod lookup;
pub mod menu_service;
pub mod order_item_service;
pub mod order_service;
pub mod table_service;
pub mod token_service;
pub mod user_service;
