pub mod food;
pub mod invoices;
pub mod menus;
pub mod order_items;
pub mod orders;
pub mod tables;
pub mod users;

pub use food::Entity as Food;
pub use invoices::Entity as Invoices;
pub use menus::Entity as Menus;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use tables::Entity as Tables;
pub use users::Entity as Users;

use uuid::Uuid;

/// Human-facing id for a freshly generated internal id: its lowercase hex form.
pub fn public_id(id: Uuid) -> String {
    id.simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_id_is_the_hex_form_of_the_internal_id() {
        let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(public_id(id), "67e5504410b1426f9247bb680e5fe0c8");
    }
}
