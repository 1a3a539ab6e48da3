use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse, SignupRequest, UserList},
        food::{CreateFoodRequest, FoodList, UpdateFoodRequest},
        invoices::{
            CreateInvoiceRequest, InvoiceView, PaymentMethod, PaymentStatus, UpdateInvoiceRequest,
        },
        menus::{CreateMenuRequest, UpdateMenuRequest},
        order_items::{BillSummary, OrderItemBatchRequest, OrderItemInput, UpdateOrderItemRequest},
        orders::{CreateOrderRequest, UpdateOrderRequest},
        tables::{CreateTableRequest, UpdateTableRequest},
    },
    error::ErrorBody,
    models::{Food, Invoice, Menu, Order, OrderItem, Table, UserView},
    response::{InsertAck, InsertManyAck, UpdateAck},
    routes::{food, health, invoices, menus, order_items, orders, params, tables, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        food::list_food,
        food::get_food,
        food::create_food,
        food::update_food,
        menus::list_menus,
        menus::get_menu,
        menus::create_menu,
        menus::update_menu,
        tables::list_tables,
        tables::get_table,
        tables::create_table,
        tables::update_table,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order,
        order_items::list_order_items,
        order_items::get_order_item,
        order_items::items_by_order,
        order_items::create_order_items,
        order_items::update_order_item,
        invoices::list_invoices,
        invoices::get_invoice,
        invoices::create_invoice,
        invoices::update_invoice,
        users::list_users,
        users::get_user,
        users::signup,
        users::login
    ),
    components(
        schemas(
            Food,
            Menu,
            Table,
            Order,
            OrderItem,
            Invoice,
            UserView,
            FoodList,
            UserList,
            BillSummary,
            InvoiceView,
            PaymentMethod,
            PaymentStatus,
            CreateFoodRequest,
            UpdateFoodRequest,
            CreateMenuRequest,
            UpdateMenuRequest,
            CreateTableRequest,
            UpdateTableRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            OrderItemInput,
            OrderItemBatchRequest,
            UpdateOrderItemRequest,
            CreateInvoiceRequest,
            UpdateInvoiceRequest,
            SignupRequest,
            LoginRequest,
            LoginResponse,
            InsertAck,
            InsertManyAck,
            UpdateAck,
            ErrorBody,
            params::Pagination,
            health::HealthData
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Food", description = "Food endpoints"),
        (name = "Menus", description = "Menu endpoints"),
        (name = "Tables", description = "Table endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Order items", description = "Order line and billing endpoints"),
        (name = "Invoices", description = "Invoice endpoints"),
        (name = "Users", description = "Signup, login and user lookup"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/food/{food_id}",
            "/menu",
            "/table/{table_id}",
            "/order",
            "/orderitems-orders/{order_id}",
            "/invoices/{invoice_id}",
            "/user/signup",
            "/user/login",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
