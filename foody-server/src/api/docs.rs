//! OpenAPI document and Swagger UI page

use shared::error::ErrorBody;
use shared::models::{
    Customer, CustomerCreate, Dish, InventoryCreate, InventoryItem, Order, OrderCreate,
    OrderDetails, OrderLine, OrderStatusUpdate, PendingOrder, QuantityUpdate, RankedCustomer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::{customer, health, order, stock};

#[derive(OpenApi)]
#[openapi(
    info(title = "Foody API", description = "Restaurant management: customers, orders and stock"),
    paths(
        health::welcome,
        health::health_check,
        customer::list_customers,
        customer::top_customers,
        customer::create_customer,
        customer::delete_customer,
        order::list_orders,
        order::list_pending_orders,
        order::list_done_orders,
        order::get_order_details,
        order::create_order,
        order::update_order_status,
        order::delete_order,
        stock::list_inventory,
        stock::list_restock,
        stock::list_available_dishes,
        stock::update_quantity,
        stock::create_inventory_item,
        stock::delete_inventory_item,
    ),
    components(schemas(
        ErrorBody,
        Customer,
        RankedCustomer,
        CustomerCreate,
        Order,
        PendingOrder,
        OrderLine,
        OrderDetails,
        OrderCreate,
        OrderStatusUpdate,
        InventoryItem,
        InventoryCreate,
        QuantityUpdate,
        Dish,
    )),
    tags(
        (name = "service", description = "Service information"),
        (name = "customer", description = "Customers and loyalty ranking"),
        (name = "order", description = "Orders and their line items"),
        (name = "stock", description = "Inventory and available dishes"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/api-docs`, serving the document at `/api-docs.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/api-docs").url("/api-docs.json", ApiDoc::openapi())
}
