use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::invoices::{CreateInvoiceRequest, InvoiceView, UpdateInvoiceRequest},
    error::{AppResult, ErrorBody},
    middleware::validated_json::ValidatedJson,
    models::Invoice,
    response::{InsertAck, UpdateAck},
    services::invoice_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/{invoice_id}",
            get(get_invoice).patch(update_invoice),
        )
}

#[utoipa::path(
    get,
    path = "/invoices",
    responses(
        (status = 200, description = "All invoices", body = Vec<Invoice>)
    ),
    tag = "Invoices"
)]
pub async fn list_invoices(State(state): State<AppState>) -> AppResult<Json<Vec<Invoice>>> {
    let resp = invoice_service::list_invoices(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/invoices/{invoice_id}",
    params(
        ("invoice_id" = String, Path, description = "Invoice id")
    ),
    responses(
        (status = 200, description = "Invoice with the bill of its order", body = InvoiceView),
        (status = 404, description = "Invoice not found", body = ErrorBody)
    ),
    tag = "Invoices"
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
) -> AppResult<Json<InvoiceView>> {
    let resp = invoice_service::get_invoice(&state, &invoice_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/invoices",
    request_body = CreateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice created", body = InsertAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Order was not found", body = ErrorBody)
    ),
    tag = "Invoices"
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateInvoiceRequest>,
) -> AppResult<Json<InsertAck>> {
    let resp = invoice_service::create_invoice(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/invoices/{invoice_id}",
    params(
        ("invoice_id" = String, Path, description = "Invoice id")
    ),
    request_body = UpdateInvoiceRequest,
    responses(
        (status = 200, description = "Invoice updated, or inserted when the id is unknown", body = UpdateAck),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 500, description = "Order was not found", body = ErrorBody)
    ),
    tag = "Invoices"
)]
pub async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateInvoiceRequest>,
) -> AppResult<Json<UpdateAck>> {
    let resp = invoice_service::upsert_invoice(&state, &invoice_id, payload).await?;
    Ok(Json(resp))
}
