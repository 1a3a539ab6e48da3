use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::{
    dto::invoices::{CreateInvoiceRequest, InvoiceView, UpdateInvoiceRequest},
    entity::{
        invoices::{ActiveModel, Column, Entity as Invoices},
        public_id,
    },
    error::{AppError, AppResult},
    models::Invoice,
    response::{InsertAck, UpdateAck},
    services::{billing_service, lookup},
    state::AppState,
};

pub async fn list_invoices(state: &AppState) -> AppResult<Vec<Invoice>> {
    let invoices = Invoices::find()
        .order_by_asc(Column::CreatedAt)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(Invoice::from)
        .collect();
    Ok(invoices)
}

/// The invoice together with the current bill of its order.
pub async fn get_invoice(state: &AppState, invoice_id: &str) -> AppResult<InvoiceView> {
    let invoice = Invoices::find()
        .filter(Column::InvoiceId.eq(invoice_id))
        .one(&state.orm)
        .await?
        .map(Invoice::from)
        .ok_or(AppError::NotFound("invoice"))?;

    let bill = match invoice.order_id.as_deref() {
        Some(order_id) => billing_service::items_by_order(&state.orm, order_id)
            .await?
            .into_iter()
            .next(),
        None => None,
    };

    Ok(InvoiceView {
        invoice_id: invoice.invoice_id,
        order_id: invoice.order_id,
        payment_method: invoice.payment_method,
        payment_status: invoice.payment_status,
        payment_due_date: invoice.payment_due_date,
        payment_due: bill.as_ref().map(|b| b.payment_due),
        table_number: bill.as_ref().and_then(|b| b.table_number),
        order_items: bill.as_ref().map(|b| b.order_items),
    })
}

pub async fn create_invoice(
    state: &AppState,
    payload: CreateInvoiceRequest,
) -> AppResult<InsertAck> {
    lookup::ensure_order(&state.orm, &payload.order_id).await?;

    let now = Utc::now();
    let id = Uuid::new_v4();
    let invoice_id = public_id(id);
    let status = payload.payment_status.unwrap_or_default();
    ActiveModel {
        id: Set(id),
        invoice_id: Set(invoice_id.clone()),
        order_id: Set(Some(payload.order_id)),
        payment_method: Set(payload.payment_method.map(|m| m.as_str().to_owned())),
        payment_status: Set(Some(status.as_str().to_owned())),
        payment_due_date: Set(Some((now + Duration::days(1)).into())),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(invoice_id = %invoice_id, "invoice created");
    Ok(InsertAck::new(invoice_id))
}

pub async fn upsert_invoice(
    state: &AppState,
    invoice_id: &str,
    payload: UpdateInvoiceRequest,
) -> AppResult<UpdateAck> {
    if let Some(order_id) = payload.order_id.as_deref() {
        lookup::ensure_order(&state.orm, order_id).await?;
    }

    let now = Utc::now();
    let existing = Invoices::find()
        .filter(Column::InvoiceId.eq(invoice_id))
        .one(&state.orm)
        .await?;
    let found = existing.is_some();
    let mut active: ActiveModel = match existing {
        Some(model) => model.into(),
        None => ActiveModel {
            id: Set(Uuid::new_v4()),
            invoice_id: Set(invoice_id.to_owned()),
            created_at: Set(now.into()),
            ..Default::default()
        },
    };

    if let Some(order_id) = payload.order_id {
        active.order_id = Set(Some(order_id));
    }
    if let Some(method) = payload.payment_method {
        active.payment_method = Set(Some(method.as_str().to_owned()));
    }
    if let Some(status) = payload.payment_status {
        active.payment_status = Set(Some(status.as_str().to_owned()));
    }
    active.updated_at = Set(now.into());

    if found {
        active.update(&state.orm).await?;
        tracing::debug!(invoice_id, "invoice updated");
        Ok(UpdateAck::modified())
    } else {
        active.insert(&state.orm).await?;
        tracing::info!(invoice_id, "invoice upserted");
        Ok(UpdateAck::upserted(invoice_id))
    }
}
