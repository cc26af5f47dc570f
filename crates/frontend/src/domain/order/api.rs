//! Order endpoints

use crate::shared::http::{self, ApiError};
use contracts::domain::order::aggregate::{LotForm, Order, OrderForm};
use contracts::shared::envelope::{ListEnvelope, PageData, RecordEnvelope};
use contracts::shared::query::ListRequest;

pub async fn fetch_orders(request: &ListRequest) -> Result<PageData<Order>, ApiError> {
    let envelope: ListEnvelope<Order> =
        http::get_json(&format!("/order/get/all?{}", request.to_query_string())).await?;
    Ok(envelope.data)
}

pub async fn fetch_by_id(id: i64) -> Result<Order, ApiError> {
    let envelope: RecordEnvelope<Order> = http::get_json(&format!("/order/get?id={id}")).await?;
    Ok(envelope.data)
}

/// Create or update, depending on whether the form carries an id. The
/// payload includes nested lots and `removed_lot_ids`.
pub async fn save(form: &OrderForm) -> Result<(), ApiError> {
    if form.id.is_some() {
        http::put_envelope::<_, serde_json::Value>("/order/update", form).await?;
    } else {
        http::post_envelope::<_, serde_json::Value>("/order/create", form).await?;
    }
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete_envelope("/order/delete", id).await
}

pub async fn save_lot(form: &LotForm) -> Result<(), ApiError> {
    if form.id.is_some() {
        http::put_envelope::<_, serde_json::Value>("/order/lot/update", form).await?;
    } else {
        http::post_envelope::<_, serde_json::Value>("/order/lot/create", form).await?;
    }
    Ok(())
}

pub async fn delete_lot(id: i64) -> Result<(), ApiError> {
    http::delete_envelope("/order/lot/delete", id).await
}

/// Bill for the currently filtered orders, as raw document bytes
pub async fn generate_bill(request: &ListRequest) -> Result<Vec<u8>, ApiError> {
    http::post_binary("/order/generate-bill", request).await
}
