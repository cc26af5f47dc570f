//! Party endpoints

use crate::shared::http::{self, ApiError};
use contracts::domain::party::aggregate::{Party, PartyForm};
use contracts::shared::envelope::{IdAndName, ListEnvelope, PageData, RecordEnvelope};
use contracts::shared::query::ListRequest;

pub async fn fetch_parties(request: &ListRequest) -> Result<PageData<Party>, ApiError> {
    let envelope: ListEnvelope<Party> =
        http::get_json(&format!("/party/get/all?{}", request.to_query_string())).await?;
    Ok(envelope.data)
}

/// Id/name pairs for pickers (order form party select)
pub async fn fetch_options() -> Result<Vec<IdAndName>, ApiError> {
    let envelope: RecordEnvelope<Vec<IdAndName>> =
        http::get_json("/party/get/allIdsAndNames").await?;
    Ok(envelope.data)
}

pub async fn fetch_by_id(id: i64) -> Result<Party, ApiError> {
    let envelope: RecordEnvelope<Party> = http::get_json(&format!("/party/get?id={id}")).await?;
    Ok(envelope.data)
}

/// Create or update, including nested addresses and `removed_address_ids`
pub async fn save(form: &PartyForm) -> Result<(), ApiError> {
    if form.id.is_some() {
        http::put_envelope::<_, serde_json::Value>("/party/update", form).await?;
    } else {
        http::post_envelope::<_, serde_json::Value>("/party/create", form).await?;
    }
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete_envelope("/party/delete", id).await
}
