//! Staff and attendance endpoints

use crate::shared::http::{self, ApiError};
use contracts::domain::attendance::aggregate::{
    AttendanceForm, AttendanceRecord, AttendanceSummary, LeaveRequestForm,
};
use contracts::domain::staff::aggregate::{StaffForm, StaffMember};
use contracts::shared::envelope::{IdAndName, ListEnvelope, PageData, RecordEnvelope};
use contracts::shared::query::ListRequest;

pub async fn fetch_staff(request: &ListRequest) -> Result<PageData<StaffMember>, ApiError> {
    let envelope: ListEnvelope<StaffMember> = http::get_json(&format!(
        "/company-staff/get/all?{}",
        request.to_query_string()
    ))
    .await?;
    Ok(envelope.data)
}

/// Id/name pairs for pickers (order form delivered-by select)
pub async fn fetch_options() -> Result<Vec<IdAndName>, ApiError> {
    let envelope: RecordEnvelope<Vec<IdAndName>> =
        http::get_json("/company-staff/get/allIdsAndNames").await?;
    Ok(envelope.data)
}

pub async fn fetch_by_id(id: i64) -> Result<StaffMember, ApiError> {
    let envelope: RecordEnvelope<StaffMember> =
        http::get_json(&format!("/company-staff/get?id={id}")).await?;
    Ok(envelope.data)
}

pub async fn save(form: &StaffForm) -> Result<(), ApiError> {
    if form.id.is_some() {
        http::put_envelope::<_, serde_json::Value>("/company-staff/update", form).await?;
    } else {
        http::post_envelope::<_, serde_json::Value>("/company-staff/create", form).await?;
    }
    Ok(())
}

pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete_envelope("/company-staff/delete", id).await
}

// ----------------------------------------------------------------------------
// Attendance
// ----------------------------------------------------------------------------

pub async fn mark_attendance(form: &AttendanceForm) -> Result<(), ApiError> {
    http::post_envelope::<_, serde_json::Value>("/company-staff/attendance/mark", form).await?;
    Ok(())
}

/// Records for one staff member in a `YYYY-MM` month
pub async fn fetch_attendance(
    staff_id: i64,
    month: &str,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    let envelope: RecordEnvelope<Vec<AttendanceRecord>> = http::get_json(&format!(
        "/company-staff/attendance/get?staff_id={staff_id}&month={month}"
    ))
    .await?;
    Ok(envelope.data)
}

pub async fn request_leave(form: &LeaveRequestForm) -> Result<(), ApiError> {
    http::post_envelope::<_, serde_json::Value>("/company-staff/attendance/leave-request", form)
        .await?;
    Ok(())
}

/// Month roll-up; the endpoint wants the month and year split apart
pub async fn fetch_summary(
    staff_id: i64,
    month: u32,
    year: i32,
) -> Result<AttendanceSummary, ApiError> {
    let envelope: RecordEnvelope<AttendanceSummary> = http::get_json(&format!(
        "/company-staff/attendance/summary?staff_id={staff_id}&month={month}&year={year}"
    ))
    .await?;
    Ok(envelope.data)
}
