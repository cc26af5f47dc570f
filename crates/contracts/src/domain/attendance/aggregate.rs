use crate::shared::validation::{parse_date, Validate, ValidationErrors};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "present")]
    Present,
    #[serde(rename = "absent")]
    Absent,
    #[serde(rename = "half-day")]
    HalfDay,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::HalfDay,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::HalfDay => "half-day",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::HalfDay => "Half Day",
        }
    }

    pub fn from_str(value: &str) -> Option<AttendanceStatus> {
        AttendanceStatus::ALL.iter().copied().find(|s| s.as_str() == value)
    }

    /// Reason is mandatory for anything short of a full present day
    pub fn requires_reason(&self) -> bool {
        matches!(self, AttendanceStatus::Absent | AttendanceStatus::HalfDay)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub staff_id: i64,
    pub date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Per-month roll-up returned by the attendance summary endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    #[serde(rename = "totalDays")]
    pub total_days: u32,
    #[serde(rename = "presentDays")]
    pub present_days: u32,
    #[serde(rename = "absentDays")]
    pub absent_days: u32,
    #[serde(rename = "halfDays")]
    pub half_days: u32,
    #[serde(rename = "attendancePercentage")]
    pub attendance_percentage: f64,
}

// ============================================================================
// Form DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceForm {
    pub staff_id: i64,
    pub attendance_date: String,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

impl Validate for AttendanceForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.staff_id < 1 {
            errors.push("staff_id", "Staff member is required");
        }
        if parse_date(&self.attendance_date).is_none() {
            errors.push("attendance_date", "Date is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        // Conditional requirement: only non-present days need an explanation
        if self.status.requires_reason()
            && self.reason.as_deref().map_or(true, |r| r.trim().is_empty())
        {
            errors.push("reason", "Reason is required for absent or half day");
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequestForm {
    pub staff_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: AttendanceStatus,
    pub reason: String,
}

impl Validate for LeaveRequestForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.staff_id < 1 {
            errors.push("staff_id", "Staff member is required");
        }
        let start = parse_date(&self.start_date);
        let end = parse_date(&self.end_date);
        if start.is_none() {
            errors.push("start_date", "Start date is required");
        }
        if end.is_none() {
            errors.push("end_date", "End date is required");
        }
        if self.reason.trim().is_empty() {
            errors.push("reason", "Reason is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                errors.push("end_date", "End date must be after or equal to start date");
            }
        }
        if !self.status.requires_reason() {
            // PRESENT is not a leave type
            errors.push("status", "Leave type must be either absent or half day");
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attendance(status: AttendanceStatus, reason: Option<&str>) -> AttendanceForm {
        AttendanceForm {
            staff_id: 2,
            attendance_date: "2025-06-12".to_string(),
            status,
            reason: reason.map(str::to_string),
        }
    }

    #[test]
    fn test_present_needs_no_reason() {
        assert!(attendance(AttendanceStatus::Present, None).validate().is_ok());
    }

    #[test]
    fn test_absent_requires_reason() {
        let errors = attendance(AttendanceStatus::Absent, None).validate().unwrap_err();
        assert_eq!(
            errors.first_for("reason"),
            Some("Reason is required for absent or half day")
        );
        assert!(attendance(AttendanceStatus::Absent, Some("fever"))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_half_day_blank_reason_rejected() {
        let errors = attendance(AttendanceStatus::HalfDay, Some("   "))
            .validate()
            .unwrap_err();
        assert!(errors.has("reason"));
    }

    fn leave(status: AttendanceStatus) -> LeaveRequestForm {
        LeaveRequestForm {
            staff_id: 2,
            start_date: "2025-06-10".to_string(),
            end_date: "2025-06-12".to_string(),
            status,
            reason: "family function".to_string(),
        }
    }

    #[test]
    fn test_leave_range_and_status() {
        assert!(leave(AttendanceStatus::Absent).validate().is_ok());
        assert!(leave(AttendanceStatus::HalfDay).validate().is_ok());

        let errors = leave(AttendanceStatus::Present).validate().unwrap_err();
        assert_eq!(
            errors.first_for("status"),
            Some("Leave type must be either absent or half day")
        );

        let mut form = leave(AttendanceStatus::Absent);
        form.end_date = "2025-06-09".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.first_for("end_date"),
            Some("End date must be after or equal to start date")
        );

        let mut form = leave(AttendanceStatus::Absent);
        form.end_date = form.start_date.clone();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::HalfDay).unwrap(),
            "\"half-day\""
        );
        assert_eq!(
            AttendanceStatus::from_str("present"),
            Some(AttendanceStatus::Present)
        );
    }
}
