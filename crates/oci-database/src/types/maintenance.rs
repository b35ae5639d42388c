//! Maintenance windows and maintenance runs.

use super::common::{DefinedTags, FreeformTags, open_wire_enum, wire_enum};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

open_wire_enum! {
    /// Whether the service or the customer picks the maintenance slot.
    pub enum MaintenancePreference {
        /// Service schedules maintenance
        NoPreference => "NO_PREFERENCE",
        /// Customer restricts maintenance to the window
        CustomPreference => "CUSTOM_PREFERENCE",
    }
}

open_wire_enum! {
    /// Month name.
    pub enum MonthName {
        /// January
        January => "JANUARY",
        /// February
        February => "FEBRUARY",
        /// March
        March => "MARCH",
        /// April
        April => "APRIL",
        /// May
        May => "MAY",
        /// June
        June => "JUNE",
        /// July
        July => "JULY",
        /// August
        August => "AUGUST",
        /// September
        September => "SEPTEMBER",
        /// October
        October => "OCTOBER",
        /// November
        November => "NOVEMBER",
        /// December
        December => "DECEMBER",
    }
}

open_wire_enum! {
    /// Day of the week.
    pub enum DayOfWeekName {
        /// Monday
        Monday => "MONDAY",
        /// Tuesday
        Tuesday => "TUESDAY",
        /// Wednesday
        Wednesday => "WEDNESDAY",
        /// Thursday
        Thursday => "THURSDAY",
        /// Friday
        Friday => "FRIDAY",
        /// Saturday
        Saturday => "SATURDAY",
        /// Sunday
        Sunday => "SUNDAY",
    }
}

/// A month, as the service represents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    /// Month name
    pub name: MonthName,
}

/// A day of the week, as the service represents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOfWeek {
    /// Day name
    pub name: DayOfWeekName,
}

/// When maintenance may happen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindow {
    /// Scheduling preference
    pub preference: MaintenancePreference,
    /// Months maintenance may run in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<Vec<Month>>,
    /// Weeks of the month (1 to 4)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks_of_month: Option<Vec<u32>>,
    /// Days of the week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<DayOfWeek>>,
    /// Start hours, UTC, in 4 hour blocks (0, 4, 8, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_of_day: Option<Vec<u32>>,
    /// Notification lead time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_time_in_weeks: Option<u32>,
}

impl MaintenanceWindow {
    /// Let the service choose.
    pub fn no_preference() -> Self {
        Self {
            preference: MaintenancePreference::NoPreference,
            months: None,
            weeks_of_month: None,
            days_of_week: None,
            hours_of_day: None,
            lead_time_in_weeks: None,
        }
    }
}

open_wire_enum! {
    /// Lifecycle of a maintenance run.
    pub enum MaintenanceRunLifecycleState {
        /// Scheduled
        Scheduled => "SCHEDULED",
        /// Running
        InProgress => "IN_PROGRESS",
        /// Finished
        Succeeded => "SUCCEEDED",
        /// Skipped by the customer
        Skipped => "SKIPPED",
        /// Failed
        Failed => "FAILED",
        /// Being updated
        Updating => "UPDATING",
        /// Being deleted
        Deleting => "DELETING",
        /// Deleted
        Deleted => "DELETED",
        /// Canceled
        Canceled => "CANCELED",
    }
}

open_wire_enum! {
    /// Kind of resource a maintenance run targets.
    pub enum MaintenanceTargetResourceType {
        /// Autonomous Exadata infrastructure
        AutonomousExadataInfrastructure => "AUTONOMOUS_EXADATA_INFRASTRUCTURE",
        /// Autonomous container database
        AutonomousContainerDatabase => "AUTONOMOUS_CONTAINER_DATABASE",
        /// Exadata DB system
        ExadataDbSystem => "EXADATA_DB_SYSTEM",
    }
}

open_wire_enum! {
    /// Planned or unplanned maintenance.
    pub enum MaintenanceType {
        /// Planned
        Planned => "PLANNED",
        /// Unplanned
        Unplanned => "UNPLANNED",
    }
}

open_wire_enum! {
    /// What the maintenance run does.
    pub enum MaintenanceSubtype {
        /// Quarterly patching
        Quarterly => "QUARTERLY",
        /// Hardware maintenance
        Hardware => "HARDWARE",
        /// Critical patch
        Critical => "CRITICAL",
        /// Infrastructure maintenance
        Infrastructure => "INFRASTRUCTURE",
        /// Database maintenance
        Database => "DATABASE",
        /// One-off patch
        Oneoff => "ONEOFF",
    }
}

wire_enum! {
    /// Sort fields of `ListMaintenanceRuns`.
    pub enum MaintenanceRunSortBy {
        /// Scheduled start
        TimeScheduled => "TIME_SCHEDULED",
        /// End time
        TimeEnded => "TIME_ENDED",
        /// Display name
        DisplayName => "DISPLAYNAME",
    }
}

/// A scheduled or completed maintenance operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRun {
    /// OCID
    pub id: String,
    /// Compartment OCID
    pub compartment_id: String,
    /// Display name
    pub display_name: String,
    /// Description
    #[serde(default)]
    pub description: Option<String>,
    /// Lifecycle state
    pub lifecycle_state: MaintenanceRunLifecycleState,
    /// Additional lifecycle information
    #[serde(default)]
    pub lifecycle_details: Option<String>,
    /// Scheduled start
    pub time_scheduled: DateTime<Utc>,
    /// Actual start
    #[serde(default)]
    pub time_started: Option<DateTime<Utc>>,
    /// End time
    #[serde(default)]
    pub time_ended: Option<DateTime<Utc>>,
    /// Kind of target resource
    #[serde(default)]
    pub target_resource_type: Option<MaintenanceTargetResourceType>,
    /// Target resource OCID
    #[serde(default)]
    pub target_resource_id: Option<String>,
    /// Planned or unplanned
    #[serde(default)]
    pub maintenance_type: Option<MaintenanceType>,
    /// Patch applied by the run
    #[serde(default)]
    pub patch_id: Option<String>,
    /// Maintenance subtype
    #[serde(default)]
    pub maintenance_subtype: Option<MaintenanceSubtype>,
}

/// Item of `ListMaintenanceRuns`.
pub type MaintenanceRunSummary = MaintenanceRun;

/// Body of `UpdateMaintenanceRun`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceRunDetails {
    /// `false` skips the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    /// Reschedule to this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_scheduled: Option<DateTime<Utc>>,
    /// Apply this patch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch_id: Option<String>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Defined tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maintenance_window_wire_format() {
        let window = MaintenanceWindow {
            preference: MaintenancePreference::CustomPreference,
            months: Some(vec![Month {
                name: MonthName::March,
            }]),
            weeks_of_month: Some(vec![2]),
            days_of_week: Some(vec![DayOfWeek {
                name: DayOfWeekName::Sunday,
            }]),
            hours_of_day: Some(vec![4]),
            lead_time_in_weeks: None,
        };

        assert_eq!(
            serde_json::to_value(&window).unwrap(),
            json!({
                "preference": "CUSTOM_PREFERENCE",
                "months": [{"name": "MARCH"}],
                "weeksOfMonth": [2],
                "daysOfWeek": [{"name": "SUNDAY"}],
                "hoursOfDay": [4]
            })
        );
    }

    #[test]
    fn test_maintenance_run_deserializes_unknown_state() {
        let run: MaintenanceRun = serde_json::from_value(json!({
            "id": "ocid1.maintenancerun.oc1..a",
            "compartmentId": "ocid1.compartment.oc1..c",
            "displayName": "Q3 patching",
            "lifecycleState": "WAITING_FOR_APPROVAL",
            "timeScheduled": "2026-08-01T04:00:00Z",
            "targetResourceType": "EXADATA_DB_SYSTEM",
            "maintenanceType": "PLANNED"
        }))
        .unwrap();

        assert_eq!(run.lifecycle_state, MaintenanceRunLifecycleState::UnknownValue);
        assert_eq!(
            run.target_resource_type,
            Some(MaintenanceTargetResourceType::ExadataDbSystem)
        );
        assert!(run.time_started.is_none());
    }

    #[test]
    fn test_update_details_skip_unset_fields() {
        let details = UpdateMaintenanceRunDetails {
            is_enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&details).unwrap(), json!({"isEnabled": false}));
    }
}
