//! Form input and view models for the change-driver page.

use serde::{Deserialize, Serialize};

/// Form action that runs the change-driver command.
pub const ACTION_CHANGE_DRIVER: &str = "changeDriver";
/// Form action that only switches the selected organization.
pub const ACTION_SELECT_ORGANIZATION: &str = "selectOrganization";

/// Fields posted by either form on the page.
///
/// Every field is optional on the wire; missing fields deserialize to empty strings so the
/// services can apply a single "empty means absent" rule.
#[derive(Deserialize, Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PageForm {
    pub org_id: String,
    pub order_id: String,
    pub driver_id: String,
    pub estimated_time: String,
    pub action: String,
}

impl PageForm {
    /// Whether the change-driver form was submitted.
    pub fn is_change_driver(&self) -> bool {
        self.action == ACTION_CHANGE_DRIVER
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizationDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourierDto {
    pub id: String,
    pub code: String,
    pub display_name: String,
    pub is_deleted: bool,
}

/// Visual weight of a notice, mapped to a Bootstrap alert class when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Info => "alert alert-info",
            Self::Warning => "alert alert-warning",
            Self::Danger => "alert alert-danger",
        }
    }
}

/// Message shown above the forms after a change-driver submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDto {
    pub level: NoticeLevel,
    pub message: String,
}

/// Everything the page needs to render once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverPageView {
    pub organizations: Vec<OrganizationDto>,
    pub selected_organization_id: String,
    pub couriers: Vec<CourierDto>,
    pub notice: Option<NoticeDto>,
}
