//! Request and response bodies of the Syrve Cloud API endpoints used by the page.
//!
//! Responses are decoded leniently: only the fields the page reads are modelled, and missing
//! or `null` collections and flags default to empty and `false`, matching how the API omits
//! or nulls out empty values.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::model::page::{CourierDto, OrganizationDto};

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Payload of `/access_token`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest<'a> {
    /// Integration key configured in Syrve Office
    pub api_login: &'a str,
}

/// Response of `/access_token`.
#[derive(Deserialize, Debug, Default)]
pub struct AccessTokenResponse {
    /// Bearer token, absent when the exchange was refused
    #[serde(default)]
    pub token: Option<String>,
}

/// Payload of `/organizations`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationsRequest {
    /// Empty means every organization the apiLogin has access to
    pub organization_ids: Vec<String>,
    /// Ask for the extended organization description
    pub return_additional_info: bool,
    /// Include organizations that are switched off
    pub include_disabled: bool,
}

impl Default for OrganizationsRequest {
    fn default() -> Self {
        Self {
            organization_ids: Vec::new(),
            return_additional_info: true,
            include_disabled: true,
        }
    }
}

/// Response of `/organizations`.
#[derive(Deserialize, Debug, Default)]
pub struct OrganizationsResponse {
    /// Organizations visible to the token
    #[serde(default, deserialize_with = "null_as_default")]
    pub organizations: Vec<Organization>,
}

/// One organization (restaurant) of the apiLogin.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Organization {
    /// Organization UUID
    pub id: String,
    /// Display name, not always set
    #[serde(default)]
    pub name: Option<String>,
}

impl From<Organization> for OrganizationDto {
    fn from(organization: Organization) -> Self {
        let name = organization
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| organization.id.clone());

        Self {
            id: organization.id,
            name,
        }
    }
}

/// Payload of `/employees/couriers`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CouriersRequest<'a> {
    /// Organizations whose couriers are listed
    pub organization_ids: &'a [String],
}

/// Response of `/employees/couriers`.
#[derive(Deserialize, Debug, Default)]
pub struct CouriersResponse {
    /// Couriers grouped per organization
    #[serde(default, deserialize_with = "null_as_default")]
    pub employees: Vec<CourierGroup>,
}

impl CouriersResponse {
    /// Flattens the per-organization groups into one courier list, preserving order.
    pub fn into_couriers(self) -> Vec<Courier> {
        self.employees
            .into_iter()
            .flat_map(|group| group.items)
            .collect()
    }
}

/// Couriers of one organization as returned by `/employees/couriers`.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourierGroup {
    /// Organization the group belongs to
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Couriers of the organization
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Courier>,
}

/// A courier employee.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    /// Employee UUID, used as `driverId`
    pub id: String,
    /// Staff code
    #[serde(default)]
    pub code: Option<String>,
    /// Full display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// First name, used when no display name is set
    #[serde(default)]
    pub first_name: Option<String>,
    /// Whether the employee was deleted in Syrve
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_deleted: bool,
}

impl Courier {
    /// Name shown to the operator: `displayName`, else `firstName`, else the courier id.
    pub fn label(&self) -> String {
        [&self.display_name, &self.first_name]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| self.id.clone())
    }
}

impl From<Courier> for CourierDto {
    fn from(courier: Courier) -> Self {
        Self {
            display_name: courier.label(),
            code: courier.code.unwrap_or_default(),
            is_deleted: courier.is_deleted,
            id: courier.id,
        }
    }
}

/// Payload of `/deliveries/change_driver_info`.
///
/// `driver_id` and `estimated_time` are omitted from the JSON when `None`. The API treats a
/// missing `driverId` as "unassign driver", which is not the same as an empty string.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDriverInfoRequest {
    /// Organization that owns the order
    pub organization_id: String,
    /// Delivery order UUID
    pub order_id: String,
    /// New courier, `None` to unassign
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,
    /// Format `YYYY-MM-DD HH:mm:ss.fff`, forwarded as entered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
}

/// Payload of `/commands/status`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CommandStatusRequest<'a> {
    /// Organization the command was submitted for
    pub organization_id: &'a str,
    /// Id returned when the command was submitted
    pub correlation_id: &'a str,
}

/// State of an asynchronous Syrve command as reported by `/commands/status`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandState {
    /// Still being processed
    InProgress,
    /// Applied
    Success,
    /// Rejected by Syrve
    Error,
    /// Any other or missing state label
    Unknown(String),
}

impl CommandState {
    /// Reads the `state` field of a status response, defaulting to `Unknown`.
    pub fn from_response(response: &Value) -> Self {
        match response.get("state") {
            Some(Value::String(state)) => Self::from(state.as_str()),
            Some(Value::Null) | None => Self::Unknown("Unknown".to_string()),
            Some(other) => Self::Unknown(other.to_string()),
        }
    }
}

impl From<&str> for CommandState {
    fn from(state: &str) -> Self {
        match state {
            "InProgress" => Self::InProgress,
            "Success" => Self::Success,
            "Error" => Self::Error,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Reads a non-empty `correlationId` from a command submission response.
pub fn correlation_id(response: &Value) -> Option<&str> {
    response
        .get("correlationId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
}
