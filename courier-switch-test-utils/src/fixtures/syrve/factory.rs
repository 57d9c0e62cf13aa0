//! JSON payloads shaped like Syrve API response items.

use serde_json::{json, Value};

/// Create an organization item as listed by `/organizations`.
///
/// # Arguments
/// - `id` - Organization UUID
/// - `name` - Display name, left out of the payload when `None`
pub fn organization(id: &str, name: Option<&str>) -> Value {
    let mut organization = json!({
        "id": id,
        "country": null,
        "restaurantAddress": null,
        "responseType": "Extended"
    });

    if let Some(name) = name {
        organization["name"] = json!(name);
    }

    organization
}

/// Create an active courier item as listed by `/employees/couriers`.
///
/// The first word of `display_name` is used as the first name.
pub fn courier(id: &str, display_name: &str) -> Value {
    let first_name = display_name.split_whitespace().next().unwrap_or_default();

    json!({
        "id": id,
        "code": format!("C-{}", id),
        "displayName": display_name,
        "firstName": first_name,
        "middleName": null,
        "lastName": null,
        "isDeleted": false
    })
}

/// Create a courier item marked as deleted.
pub fn deleted_courier(id: &str, display_name: &str) -> Value {
    let mut courier = courier(id, display_name);
    courier["isDeleted"] = json!(true);

    courier
}
