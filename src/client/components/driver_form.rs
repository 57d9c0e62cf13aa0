use dioxus::prelude::*;

use crate::model::page::{CourierDto, ACTION_CHANGE_DRIVER};

/// Submits a change-driver command for the selected organization.
///
/// Choosing the first, empty driver option unassigns the current driver.
#[component]
pub fn DriverForm(organization_id: String, couriers: Vec<CourierDto>) -> Element {
    rsx!(
        form {
            method: "post",
            action: "/",
            class: "card card-body mb-4",
            input { r#type: "hidden", name: "orgId", value: "{organization_id}" }
            input { r#type: "hidden", name: "action", value: ACTION_CHANGE_DRIVER }
            div {
                class: "mb-3",
                label { class: "form-label", r#for: "orderId", "Order ID" }
                input {
                    class: "form-control",
                    r#type: "text",
                    id: "orderId",
                    name: "orderId",
                    placeholder: "Order UUID (required)",
                }
            }
            div {
                class: "mb-3",
                label { class: "form-label", r#for: "driverId", "Driver" }
                select {
                    class: "form-select",
                    id: "driverId",
                    name: "driverId",
                    option { value: "", "(unassign driver)" }
                    for courier in couriers {
                        option {
                            value: "{courier.id}",
                            "{courier.display_name} ({courier.id})"
                        }
                    }
                }
            }
            div {
                class: "mb-3",
                label { class: "form-label", r#for: "estimatedTime", "Estimated time" }
                input {
                    class: "form-control",
                    r#type: "text",
                    id: "estimatedTime",
                    name: "estimatedTime",
                    placeholder: "2025-02-01 14:15:22.123 (optional)",
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                "Change driver"
            }
        }
    )
}
