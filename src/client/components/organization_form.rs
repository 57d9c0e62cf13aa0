use dioxus::prelude::*;

use crate::model::page::{OrganizationDto, ACTION_SELECT_ORGANIZATION};

/// Switches the organization whose couriers are listed.
#[component]
pub fn OrganizationForm(organizations: Vec<OrganizationDto>, selected: String) -> Element {
    rsx!(
        form {
            method: "post",
            action: "/",
            class: "row g-2 align-items-end mb-4",
            div {
                class: "col-md-8",
                label {
                    class: "form-label",
                    r#for: "orgId",
                    "Organization"
                }
                select {
                    class: "form-select",
                    id: "orgId",
                    name: "orgId",
                    for organization in organizations {
                        if organization.id == selected {
                            option {
                                value: "{organization.id}",
                                selected: true,
                                "{organization.name}"
                            }
                        } else {
                            option {
                                value: "{organization.id}",
                                "{organization.name}"
                            }
                        }
                    }
                }
            }
            div {
                class: "col-md-4",
                button {
                    class: "btn btn-outline-secondary w-100",
                    r#type: "submit",
                    name: "action",
                    value: ACTION_SELECT_ORGANIZATION,
                    "Show couriers"
                }
            }
        }
    )
}
