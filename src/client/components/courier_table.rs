use dioxus::prelude::*;

use crate::model::page::CourierDto;

#[component]
pub fn CourierTable(couriers: Vec<CourierDto>) -> Element {
    rsx!(
        div {
            class: "table-responsive",
            table {
                class: "table table-sm table-striped",
                thead {
                    tr {
                        th { "Driver ID" }
                        th { "Code" }
                        th { "Display name" }
                        th { "Deleted?" }
                    }
                }
                tbody {
                    if couriers.is_empty() {
                        tr {
                            td {
                                colspan: "4",
                                class: "text-muted",
                                "No couriers for this organization."
                            }
                        }
                    }
                    for courier in couriers {
                        tr {
                            td { code { "{courier.id}" } }
                            td { "{courier.code}" }
                            td { "{courier.display_name}" }
                            td { if courier.is_deleted { "Yes" } else { "No" } }
                        }
                    }
                }
            }
        }
    )
}
