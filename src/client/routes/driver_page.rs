use dioxus::prelude::*;

use crate::{
    client::{
        components::{CourierTable, DriverForm, Notice, OrganizationForm, Page},
        PAGE_TITLE,
    },
    model::page::DriverPageView,
};

#[derive(Props, Clone, PartialEq)]
pub struct DriverPageProps {
    pub view: DriverPageView,
}

#[allow(non_snake_case)]
pub fn DriverPage(props: DriverPageProps) -> Element {
    let DriverPageView {
        organizations,
        selected_organization_id,
        couriers,
        notice,
    } = props.view;

    rsx!(
        Page {
            h1 {
                class: "h3 mb-4",
                "{PAGE_TITLE}"
            }
            if let Some(notice) = notice {
                Notice { notice }
            }
            OrganizationForm {
                organizations: organizations.clone(),
                selected: selected_organization_id.clone(),
            }
            DriverForm {
                organization_id: selected_organization_id.clone(),
                couriers: couriers.clone(),
            }
            h2 {
                class: "h5",
                "Couriers"
            }
            CourierTable { couriers: couriers.clone() }
        }
    )
}
