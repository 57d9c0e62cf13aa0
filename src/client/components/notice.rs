use dioxus::prelude::*;

use crate::model::page::NoticeDto;

/// Outcome of the last change-driver submission.
#[component]
pub fn Notice(notice: NoticeDto) -> Element {
    let class = notice.level.alert_class();

    rsx!(
        div {
            class: "{class}",
            role: "alert",
            "{notice.message}"
        }
    )
}
