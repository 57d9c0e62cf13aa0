//! Page assembly: everything one render of the change-driver page needs.

use std::time::Duration;

use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::page::{CourierDto, DriverPageView, OrganizationDto, PageForm},
    server::{
        error::{page::PageError, syrve::SyrveError, Error},
        service::{change_driver::ChangeDriverService, token::TokenService},
        syrve::client::SyrveClient,
    },
};

/// Builds the page view model for one request.
pub struct PageService<'a> {
    syrve_client: &'a SyrveClient,
    api_login: &'a str,
    command_status_delay: Duration,
}

impl<'a> PageService<'a> {
    /// Creates a new instance of [`PageService`]
    pub fn new(
        syrve_client: &'a SyrveClient,
        api_login: &'a str,
        command_status_delay: Duration,
    ) -> Self {
        Self {
            syrve_client,
            api_login,
            command_status_delay,
        }
    }

    /// Assembles the change-driver page for one request
    ///
    /// Runs the change-driver command when the form carries the `changeDriver` action; its
    /// outcome becomes the page notice. Courier listing failures only leave the courier list
    /// empty. A cached token rejected with 401 is dropped so the next request exchanges again.
    ///
    /// # Returns
    /// - `Ok(DriverPageView)` - Page ready to render
    /// - `Err(Error::AuthError)` - No access token could be obtained
    /// - `Err(Error::PageError)` - Organizations failed to load or none are available
    pub async fn load(&self, session: &Session, form: &PageForm) -> Result<DriverPageView, Error> {
        let token_service = TokenService::new(self.syrve_client, self.api_login);
        let token = token_service.get_token(session).await?;

        let organizations: Vec<OrganizationDto> =
            match self.syrve_client.organizations(&token).await {
                Ok(organizations) => organizations
                    .into_iter()
                    .map(OrganizationDto::from)
                    .collect(),
                Err(error) => {
                    if matches!(error, SyrveError::Status { status: 401, .. }) {
                        token_service.discard_token(session).await?;
                    }

                    return Err(PageError::OrganizationsUnavailable(error).into());
                }
            };

        let Some(first) = organizations.first() else {
            return Err(PageError::NoOrganizations.into());
        };

        let selected_organization_id = match form.org_id.trim() {
            "" => first.id.clone(),
            org_id => org_id.to_string(),
        };

        let couriers = self.couriers(&token, &selected_organization_id).await;

        let notice = if form.is_change_driver() {
            let outcome = ChangeDriverService::new(self.syrve_client)
                .change_driver(
                    &token,
                    &selected_organization_id,
                    form,
                    self.command_status_delay,
                )
                .await;

            Some(outcome.to_notice())
        } else {
            None
        };

        Ok(DriverPageView {
            organizations,
            selected_organization_id,
            couriers,
            notice,
        })
    }

    async fn couriers(&self, token: &str, organization_id: &str) -> Vec<CourierDto> {
        match self
            .syrve_client
            .couriers(token, &[organization_id.to_string()])
            .await
        {
            Ok(couriers) => couriers.into_iter().map(CourierDto::from).collect(),
            Err(e) => {
                tracing::warn!(
                    organization_id = %organization_id,
                    "Failed to load couriers, showing an empty list: {}",
                    e
                );

                Vec::new()
            }
        }
    }
}
