//! Change-driver command workflow.
//!
//! A driver change is asynchronous on the Syrve side: submitting it returns a correlation id
//! and the result has to be read from `/commands/status` afterwards. The workflow runs in two
//! explicit phases so the submission always completes before the status is read:
//!
//! 1. [`ChangeDriverService::submit`] sends the command and yields a [`CorrelationHandle`].
//! 2. [`ChangeDriverService::await_status`] waits, checks the status once and resolves it to a
//!    [`ChangeDriverOutcome`].
//!
//! The status is checked exactly once. A command still `InProgress` at that point is reported
//! as such and the operator decides whether to resubmit.

use std::{fmt, time::Duration};

use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    model::page::{NoticeDto, NoticeLevel, PageForm},
    server::{
        error::syrve::SyrveError,
        model::syrve::{correlation_id, ChangeDriverInfoRequest, CommandState},
        syrve::client::SyrveClient,
    },
};

/// Links a submitted command to its later status check.
///
/// Only meaningful within the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationHandle {
    /// Organization the command was submitted for
    pub organization_id: String,
    /// Id the status endpoint is queried with
    pub correlation_id: String,
}

/// Why a submission did not produce a [`CorrelationHandle`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// The submission call failed
    Rejected(SyrveError),
    /// Accepted without a correlation id; carries the raw response
    MissingCorrelationId(Value),
}

/// Final result of one change-driver attempt, shown once to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeDriverOutcome {
    /// The form was submitted without an order id; nothing was sent.
    MissingOrderId,
    /// The submission call failed
    SubmissionFailed(SyrveError),
    /// The submission returned no correlation id; carries the raw response
    MissingCorrelationId(Value),
    /// The status call failed
    StatusQueryFailed {
        /// Id of the submitted command
        correlation_id: String,
        /// Failure of the status call
        error: SyrveError,
    },
    /// The command was still running when its status was checked
    InProgress {
        /// Id of the submitted command
        correlation_id: String,
    },
    /// The driver was changed
    Success,
    /// The command finished with `Error`; the whole status response is kept since the
    /// error detail field differs between API versions.
    CommandFailed(Value),
    /// Any other state label
    UnknownState {
        /// Label as reported
        state: String,
        /// Id of the submitted command
        correlation_id: String,
    },
}

impl ChangeDriverOutcome {
    /// Presentation level of the notice
    pub fn level(&self) -> NoticeLevel {
        match self {
            Self::Success => NoticeLevel::Success,
            Self::InProgress { .. } | Self::UnknownState { .. } => NoticeLevel::Info,
            Self::MissingOrderId => NoticeLevel::Warning,
            Self::SubmissionFailed(_)
            | Self::MissingCorrelationId(_)
            | Self::StatusQueryFailed { .. }
            | Self::CommandFailed(_) => NoticeLevel::Danger,
        }
    }

    /// Message and level shown on the page
    pub fn to_notice(&self) -> NoticeDto {
        NoticeDto {
            level: self.level(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for ChangeDriverOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOrderId => write!(f, "Please enter an OrderId (order UUID)."),
            Self::SubmissionFailed(error) => write!(f, "change_driver_info error: {}", error),
            Self::MissingCorrelationId(response) => {
                write!(f, "No correlationId returned. Response: {}", response)
            }
            Self::StatusQueryFailed { error, .. } => {
                write!(f, "Command status error: {}", error)
            }
            Self::InProgress { correlation_id } => write!(
                f,
                "Command in progress (InProgress). CorrId={}",
                correlation_id
            ),
            Self::Success => write!(f, "Driver changed successfully. Status = Success."),
            Self::CommandFailed(response) => {
                write!(f, "Command returned status Error: {}", response)
            }
            Self::UnknownState {
                state,
                correlation_id,
            } => write!(
                f,
                "Command status: unknown state `{}`. CorrId={}",
                state, correlation_id
            ),
        }
    }
}

impl From<SubmitFailure> for ChangeDriverOutcome {
    fn from(failure: SubmitFailure) -> Self {
        match failure {
            SubmitFailure::Rejected(error) => Self::SubmissionFailed(error),
            SubmitFailure::MissingCorrelationId(response) => Self::MissingCorrelationId(response),
        }
    }
}

/// Builds the command payload from the posted form.
///
/// Inputs are trimmed; empty driver id and estimated time become absent fields.
///
/// # Returns
/// - `Ok(ChangeDriverInfoRequest)` - Order id present
/// - `Err(ChangeDriverOutcome::MissingOrderId)` - Order id empty after trimming
pub fn build_request(
    organization_id: &str,
    form: &PageForm,
) -> Result<ChangeDriverInfoRequest, ChangeDriverOutcome> {
    let order_id = form.order_id.trim();
    if order_id.is_empty() {
        return Err(ChangeDriverOutcome::MissingOrderId);
    }

    let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());

    Ok(ChangeDriverInfoRequest {
        organization_id: organization_id.to_string(),
        order_id: order_id.to_string(),
        driver_id: optional(&form.driver_id),
        estimated_time: optional(&form.estimated_time),
    })
}

/// Runs change-driver commands against the Syrve API.
pub struct ChangeDriverService<'a> {
    syrve_client: &'a SyrveClient,
}

impl<'a> ChangeDriverService<'a> {
    /// Creates a new instance of [`ChangeDriverService`]
    pub fn new(syrve_client: &'a SyrveClient) -> Self {
        Self { syrve_client }
    }

    /// Validates the form, submits the command and checks its status once after `wait`
    ///
    /// An empty order id resolves immediately without any network call.
    pub async fn change_driver(
        &self,
        token: &str,
        organization_id: &str,
        form: &PageForm,
        wait: Duration,
    ) -> ChangeDriverOutcome {
        let request = match build_request(organization_id, form) {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let handle = match self.submit(token, &request).await {
            Ok(handle) => handle,
            Err(failure) => return failure.into(),
        };

        self.await_status(token, handle, wait).await
    }

    /// Sends the change-driver command
    ///
    /// # Returns
    /// - `Ok(CorrelationHandle)` - Command accepted with a correlation id
    /// - `Err(SubmitFailure::Rejected)` - The call failed
    /// - `Err(SubmitFailure::MissingCorrelationId)` - Accepted without a correlation id
    pub async fn submit(
        &self,
        token: &str,
        request: &ChangeDriverInfoRequest,
    ) -> Result<CorrelationHandle, SubmitFailure> {
        let response = self
            .syrve_client
            .change_driver_info(token, request)
            .await
            .map_err(|error| {
                tracing::warn!(
                    order_id = %request.order_id,
                    "change_driver_info failed: {}",
                    error
                );

                SubmitFailure::Rejected(error)
            })?;

        let Some(correlation_id) = correlation_id(&response).map(str::to_string) else {
            tracing::warn!(
                order_id = %request.order_id,
                "change_driver_info returned no correlationId"
            );

            return Err(SubmitFailure::MissingCorrelationId(response));
        };

        tracing::debug!(
            order_id = %request.order_id,
            correlation_id = %correlation_id,
            "Submitted change driver command"
        );

        Ok(CorrelationHandle {
            organization_id: request.organization_id.clone(),
            correlation_id,
        })
    }

    /// Waits `wait`, then reads the command status once and maps it to an outcome
    pub async fn await_status(
        &self,
        token: &str,
        handle: CorrelationHandle,
        wait: Duration,
    ) -> ChangeDriverOutcome {
        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }

        let CorrelationHandle {
            organization_id,
            correlation_id,
        } = handle;

        let response = match self
            .syrve_client
            .command_status(token, &organization_id, &correlation_id)
            .await
        {
            Ok(response) => response,
            Err(error) => {
                tracing::warn!(
                    correlation_id = %correlation_id,
                    "Command status query failed: {}",
                    error
                );

                return ChangeDriverOutcome::StatusQueryFailed {
                    correlation_id,
                    error,
                };
            }
        };

        let state = CommandState::from_response(&response);
        tracing::debug!(correlation_id = %correlation_id, state = ?state, "Read command status");

        match state {
            CommandState::InProgress => ChangeDriverOutcome::InProgress { correlation_id },
            CommandState::Success => ChangeDriverOutcome::Success,
            CommandState::Error => ChangeDriverOutcome::CommandFailed(response),
            CommandState::Unknown(state) => ChangeDriverOutcome::UnknownState {
                state,
                correlation_id,
            },
        }
    }
}
