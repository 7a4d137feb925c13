//! State machine behind the resume review form.
//!
//! `ResumeForm` owns the schema descriptor, the editable values and the status
//! of the two network operations (metadata load and submission). It performs
//! no I/O: `begin_*` methods return the request body the caller must send, or
//! `None` when nothing should be sent, and `finish_*` methods take the
//! outcome. The Yew component wires these to `gloo-net` requests.
//!
//! Lifecycle
//! - `begin_load` clears the previous schema and values and issues a
//!   [`LoadTicket`]. Only the latest ticket is accepted by `finish_load`, so a
//!   response to a superseded record can never overwrite the current state.
//! - `begin_submit` snapshots the values into an insert payload, along with
//!   the structured columns sent as raw text. While a submission is in
//!   flight further calls are no-ops.
//! - A successful submission yields a [`NoticeId`]. The caller clears the
//!   success message with `clear_notice` after [`SUCCESS_NOTICE_DURATION`];
//!   a clear for an older notice is ignored.

mod mapper;
mod reconcile;
mod values;

use std::time::Duration;

use crate::errors::FormError;
use crate::model::field::RenderHint;
use crate::model::record::ResumeRecord;
use crate::model::schema::SchemaDescriptor;
use crate::requests::{InsertResumeResponse, TableMetadataRequest};

pub use mapper::{initial_values, map_field};
pub use reconcile::{reconcile, try_parse_json, Reconciled};
pub use values::EditableValues;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Resume data saved successfully.";
pub const DEFAULT_SUBMIT_ERROR: &str = "Failed to save resume data. Please try again.";
pub const METADATA_ERROR_PREFIX: &str = "Failed to load table metadata";

/// How long a success message stays visible.
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Identifies one metadata request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Identifies one success message, for its delayed clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No record has been supplied yet.
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded { message: String, notice: NoticeId },
    Failed(String),
}

#[derive(Debug, Default)]
pub struct ResumeForm {
    load: LoadStatus,
    submit: SubmitStatus,
    schema: SchemaDescriptor,
    values: EditableValues,
    /// Ticket and originating record of the metadata request in flight.
    pending: Option<(LoadTicket, ResumeRecord)>,
    last_ticket: u64,
    last_notice: u64,
}

impl ResumeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts loading the schema for `record`.
    ///
    /// Returns `None` and leaves the form untouched when the record is empty.
    pub fn begin_load(&mut self, record: ResumeRecord) -> Option<(LoadTicket, TableMetadataRequest)> {
        if record.is_empty() {
            return None;
        }

        self.last_ticket += 1;
        let ticket = LoadTicket(self.last_ticket);

        self.load = LoadStatus::Loading;
        self.schema = SchemaDescriptor::default();
        self.values.clear();
        if !matches!(self.submit, SubmitStatus::Submitting) {
            self.submit = SubmitStatus::Idle;
        }
        self.pending = Some((ticket, record.clone()));

        Some((
            ticket,
            TableMetadataRequest {
                resume_data: record,
            },
        ))
    }

    /// Applies the outcome of the metadata request identified by `ticket`.
    ///
    /// Returns `false` when the ticket is stale and the outcome was dropped.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<SchemaDescriptor, FormError>,
    ) -> bool {
        let record = match self.pending.take() {
            Some((pending, record)) if pending == ticket => record,
            other => {
                self.pending = other;
                return false;
            }
        };

        match outcome {
            Ok(schema) => {
                self.values = initial_values(&schema.columns, &record);
                self.schema = schema;
                self.load = LoadStatus::Ready;
            }
            Err(err) => {
                self.schema = SchemaDescriptor::default();
                self.values.clear();
                self.load = LoadStatus::Failed(format!("{METADATA_ERROR_PREFIX}: {err}"));
            }
        }
        true
    }

    /// Replaces the text of `column`. Unknown columns are ignored.
    pub fn edit(&mut self, column: &str, value: String) -> bool {
        self.values.set(column, value)
    }

    /// Snapshots the current values into an insert payload.
    ///
    /// Returns `None` while a submission is in flight or before a schema has
    /// been loaded.
    pub fn begin_submit(&mut self) -> Option<Reconciled> {
        if !self.can_submit() {
            return None;
        }
        self.submit = SubmitStatus::Submitting;
        Some(reconcile(&self.schema.table_name, &self.values))
    }

    /// Applies the outcome of the submission in flight.
    ///
    /// Returns the notice to clear later when the submission succeeded.
    pub fn finish_submit(
        &mut self,
        outcome: Result<InsertResumeResponse, FormError>,
    ) -> Option<NoticeId> {
        if !self.is_submitting() {
            return None;
        }

        match outcome {
            Ok(response) => {
                self.last_notice += 1;
                let notice = NoticeId(self.last_notice);
                let message = response
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                self.submit = SubmitStatus::Succeeded { message, notice };
                Some(notice)
            }
            Err(err) => {
                self.submit = SubmitStatus::Failed(err.user_message(DEFAULT_SUBMIT_ERROR));
                None
            }
        }
    }

    /// Clears the success message if `notice` is still the one on display.
    pub fn clear_notice(&mut self, notice: NoticeId) -> bool {
        let is_current = matches!(
            &self.submit,
            SubmitStatus::Succeeded { notice: current, .. } if *current == notice
        );
        if is_current {
            self.submit = SubmitStatus::Idle;
        }
        is_current
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load
    }

    pub fn submit_status(&self) -> &SubmitStatus {
        &self.submit
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        &self.schema
    }

    pub fn values(&self) -> &EditableValues {
        &self.values
    }

    pub fn value(&self, column: &str) -> Option<&str> {
        self.values.get(column)
    }

    /// Rendering mode of `column`, computed from its current text.
    pub fn render_hint(&self, column: &str) -> Option<RenderHint> {
        self.values.get(column).map(RenderHint::for_value)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadStatus::Loading)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submit, SubmitStatus::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        matches!(self.load, LoadStatus::Ready) && !self.is_submitting()
    }

    /// Error currently shown to the user, from either operation.
    pub fn error_message(&self) -> Option<&str> {
        match (&self.load, &self.submit) {
            (LoadStatus::Failed(error), _) | (_, SubmitStatus::Failed(error)) => Some(error.as_str()),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.submit {
            SubmitStatus::Succeeded { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}
