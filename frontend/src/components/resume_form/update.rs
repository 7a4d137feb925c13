//! Update function for the resume review form.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! drives the `ResumeForm` state machine, starts the network requests it asks
//! for, and returns whether the view should re-render.
//!
//! Key behaviors
//! - `LoadRecord` asks the backend for the table metadata of the new record;
//!   the answer comes back as `MetadataLoaded` tagged with its load ticket.
//! - `Submit` posts the reconciled payload once; further clicks are ignored
//!   until `SubmitFinished` arrives.
//! - A successful submission schedules `ClearNotice` after
//!   `SUCCESS_NOTICE_DURATION` with a cancellable `Timeout`.

use common::form::SUCCESS_NOTICE_DURATION;
use gloo_timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::{fetch_table_metadata, insert_resume};
use super::messages::Msg;
use super::state::ResumeFormComponent;

pub fn update(
    component: &mut ResumeFormComponent,
    ctx: &Context<ResumeFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LoadRecord(record) => {
            let Some((ticket, request)) = component.form.begin_load(record) else {
                gloo_console::warn!("Ignoring empty resume data");
                return false;
            };
            component.notice_timer = None;

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = fetch_table_metadata(&api, &request).await;
                link.send_message(Msg::MetadataLoaded { ticket, result });
            });
            true
        }
        Msg::MetadataLoaded { ticket, result } => {
            if let Err(err) = &result {
                gloo_console::error!(format!("Table metadata request failed: {}", err));
            }
            let applied = component.form.finish_load(ticket, result);
            if !applied {
                gloo_console::debug!("Dropping metadata response for a superseded record");
            }
            applied
        }
        Msg::EditField { column, value } => component.form.edit(&column, value),
        Msg::Submit => {
            let Some(reconciled) = component.form.begin_submit() else {
                return false;
            };
            for column in &reconciled.raw_columns {
                gloo_console::warn!(format!(
                    "Column '{}' is not valid JSON, submitting it as text",
                    column
                ));
            }
            component.notice_timer = None;

            let api = ctx.props().api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = insert_resume(&api, &reconciled.request).await;
                link.send_message(Msg::SubmitFinished(result));
            });
            true
        }
        Msg::SubmitFinished(result) => {
            if let Err(err) = &result {
                gloo_console::error!(format!("Resume submission failed: {}", err));
            }

            if let Some(notice) = component.form.finish_submit(result) {
                if let Some(message) = component.form.success_message() {
                    ctx.props().on_saved.emit(message.to_string());
                }

                let link = ctx.link().clone();
                let delay_ms = SUCCESS_NOTICE_DURATION.as_millis() as u32;
                component.notice_timer = Some(Timeout::new(delay_ms, move || {
                    link.send_message(Msg::ClearNotice(notice));
                }));
            }
            true
        }
        Msg::ClearNotice(notice) => {
            let cleared = component.form.clear_notice(notice);
            if cleared {
                component.notice_timer = None;
            }
            cleared
        }
    }
}
