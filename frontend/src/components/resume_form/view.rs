//! View rendering for the resume review form.
//!
//! One field per schema column, in schema order. Whether a field is drawn as
//! an `<input>` or a `<textarea>` is decided on every render from its current
//! text, so a value that gains a line break switches to a textarea.
//! Shift+Enter in a single-line input inserts that line break.

use common::form::{LoadStatus, ResumeForm, SubmitStatus};
use common::model::field::{FieldCategory, RenderHint};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{field_label, insert_newline_at, textarea_rows};
use super::messages::Msg;
use super::state::ResumeFormComponent;

pub fn view(component: &ResumeFormComponent, ctx: &Context<ResumeFormComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <div class="resume-form-root panel">
            {
                match form.load_status() {
                    LoadStatus::Idle => html! {
                        <p class="muted">{"Load resume data to start reviewing it."}</p>
                    },
                    LoadStatus::Loading => html! {
                        <p class="muted">{"Loading table metadata..."}</p>
                    },
                    LoadStatus::Failed(error) => html! {
                        <div class="notice-error">{ error.clone() }</div>
                    },
                    LoadStatus::Ready => html! {
                        <>
                            { build_header(form) }
                            { build_fields(form, link) }
                            { build_actions(form, link) }
                            { build_notices(form) }
                        </>
                    },
                }
            }
        </div>
    }
}

fn build_header(form: &ResumeForm) -> Html {
    html! {
        <div class="resume-form-header">
            <h2>{"Review resume data"}</h2>
            <p class="muted">
                { format!("Target table: {} ({} fields)", form.schema().table_name, form.values().len()) }
            </p>
        </div>
    }
}

fn build_fields(form: &ResumeForm, link: &Scope<ResumeFormComponent>) -> Html {
    form.values()
        .iter()
        .map(|(column, value)| {
            let hint = form.render_hint(column).unwrap_or(RenderHint::SingleLine);
            build_field(column, value, hint, link)
        })
        .collect::<Html>()
}

fn build_field(
    column: &str,
    value: &str,
    hint: RenderHint,
    link: &Scope<ResumeFormComponent>,
) -> Html {
    let id = format!("resume-field-{}", column);
    let is_json = FieldCategory::of(column) == FieldCategory::Structured;

    let input = match hint {
        RenderHint::MultiLine => {
            let column_name = column.to_string();
            html! {
                <textarea
                    id={id}
                    value={value.to_string()}
                    rows={textarea_rows(value).to_string()}
                    spellcheck={if is_json { "false" } else { "true" }}
                    oninput={link.callback(move |e: InputEvent| {
                        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::EditField { column: column_name.clone(), value: textarea.value() }
                    })}
                />
            }
        }
        RenderHint::SingleLine => {
            let column_input = column.to_string();
            let column_key = column.to_string();
            html! {
                <input
                    id={id}
                    type="text"
                    value={value.to_string()}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::EditField { column: column_input.clone(), value: input.value() }
                    })}
                    onkeydown={link.batch_callback(move |e: KeyboardEvent| {
                        if e.key() != "Enter" || !e.shift_key() {
                            return vec![];
                        }
                        e.prevent_default();
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let text = input.value();
                        let cursor = input
                            .selection_start()
                            .ok()
                            .flatten()
                            .map(|pos| pos as usize)
                            .unwrap_or_else(|| text.encode_utf16().count());
                        vec![Msg::EditField {
                            column: column_key.clone(),
                            value: insert_newline_at(&text, cursor),
                        }]
                    })}
                />
            }
        }
    };

    html! {
        <div class="field" key={column.to_string()}>
            <label>
                { field_label(column) }
                if is_json {
                    <span class="badge" title="Edited as JSON">{"JSON"}</span>
                }
            </label>
            { input }
        </div>
    }
}

fn build_actions(form: &ResumeForm, link: &Scope<ResumeFormComponent>) -> Html {
    let submitting = form.is_submitting();
    html! {
        <div class="resume-form-actions">
            <button
                type="button"
                disabled={!form.can_submit()}
                onclick={link.callback(|_| Msg::Submit)}
            >
                { if submitting { "Saving..." } else { "Save to database" } }
            </button>
        </div>
    }
}

fn build_notices(form: &ResumeForm) -> Html {
    match form.submit_status() {
        SubmitStatus::Succeeded { message, .. } => html! {
            <div class="notice-success">{ message.clone() }</div>
        },
        SubmitStatus::Failed(error) => html! {
            <div class="notice-error">{ error.clone() }</div>
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
    }
}
