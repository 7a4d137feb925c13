//! Properties of the `ResumeFormComponent`.

use common::config::ApiConfig;
use common::model::record::ResumeRecord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResumeFormProps {
    /// Backend location, validated by the caller.
    pub api: ApiConfig,

    /// Record to review. Every new value triggers a metadata request and
    /// resets the form; `None` leaves the component idle.
    #[prop_or_default]
    pub resume_data: Option<ResumeRecord>,

    /// Called with the success message after each stored submission.
    #[prop_or_default]
    pub on_saved: Callback<String>,
}
