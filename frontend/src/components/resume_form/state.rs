//! Component state for the resume review form.

use common::form::ResumeForm;
use gloo_timers::callback::Timeout;

/// Holds the form state machine and the pending success-message timer.
///
/// The timer is owned here so that replacing it, or dropping the component,
/// cancels it before it can fire.
pub struct ResumeFormComponent {
    pub form: ResumeForm,
    pub notice_timer: Option<Timeout>,
}

impl ResumeFormComponent {
    pub fn new() -> Self {
        Self {
            form: ResumeForm::new(),
            notice_timer: None,
        }
    }
}
