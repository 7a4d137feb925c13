//! Resume review form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export `Msg`, `ResumeFormProps` and `ResumeFormComponent`.
//! - Start a metadata load when the component is created with a record and
//!   whenever the `resume_data` prop changes.
//! - Cancel the success-message timer when the component is destroyed.

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::ResumeFormProps;
pub use state::ResumeFormComponent;

impl Component for ResumeFormComponent {
    type Message = Msg;
    type Properties = ResumeFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(record) = ctx.props().resume_data.clone() {
            ctx.link().send_message(Msg::LoadRecord(record));
        }
        ResumeFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().resume_data != old_props.resume_data {
            if let Some(record) = ctx.props().resume_data.clone() {
                ctx.link().send_message(Msg::LoadRecord(record));
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.notice_timer = None;
    }
}
