use common::config::ApiConfig;
use common::errors::ConfigError;
use common::model::record::ResumeRecord;
use yew::{html, Component, Context, Html};

use crate::components::record_loader::RecordLoaderComponent;
use crate::components::resume_form::ResumeFormComponent;

/// Backend base URL, fixed at build time (`RESUME_API_BASE_URL=... trunk build`).
const API_BASE_URL: Option<&str> = option_env!("RESUME_API_BASE_URL");

pub enum Msg {
    RecordLoaded(ResumeRecord),
    Saved(String),
}

pub struct App {
    api: Result<ApiConfig, ConfigError>,
    record: Option<ResumeRecord>,
    /// Bumped on every load so that loading the same record again remounts
    /// the form and retries the metadata request.
    revision: u32,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let api = ApiConfig::new(API_BASE_URL);
        if let Err(e) = &api {
            gloo_console::error!(format!("Invalid API configuration: {}", e));
        }
        Self {
            api,
            record: None,
            revision: 0,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RecordLoaded(record) => {
                self.record = Some(record);
                self.revision += 1;
                true
            }
            Msg::Saved(message) => {
                gloo_console::log!(message);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app-root">
                <h1>{"Resume Editor"}</h1>
                {
                    match &self.api {
                        Ok(api) => html! {
                            <>
                                <RecordLoaderComponent on_load={link.callback(Msg::RecordLoaded)} />
                                <ResumeFormComponent
                                    key={self.revision.to_string()}
                                    api={api.clone()}
                                    resume_data={self.record.clone()}
                                    on_saved={link.callback(Msg::Saved)}
                                />
                            </>
                        },
                        Err(e) => html! {
                            <div class="notice-error panel">
                                { format!("The editor is not configured: {}. Rebuild it with RESUME_API_BASE_URL set.", e) }
                            </div>
                        },
                    }
                }
            </div>
        }
    }
}
