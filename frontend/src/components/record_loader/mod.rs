//! Input panel where the user pastes the resume JSON to review.
//!
//! The parsed record is handed to the parent through `on_load`. Parsing
//! errors stay local to this panel.

use common::model::record::ResumeRecord;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

const SAMPLE_RESUME: &str = r#"{
  "name": "Ana Silva",
  "title": "Backend Engineer",
  "professionalSummary": [
    "Backend engineer with eight years of experience building data platforms.",
    "Enjoys mentoring and simplifying legacy systems."
  ],
  "technicalSkills": ["Go", "Rust", "PostgreSQL", "Kubernetes"],
  "employmentHistory": [
    { "role": "Senior Engineer", "company": "Acme", "start": "2021", "end": null },
    { "role": "Engineer", "company": "Initech", "start": "2017", "end": "2021" }
  ],
  "education": [{ "degree": "BSc Computer Science", "school": "USP", "year": 2016 }],
  "certifications": [{ "name": "CKA", "year": 2022 }]
}"#;

#[derive(Properties, PartialEq)]
pub struct RecordLoaderProps {
    pub on_load: Callback<ResumeRecord>,
}

pub enum Msg {
    UpdateText(String),
    UseSample,
    Load,
}

pub struct RecordLoaderComponent {
    text: String,
    error: Option<String>,
}

impl Component for RecordLoaderComponent {
    type Message = Msg;
    type Properties = RecordLoaderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            text: String::new(),
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateText(text) => {
                self.text = text;
                false
            }
            Msg::UseSample => {
                self.text = SAMPLE_RESUME.to_string();
                self.error = None;
                true
            }
            Msg::Load => {
                match parse_record(&self.text) {
                    Ok(record) => {
                        self.error = None;
                        ctx.props().on_load.emit(record);
                    }
                    Err(e) => self.error = Some(e),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="record-loader panel">
                <h2>{"Resume data"}</h2>
                <textarea
                    rows="10"
                    style="width: 100%; font-family: monospace;"
                    placeholder="Paste the extracted resume JSON here"
                    value={self.text.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdateText(textarea.value())
                    })}
                />
                <div>
                    <button type="button" onclick={link.callback(|_| Msg::Load)}>{"Load into form"}</button>
                    <button type="button" onclick={link.callback(|_| Msg::UseSample)}>{"Use sample"}</button>
                </div>
                if let Some(error) = &self.error {
                    <div class="notice-error">{ error.clone() }</div>
                }
            </div>
        }
    }
}

/// Parses the pasted text into a non-empty record.
fn parse_record(text: &str) -> Result<ResumeRecord, String> {
    let record = ResumeRecord::from_json_str(text).map_err(|e| e.to_string())?;
    if record.is_empty() {
        return Err("Resume data is empty".to_string());
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_resume_parses() {
        let record = parse_record(SAMPLE_RESUME).unwrap();
        assert_eq!(record.keys().next().map(String::as_str), Some("name"));
        assert_eq!(record.len(), 7);
    }

    #[test]
    fn empty_object_is_rejected() {
        assert_eq!(parse_record("{}").unwrap_err(), "Resume data is empty");
        assert!(parse_record("").is_err());
    }
}
