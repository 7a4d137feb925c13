pub mod record_loader;
pub mod resume_form;
