//! Shared types for the resume editor: the wire model exchanged with the
//! backend and the form state machine driven by the Yew frontend.

pub mod config;
pub mod errors;
pub mod form;
pub mod model;
pub mod requests;
