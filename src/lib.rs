#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod approvals;
pub mod config;
pub mod error;
pub mod mou;
pub mod pipeline;
pub mod service;
pub mod ui;

pub use approvals::{ApprovalEditor, ApprovalEntry, ApprovalStatus, SubmitPolicy};
pub use config::Config;
pub use error::{ErrorKind, MouError, ServiceError, ValidationError};
pub use mou::{MouField, MouRequest, RequestBuilder};
pub use pipeline::{GenerationSession, PipelineRenderer, PipelineResult, Stage};
pub use service::{HttpServiceClient, ServiceClient};
