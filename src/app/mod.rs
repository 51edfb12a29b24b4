pub mod dispatch;
pub mod prompts;
pub mod status;
