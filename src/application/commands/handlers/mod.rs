//! Command Handlers

mod job_command_handlers;

pub use job_command_handlers::RunJobHandler;
