//! 任务命令定义

pub mod handlers;
mod job_commands;

pub use job_commands::{
    JobInput, RunJobCommand, RunJobResult, DEFAULT_TEXT, MISSING_SPEAKER_WAV_ERROR,
};
