//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（TtsEngine）
//! - commands: 任务命令及处理器（RunJob）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::RunJobHandler, JobInput, RunJobCommand, RunJobResult, DEFAULT_TEXT,
    MISSING_SPEAKER_WAV_ERROR,
};

pub use error::ApplicationError;

pub use ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};
