//! Voxclone - 单请求声音克隆 TTS 推理 Worker
//!
//! 架构设计: Hexagonal Architecture
//!
//! 应用层 (application/):
//! - Ports: 端口定义（TtsEngine）
//! - Commands: 任务命令及处理器（RunJob）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: Host Runtime 边界（任务入口 + 健康检查）
//! - Adapters: TTS Engine Client（HTTP / Fake）

pub mod application;
pub mod config;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
