//! 应用层错误定义
//!
//! 任务处理中未被本地恢复的失败通道。
//! 注意：缺少必填字段不走这里，而是作为结构化拒绝结果返回
//! （见 `RunJobResult::Rejected`），两个通道不混用。

use thiserror::Error;

use crate::application::ports::TtsError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 输入载荷无效（base64 解码失败等）
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// TTS 引擎错误
    #[error("TTS engine error: {0}")]
    Engine(#[from] TtsError),
}
