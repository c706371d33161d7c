//! TTS Engine Port - 模型会话抽象
//!
//! 定义 TTS 合成的抽象接口，具体实现在 infrastructure/adapters 层。
//! 实现者持有已初始化的合成能力，进程启动时建立一次，之后只读复用；
//! 是否支持并发 synthesize 调用由具体实现自行约定。

use async_trait::async_trait;
use thiserror::Error;

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// TTS 合成请求
#[derive(Debug, Clone)]
pub struct SynthesizeRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 参考音频原始字节（已从 base64 解码）
    pub speaker_wav: Vec<u8>,
}

/// TTS 合成响应
#[derive(Debug, Clone)]
pub struct SynthesizeResponse {
    /// 合成的原始音频数据（WAV/PCM）
    pub audio_data: Vec<u8>,
    /// 音频时长（毫秒），仅用于日志
    pub duration_ms: Option<u64>,
    /// 采样率，仅用于日志
    pub sample_rate: Option<u32>,
}

/// TTS Engine Port
///
/// 合成能力的抽象接口。空文本是否合法由实现方决定，此处不做校验。
#[async_trait]
pub trait TtsEnginePort: Send + Sync {
    /// 执行一次 TTS 合成
    ///
    /// 输入文本和参考音频字节，返回合成的音频数据
    async fn synthesize(&self, request: SynthesizeRequest)
        -> Result<SynthesizeResponse, TtsError>;

    /// 检查引擎是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
