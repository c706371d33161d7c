//! Job Commands - 单请求推理任务

/// `text` 缺省时使用的占位文本
pub const DEFAULT_TEXT: &str = "Hello, this is a test.";

/// 缺少参考音频时返回的错误信息
pub const MISSING_SPEAKER_WAV_ERROR: &str = "speaker_wav_base64 is a required field.";

/// 任务输入
///
/// Host Runtime 传入的 `input` 字段。`speaker_wav_base64` 为必填，
/// 在 Handler 中校验；`text` 可缺省。
#[derive(Debug, Clone, Default)]
pub struct JobInput {
    pub text: Option<String>,
    pub speaker_wav_base64: Option<String>,
}

/// RunJob 命令 - 处理一个任务
#[derive(Debug, Clone)]
pub struct RunJobCommand {
    /// Host Runtime 分配的任务 ID（缺省时生成，仅用于日志关联）
    pub job_id: Option<String>,
    pub input: JobInput,
}

/// RunJob 结果
///
/// 与失败通道（`ApplicationError`）互斥的两种正常返回形态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunJobResult {
    /// 合成成功，携带 base64 编码的音频
    Completed { audio_base64: String },
    /// 缺少必填字段，任务被拒绝
    Rejected { error: String },
}
