//! Data Transfer Objects
//!
//! 任务载荷与响应的线格式。响应只有两种互斥形态：
//! `{"audio_base64": ...}` 或 `{"error": ...}`，不携带额外的包装字段。

use serde::{Deserialize, Serialize};

use crate::application::RunJobResult;

/// 任务请求（Host Runtime 传入的 Job）
#[derive(Debug, Deserialize)]
pub struct JobRequest {
    /// Host Runtime 分配的任务 ID（可选，仅用于日志关联）
    #[serde(default)]
    pub id: Option<String>,
    pub input: JobInputDto,
}

/// 任务输入字段
#[derive(Debug, Default, Deserialize)]
pub struct JobInputDto {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub speaker_wav_base64: Option<String>,
}

/// 任务响应
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum JobResponse {
    /// 合成成功
    Audio { audio_base64: String },
    /// 结构化错误（缺少必填字段）
    Error { error: String },
}

impl From<RunJobResult> for JobResponse {
    fn from(result: RunJobResult) -> Self {
        match result {
            RunJobResult::Completed { audio_base64 } => JobResponse::Audio { audio_base64 },
            RunJobResult::Rejected { error } => JobResponse::Error { error },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_shape_has_single_key() {
        let response = JobResponse::Audio {
            audio_base64: "QUJD".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"audio_base64": "QUJD"}));
    }

    #[test]
    fn test_error_shape_has_single_key() {
        let response = JobResponse::Error {
            error: "speaker_wav_base64 is a required field.".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"error": "speaker_wav_base64 is a required field."})
        );
    }

    #[test]
    fn test_job_request_optional_fields() {
        let request: JobRequest = serde_json::from_value(json!({"input": {}})).unwrap();
        assert!(request.id.is_none());
        assert!(request.input.text.is_none());
        assert!(request.input.speaker_wav_base64.is_none());
    }
}
