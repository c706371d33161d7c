//! Job Command Handlers
//!
//! 一个任务一次调用：解码 → 合成 → 编码 → 返回。
//! 唯一在本层恢复的失败是缺少 `speaker_wav_base64`；
//! 解码失败和引擎失败原样向上传播，由边界层决定呈现方式。

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::application::commands::job_commands::{
    JobInput, RunJobCommand, RunJobResult, DEFAULT_TEXT, MISSING_SPEAKER_WAV_ERROR,
};
use crate::application::error::ApplicationError;
use crate::application::ports::{SynthesizeRequest, TtsEnginePort};

/// RunJob Handler - 处理单个合成任务
///
/// 除共享的只读模型会话外不持有任何可变状态，可被并发调用
pub struct RunJobHandler {
    engine: Arc<dyn TtsEnginePort>,
}

impl RunJobHandler {
    pub fn new(engine: Arc<dyn TtsEnginePort>) -> Self {
        Self { engine }
    }

    pub async fn handle(&self, cmd: RunJobCommand) -> Result<RunJobResult, ApplicationError> {
        let job_id = cmd
            .job_id
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let JobInput {
            text,
            speaker_wav_base64,
        } = cmd.input;

        let text = text.unwrap_or_else(|| DEFAULT_TEXT.to_string());

        // 唯一的本地校验：参考音频必填。校验失败不触达模型会话。
        let speaker_wav_base64 = match speaker_wav_base64 {
            Some(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!(job_id = %job_id, "Job rejected: missing speaker_wav_base64");
                return Ok(RunJobResult::Rejected {
                    error: MISSING_SPEAKER_WAV_ERROR.to_string(),
                });
            }
        };

        // 解码参考音频；格式错误走失败通道而不是结构化拒绝
        let speaker_wav = STANDARD.decode(&speaker_wav_base64).map_err(|e| {
            ApplicationError::InvalidPayload(format!(
                "speaker_wav_base64 is not valid base64: {}",
                e
            ))
        })?;

        tracing::debug!(
            job_id = %job_id,
            text_len = text.len(),
            speaker_wav_size = speaker_wav.len(),
            "Dispatching synthesis"
        );

        let response = self
            .engine
            .synthesize(SynthesizeRequest { text, speaker_wav })
            .await?;

        tracing::info!(
            job_id = %job_id,
            audio_size = response.audio_data.len(),
            duration_ms = ?response.duration_ms,
            sample_rate = ?response.sample_rate,
            "Synthesis completed"
        );

        Ok(RunJobResult::Completed {
            audio_base64: STANDARD.encode(&response.audio_data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeTtsEngine;

    const FAKE_AUDIO: &[u8] = b"RIFF-fake-wav-payload";

    fn handler_with_fake() -> (RunJobHandler, Arc<FakeTtsEngine>) {
        let engine = Arc::new(FakeTtsEngine::new(FAKE_AUDIO.to_vec()));
        (RunJobHandler::new(engine.clone()), engine)
    }

    fn command(text: Option<&str>, speaker_wav_base64: Option<&str>) -> RunJobCommand {
        RunJobCommand {
            job_id: None,
            input: JobInput {
                text: text.map(String::from),
                speaker_wav_base64: speaker_wav_base64.map(String::from),
            },
        }
    }

    #[tokio::test]
    async fn test_missing_speaker_wav_is_rejected() {
        let (handler, engine) = handler_with_fake();

        let result = handler.handle(command(Some("Test"), None)).await.unwrap();

        assert_eq!(
            result,
            RunJobResult::Rejected {
                error: MISSING_SPEAKER_WAV_ERROR.to_string()
            }
        );
        // 校验失败时不触达引擎
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_speaker_wav_is_rejected() {
        let (handler, engine) = handler_with_fake();

        let result = handler.handle(command(Some("Test"), Some(""))).await.unwrap();

        assert_eq!(
            result,
            RunJobResult::Rejected {
                error: MISSING_SPEAKER_WAV_ERROR.to_string()
            }
        );
        assert_eq!(engine.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_text_falls_back_to_default() {
        let (handler, engine) = handler_with_fake();
        let reference = STANDARD.encode(b"reference-voice");

        handler
            .handle(command(None, Some(&reference)))
            .await
            .unwrap();

        let request = engine.last_request().expect("engine was not invoked");
        assert_eq!(request.text, DEFAULT_TEXT);
    }

    #[tokio::test]
    async fn test_completed_job_round_trips_audio() {
        let (handler, engine) = handler_with_fake();
        let reference_bytes = b"reference-voice-sample".to_vec();
        let reference = STANDARD.encode(&reference_bytes);

        let result = handler
            .handle(command(Some("Hello world"), Some(&reference)))
            .await
            .unwrap();

        // 引擎收到的是解码后的原始字节
        let request = engine.last_request().unwrap();
        assert_eq!(request.text, "Hello world");
        assert_eq!(request.speaker_wav, reference_bytes);
        assert_eq!(engine.call_count(), 1);

        // 响应音频可无损解码回引擎返回的字节
        match result {
            RunJobResult::Completed { audio_base64 } => {
                let decoded = STANDARD.decode(&audio_base64).unwrap();
                assert_eq!(decoded, FAKE_AUDIO);
                assert!(!decoded.is_empty());
            }
            other => panic!("expected Completed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_engine_session_is_reused_across_jobs() {
        let (handler, engine) = handler_with_fake();
        let reference = STANDARD.encode(b"reference-voice");

        for _ in 0..3 {
            handler
                .handle(command(Some("Test"), Some(&reference)))
                .await
                .unwrap();
        }

        // 同一会话实例服务所有任务，不会每个任务重建
        assert_eq!(engine.call_count(), 3);
    }

    #[tokio::test]
    async fn test_invalid_base64_propagates_as_error() {
        let (handler, engine) = handler_with_fake();

        let result = handler
            .handle(command(Some("Test"), Some("not//valid??base64!")))
            .await;

        // 解码失败不转成结构化拒绝，而是走失败通道
        assert!(matches!(
            result,
            Err(ApplicationError::InvalidPayload(_))
        ));
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn test_base64_round_trip_is_lossless() {
        let original: Vec<u8> = (0u8..=255).collect();
        let encoded = STANDARD.encode(&original);
        let decoded = STANDARD.decode(&encoded).unwrap();
        assert_eq!(decoded, original);
    }
}
