//! Fake TTS Engine - 用于测试的模型会话
//!
//! 始终返回固定的音频字节，不实际调用引擎进程；
//! 记录调用次数和最近一次请求，供断言使用

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::application::ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};

/// Fake TTS Engine
pub struct FakeTtsEngine {
    /// 固定返回的音频数据
    audio_data: Vec<u8>,
    /// 固定返回的采样率
    sample_rate: u32,
    calls: AtomicUsize,
    last_request: Mutex<Option<SynthesizeRequest>>,
}

impl FakeTtsEngine {
    /// 创建返回指定音频的 FakeTtsEngine
    pub fn new(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data,
            sample_rate: 22050,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// synthesize 被调用的次数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 最近一次收到的合成请求
    pub fn last_request(&self) -> Option<SynthesizeRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl TtsEnginePort for FakeTtsEngine {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesizeResponse, TtsError> {
        tracing::debug!(
            text_len = request.text.len(),
            speaker_wav_size = request.speaker_wav.len(),
            "FakeTtsEngine: returning fixed audio"
        );

        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);

        Ok(SynthesizeResponse {
            audio_data: self.audio_data.clone(),
            duration_ms: Some(self.audio_data.len() as u64 / 32),
            sample_rate: Some(self.sample_rate),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
