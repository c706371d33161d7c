//! HTTP TTS Engine - 调用同机部署的 TTS 引擎进程
//!
//! 实现 TtsEnginePort trait，通过 HTTP 驱动引擎进程
//!
//! 引擎 API:
//! POST {base}/api/model/load   Request: {"use_gpu": bool}  (JSON)，建立会话时调用一次
//! POST {base}/api/tts/infer    Request: {"text": "...", "speaker_wav_base64": "..."}  (JSON)
//!                              Response: audio/wav binary, metadata in headers

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{SynthesizeRequest, SynthesizeResponse, TtsEnginePort, TtsError};

/// 模型加载请求体 (JSON)
#[derive(Debug, Serialize)]
struct LoadModelRequest {
    /// 是否启用 GPU 加速
    use_gpu: bool,
}

/// 合成请求体 (JSON)
///
/// 音频以 base64 文本过线，引擎侧自行解码
#[derive(Debug, Serialize)]
struct InferHttpRequest {
    /// 要合成的文本
    text: String,
    /// 参考音频（base64）
    speaker_wav_base64: String,
}

/// HTTP TTS Engine 配置
#[derive(Debug, Clone)]
pub struct HttpTtsEngineConfig {
    /// 引擎服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 是否启用 GPU 加速（模型加载时生效）
    pub use_gpu: bool,
}

impl Default for HttpTtsEngineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 120,
            use_gpu: true,
        }
    }
}

impl HttpTtsEngineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_gpu(mut self, use_gpu: bool) -> Self {
        self.use_gpu = use_gpu;
        self
    }
}

/// HTTP TTS Engine
///
/// 模型会话的生产实现。`connect` 在进程启动时调用一次，
/// 完成昂贵的模型加载；之后所有任务复用同一会话直到进程退出。
pub struct HttpTtsEngine {
    client: Client,
    config: HttpTtsEngineConfig,
}

impl HttpTtsEngine {
    /// 建立模型会话
    ///
    /// 构建 HTTP 客户端并触发引擎侧的一次性模型加载
    pub async fn connect(config: HttpTtsEngineConfig) -> Result<Self, TtsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TtsError::NetworkError(e.to_string()))?;

        let engine = Self { client, config };
        engine.load_model().await?;
        Ok(engine)
    }

    /// 获取模型加载 URL
    fn load_url(&self) -> String {
        format!("{}/api/model/load", self.config.base_url)
    }

    /// 获取推理 URL
    fn infer_url(&self) -> String {
        format!("{}/api/tts/infer", self.config.base_url)
    }

    /// 获取健康检查 URL
    fn health_url(&self) -> String {
        format!("{}/health", self.config.base_url)
    }

    /// 触发引擎侧模型加载（仅在建立会话时调用一次）
    async fn load_model(&self) -> Result<(), TtsError> {
        tracing::info!(
            url = %self.load_url(),
            use_gpu = self.config.use_gpu,
            "Loading TTS model"
        );

        let response = self
            .client
            .post(&self.load_url())
            .json(&LoadModelRequest {
                use_gpu: self.config.use_gpu,
            })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS engine: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "Model load failed: HTTP {}: {}",
                status, error_text
            )));
        }

        tracing::info!("TTS model loaded");
        Ok(())
    }
}

#[async_trait]
impl TtsEnginePort for HttpTtsEngine {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesizeResponse, TtsError> {
        let http_request = InferHttpRequest {
            text: request.text,
            speaker_wav_base64: STANDARD.encode(&request.speaker_wav),
        };

        tracing::debug!(
            url = %self.infer_url(),
            text_len = http_request.text.len(),
            speaker_wav_size = request.speaker_wav.len(),
            "Sending synthesis request"
        );

        let response = self
            .client
            .post(&self.infer_url())
            .json(&http_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS engine: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        // 从 headers 提取元数据
        let headers = response.headers();
        let duration_ms = headers
            .get("X-TTS-Duration-Ms")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());
        let sample_rate = headers
            .get("X-TTS-Sample-Rate")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok());

        // 直接获取音频字节
        let audio_data = response
            .bytes()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            duration_ms = ?duration_ms,
            sample_rate = ?sample_rate,
            audio_size = audio_data.len(),
            "Engine synthesis completed"
        );

        Ok(SynthesizeResponse {
            audio_data,
            duration_ms,
            sample_rate,
        })
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.health_url())
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
