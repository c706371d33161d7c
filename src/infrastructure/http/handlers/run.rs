//! Run Handler - 任务入口
//!
//! Host Runtime 每投递一个 Job 调用一次；
//! 响应体即任务结果（成功或结构化错误），
//! 未恢复的失败以 HTTP 错误状态呈现（见 error.rs）

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{JobInput, RunJobCommand};
use crate::infrastructure::http::dto::{JobRequest, JobResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

pub async fn run_job(
    State(state): State<Arc<AppState>>,
    Json(req): Json<JobRequest>,
) -> Result<Json<JobResponse>, ApiError> {
    let cmd = RunJobCommand {
        job_id: req.id,
        input: JobInput {
            text: req.input.text,
            speaker_wav_base64: req.input.speaker_wav_base64,
        },
    };

    let result = state.run_job_handler.handle(cmd).await?;

    Ok(Json(result.into()))
}
