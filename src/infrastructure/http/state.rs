//! Application State
//!
//! 模型会话在 main 中建立一次后注入，Handler 只读复用

use std::sync::Arc;

use crate::application::{RunJobHandler, TtsEnginePort};

/// 应用状态
pub struct AppState {
    pub engine: Arc<dyn TtsEnginePort>,
    pub run_job_handler: RunJobHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(engine: Arc<dyn TtsEnginePort>) -> Self {
        Self {
            run_job_handler: RunJobHandler::new(engine.clone()),
            engine,
        }
    }
}
