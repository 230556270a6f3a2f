// ==========================================
// 厨房运营预测分析套件 - API 层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 职责: 将引擎错误转换为调用方可见的错误消息
// 唯一的调用方可见失败形态是入参校验 (如目标份数 <= 0);
// "无数据"不走错误通道
// ==========================================

use thiserror::Error;

use crate::engine::error::EngineError;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// API 层结果类型
pub type ApiResult<T> = Result<T, ApiError>;
