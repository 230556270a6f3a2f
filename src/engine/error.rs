// ==========================================
// 厨房运营预测分析套件 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: "无数据"不是错误 (空历史 → 无事可报 / 预测 0),
// 引擎唯一的失败形态是入参校验
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("无效的目标份数: {0} (必须 > 0)")]
    InvalidTargetServings(i32),

    #[error("无效的参考份数: {0} (必须 > 0)")]
    InvalidReferenceServings(u32),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
