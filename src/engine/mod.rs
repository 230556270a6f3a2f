// ==========================================
// 厨房运营预测分析套件 - 引擎层
// ==========================================
// 职责: 三个互相独立的纯计算引擎 + 食材分类器
// 红线: 引擎无 I/O 无状态, 所有判定必须可解释
// (缩放输出 note, 异常输出 detail JSON)
// ==========================================

pub mod anomaly;
pub mod classifier;
pub mod compliance;
pub mod error;
pub mod forecast;
pub mod scaling;

// 重导出核心引擎
pub use anomaly::{calculate_stats, temperature_status, TemperatureAnomalyDetector};
pub use classifier::IngredientClassifier;
pub use compliance::ComplianceScorer;
pub use error::EngineError;
pub use forecast::ForecastEngine;
pub use scaling::ScalingEngine;
