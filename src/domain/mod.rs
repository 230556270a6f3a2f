// ==========================================
// 厨房运营预测分析套件 - 领域层
// ==========================================
// 职责: 实体与封闭枚举定义
// 所有边界类型均可 JSON 序列化 (serde)
// ==========================================

pub mod haccp;
pub mod pax;
pub mod recipe;
pub mod types;

// 重导出领域实体
pub use haccp::{
    Anomaly, CheckGap, ComplianceReport, FleetSummary, SafeRange, TemperatureReading,
    TemperatureStats,
};
pub use pax::{ConfidenceInterval, ForecastResult, ForecastSignals, PaxObservation};
pub use recipe::{Ingredient, Recipe, ScaledIngredient};
