// ==========================================
// 厨房运营预测分析套件 - 核心库
// ==========================================
// 技术栈: Rust (纯计算核心, 无 I/O)
// 系统定位: 决策支持核心 (配方缩放 / HACCP 合规 / 客流预测)
// 三个引擎互相独立, 均为无状态纯函数, 可并发调用
// ==========================================

// 初始化国际化系统 (面向用户的说明文案, 产品默认德语)
rust_i18n::i18n!("locales", fallback = "de-DE");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 注入式配置 (缩放权重 / HACCP 阈值 / 默认客流)
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口 (入参校验 + 响应组装, 不含 HTTP)
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 数值策略 - 统一舍入规则
pub mod numeric;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    AnomalyType, IngredientCategory, Meal, Recommendation, Severity, TemperatureStatus, Unit,
};

// 领域实体
pub use domain::{
    Anomaly, CheckGap, ComplianceReport, ConfidenceInterval, FleetSummary, ForecastResult,
    ForecastSignals, Ingredient, PaxObservation, Recipe, SafeRange, ScaledIngredient,
    TemperatureReading, TemperatureStats,
};

// 配置
pub use config::{HaccpConfig, PaxDefaults, ScalingProfile, ScalingWeights};

// 引擎
pub use engine::{
    ComplianceScorer, EngineError, ForecastEngine, IngredientClassifier, ScalingEngine,
    TemperatureAnomalyDetector,
};

// API
pub use api::{ApiError, ApiResult, ForecastApi, HaccpApi, ScalingApi};
