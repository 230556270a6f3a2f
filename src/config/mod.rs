// ==========================================
// 厨房运营预测分析套件 - 配置层
// ==========================================
// 职责: 注入式配置结构
// 红线: 引擎不读全局表, 所有可调参数经配置注入
// ==========================================

pub mod haccp_config;
pub mod pax_defaults;
pub mod scaling_profile;

pub use haccp_config::HaccpConfig;
pub use pax_defaults::PaxDefaults;
pub use scaling_profile::{ScalingProfile, ScalingWeights};
