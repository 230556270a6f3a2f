// ==========================================
// 厨房运营预测分析套件 - API 层
// ==========================================
// 职责: 请求/响应边界 (由外部 HTTP 层调用)
// 校验先行: 任何计算前完成入参校验
// 本层不含 HTTP / 持久化, 只做校验 + 引擎编排 + 响应组装
// ==========================================

pub mod error;
pub mod forecast_api;
pub mod haccp_api;
pub mod scaling_api;
pub mod validator;

pub use error::{ApiError, ApiResult};
pub use forecast_api::{ForecastApi, ForecastRequest, ForecastResponse};
pub use haccp_api::{
    HaccpApi, HaccpReportResponse, ReportingPeriod, UnitComplianceReport, UnitWindow,
};
pub use scaling_api::{RecipeSummary, ScaleRecipeRequest, ScaleRecipeResponse, ScalingApi};
