// ==========================================
// 厨房运营预测分析套件 - 客流预测 API
// ==========================================
// 输入: 门店/餐段的历史客流行 + 目标日期
// 输出: ForecastResult (+ 历史预测记录足够时的 MAPE 诊断)
// 信号全缺失时回退到注入的默认客流配置 (生产兜底)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::validator;
use crate::config::PaxDefaults;
use crate::domain::pax::{ForecastResult, ForecastSignals, PaxObservation};
use crate::domain::types::Meal;
use crate::engine::forecast::ForecastEngine;

/// 预测请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    pub location_id: String,
    pub meal: Meal,
    pub target_date: NaiveDate,
}

/// 预测响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResponse {
    pub location_id: String,
    pub meal: Meal,
    pub target_date: NaiveDate,
    /// 派生出的三路信号 (0 = 无数据哨兵)
    pub signals: ForecastSignals,
    pub result: ForecastResult,
    /// 信号全缺失时是否使用了配置的默认客流
    pub fallback_used: bool,
}

// ==========================================
// ForecastApi - 客流预测接口
// ==========================================
pub struct ForecastApi {
    engine: ForecastEngine,
    defaults: PaxDefaults,
}

impl ForecastApi {
    pub fn new(defaults: PaxDefaults) -> Self {
        Self {
            engine: ForecastEngine::new(),
            defaults,
        }
    }

    /// 预测目标日期的客流
    ///
    /// # 参数
    /// - `history`: 历史客流观测 (调用方自外部存储取得)
    /// - `request`: 门店/餐段/目标日期
    /// - `past_actuals` / `past_predictions`: 历史实际值与
    ///   当时的预测值 (等长配对), 用于 MAPE 诊断; 为空则不给出
    pub fn forecast_pax(
        &self,
        history: &[PaxObservation],
        request: &ForecastRequest,
        past_actuals: &[f64],
        past_predictions: &[f64],
    ) -> ApiResult<ForecastResponse> {
        validator::validate_location_id(&request.location_id)?;
        validator::validate_paired_series(past_actuals.len(), past_predictions.len())?;

        let signals = self.engine.build_signals(
            history,
            &request.location_id,
            request.meal,
            request.target_date,
        );

        // 置信区间的方差基础: 同门店同餐段的全部历史总客流
        let historical_values: Vec<f64> = history
            .iter()
            .filter(|o| {
                o.location_id == request.location_id
                    && o.meal == request.meal
                    && o.date < request.target_date
            })
            .map(|o| o.total())
            .collect();

        let mut result = self.engine.forecast(&signals, &historical_values);

        // 信号全缺失 → 预测 0; 生产兜底使用注入的默认客流
        let mut fallback_used = false;
        if result.predicted == 0.0 {
            let default_pax = self.defaults.default_for(&request.location_id);
            if default_pax > 0.0 {
                fallback_used = true;
                result.predicted = default_pax;
                result.lower = default_pax;
                result.upper = default_pax;
            }
        }

        if !past_actuals.is_empty() {
            result.mape = Some(self.engine.calculate_mape(past_actuals, past_predictions));
        }

        info!(
            location_id = %request.location_id,
            meal = %request.meal,
            target_date = %request.target_date,
            predicted = result.predicted,
            fallback_used,
            "客流预测完成"
        );

        Ok(ForecastResponse {
            location_id: request.location_id.clone(),
            meal: request.meal,
            target_date: request.target_date,
            signals,
            result,
            fallback_used,
        })
    }
}
