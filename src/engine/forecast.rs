// ==========================================
// 厨房运营预测分析套件 - 客流 (PAX) 预测引擎
// ==========================================
// 职责: 三路信号自适应加权混合预测 + 置信区间 + MAPE 诊断
// 信号: 近 4 周移动平均 / 同星期几平均 / 去年同 ISO 周平均
// 基础权重 0.5 / 0.3 / 0.2; 信号缺失时按固定表重分配,
// 权重之和恒为 1.0 (至少一路信号存在时)
// ==========================================
// 哨兵口径: 信号值 0 表示"无数据", 与"观测到 0 位客人"
// 同值。该二义性为历史口径, 本核心原样保留, 不做消解
// ==========================================

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::domain::pax::{ConfidenceInterval, ForecastResult, ForecastSignals, PaxObservation};
use crate::domain::types::Meal;
use crate::numeric::{round1, round2};

/// 近期移动平均的回看天数 (4 周)
const MOVING_AVERAGE_DAYS: i64 = 28;

// ==========================================
// ForecastEngine - 客流预测引擎
// ==========================================
pub struct ForecastEngine {
    // 无状态引擎, 不需要注入依赖
}

impl ForecastEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 三路信号混合预测
    ///
    /// 权重重分配表 (0 = 信号缺失):
    /// - 三路齐备:              0.5 / 0.3 / 0.2
    /// - 缺 avg_4week:          dow 0.6 / seasonal 0.4
    /// - 缺 avg_4week+seasonal: dow 1.0
    /// - 缺 dow_avg:            avg 0.7 / seasonal 0.3
    /// - 缺 dow_avg+avg_4week:  seasonal 1.0
    /// - 缺 seasonal:           avg 0.6 / dow 0.4
    /// - 全缺:                  0
    pub fn calculate_forecast(&self, avg_4week: f64, dow_avg: f64, seasonal: f64) -> f64 {
        let predicted = match (avg_4week > 0.0, dow_avg > 0.0, seasonal > 0.0) {
            (true, true, true) => avg_4week * 0.5 + dow_avg * 0.3 + seasonal * 0.2,
            (true, true, false) => avg_4week * 0.6 + dow_avg * 0.4,
            (true, false, true) => avg_4week * 0.7 + seasonal * 0.3,
            (true, false, false) => avg_4week,
            (false, true, true) => dow_avg * 0.6 + seasonal * 0.4,
            (false, true, false) => dow_avg,
            (false, false, true) => seasonal,
            (false, false, false) => 0.0,
        };
        round2(predicted)
    }

    /// 从信号结构体预测 (便捷入口)
    pub fn forecast_from_signals(&self, signals: &ForecastSignals) -> f64 {
        self.calculate_forecast(signals.avg_4week, signals.dow_avg, signals.seasonal)
    }

    /// 置信区间
    ///
    /// - 历史值 >= 2 条: 总体标准差
    /// - 恰好 1 条: stddev = predicted * 0.2 (单点无法估计方差的启发式)
    /// - 0 条: stddev = 0 (区间退化为点)
    ///
    /// 区间 = [max(0, predicted - 1.5σ), predicted + 1.5σ]
    pub fn confidence_interval(
        &self,
        predicted: f64,
        historical_values: &[f64],
    ) -> ConfidenceInterval {
        let std_dev = match historical_values.len() {
            0 => 0.0,
            1 => predicted * 0.2,
            _ => population_std_dev(historical_values),
        };
        ConfidenceInterval {
            lower: round2((predicted - 1.5 * std_dev).max(0.0)),
            upper: round2(predicted + 1.5 * std_dev),
        }
    }

    /// 平均绝对百分比误差 (MAPE)
    ///
    /// actual = 0 的条目排除在外 (避免除零, 不计 0% 也不计 100%);
    /// 全部排除时 MAPE = 0。结果舍入到 1 位小数
    pub fn calculate_mape(&self, actuals: &[f64], predictions: &[f64]) -> f64 {
        let mut sum = 0.0;
        let mut count = 0u32;
        for (actual, predicted) in actuals.iter().zip(predictions.iter()) {
            if *actual != 0.0 {
                sum += (actual - predicted).abs() / actual.abs() * 100.0;
                count += 1;
            }
        }
        if count == 0 {
            return 0.0;
        }
        round1(sum / f64::from(count))
    }

    /// 完整预测: 混合 + 区间
    ///
    /// 全信号缺失 → 预测 0, 无区间 ([0,0]); MAPE 由调用方按
    /// 历史预测记录另行补充
    pub fn forecast(
        &self,
        signals: &ForecastSignals,
        historical_values: &[f64],
    ) -> ForecastResult {
        let predicted = self.forecast_from_signals(signals);
        let interval = if predicted > 0.0 {
            self.confidence_interval(predicted, historical_values)
        } else {
            ConfidenceInterval {
                lower: 0.0,
                upper: 0.0,
            }
        };
        debug!(predicted, interval.lower, interval.upper, "客流预测");
        ForecastResult {
            predicted,
            lower: interval.lower,
            upper: interval.upper,
            mape: None,
        }
    }

    // ==========================================
    // 信号派生 (从原始观测)
    // ==========================================

    /// 从历史观测派生三路信号
    ///
    /// 仅统计同门店同餐段、早于目标日期的观测;
    /// 某路无观测 → 0 (哨兵)
    ///
    /// # 参数
    /// - `history`: 历史客流观测
    /// - `location_id`: 门店
    /// - `meal`: 餐段
    /// - `target_date`: 预测目标日期
    pub fn build_signals(
        &self,
        history: &[PaxObservation],
        location_id: &str,
        meal: Meal,
        target_date: NaiveDate,
    ) -> ForecastSignals {
        let relevant: Vec<&PaxObservation> = history
            .iter()
            .filter(|o| o.location_id == location_id && o.meal == meal && o.date < target_date)
            .collect();

        // 近 4 周同餐段移动平均
        let avg_4week = mean_of(
            relevant
                .iter()
                .filter(|o| (target_date - o.date).num_days() <= MOVING_AVERAGE_DAYS)
                .map(|o| o.total()),
        );

        // 同星期几平均
        let dow_avg = mean_of(
            relevant
                .iter()
                .filter(|o| o.date.weekday() == target_date.weekday())
                .map(|o| o.total()),
        );

        // 去年同 ISO 周平均
        let target_week = target_date.iso_week();
        let seasonal = mean_of(
            relevant
                .iter()
                .filter(|o| {
                    let week = o.date.iso_week();
                    week.week() == target_week.week() && week.year() == target_week.year() - 1
                })
                .map(|o| o.total()),
        );

        ForecastSignals {
            avg_4week,
            dow_avg,
            seasonal,
        }
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 均值, 空输入 → 0 (哨兵)
fn mean_of(values: impl Iterator<Item = f64>) -> f64 {
    let collected: Vec<f64> = values.collect();
    if collected.is_empty() {
        return 0.0;
    }
    round2(collected.iter().sum::<f64>() / collected.len() as f64)
}

/// 总体标准差 (除数 n)
fn population_std_dev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
