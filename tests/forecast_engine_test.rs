// ==========================================
// ForecastEngine 引擎集成测试
// ==========================================
// 测试目标: 从原始观测到完整预测结果的端到端路径
// 覆盖范围: 信号派生 + 混合 + 区间 + MAPE 组合行为
// ==========================================

use chrono::NaiveDate;
use kitchen_ops_analytics::domain::types::Meal;
use kitchen_ops_analytics::domain::PaxObservation;
use kitchen_ops_analytics::engine::ForecastEngine;

// ==========================================
// 测试辅助函数
// ==========================================

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn obs(location_id: &str, meal: Meal, d: NaiveDate, adults: u32, children: u32) -> PaxObservation {
    PaxObservation {
        date: d,
        meal,
        location_id: location_id.to_string(),
        adults,
        children,
    }
}

/// 目标日前四个周一的稳定午餐观测
fn four_stable_mondays(total: u32) -> Vec<PaxObservation> {
    [date(2025, 3, 10), date(2025, 3, 3), date(2025, 2, 24), date(2025, 2, 17)]
        .into_iter()
        .map(|d| obs("city", Meal::Lunch, d, total, 0))
        .collect()
}

#[test]
fn test_stable_history_predicts_the_plateau() {
    // 四个周一均为 120 人, 无去年数据
    // avg_4week = dow_avg = 120, seasonal = 0
    // → 120*0.6 + 120*0.4 = 120
    let engine = ForecastEngine::new();
    let history = four_stable_mondays(120);
    let target = date(2025, 3, 17);

    let signals = engine.build_signals(&history, "city", Meal::Lunch, target);
    assert_eq!(signals.avg_4week, 120.0);
    assert_eq!(signals.dow_avg, 120.0);
    assert_eq!(signals.seasonal, 0.0);

    let totals: Vec<f64> = history.iter().map(|o| o.total()).collect();
    let result = engine.forecast(&signals, &totals);
    assert_eq!(result.predicted, 120.0);
    // 历史零方差 → 区间退化为点
    assert_eq!(result.lower, 120.0);
    assert_eq!(result.upper, 120.0);
}

#[test]
fn test_seasonal_signal_pulls_prediction() {
    // 近期四个周一 100 人, 去年同 ISO 周的周一 200 人
    // avg_4week = 100, dow_avg = (4*100+200)/5 = 120, seasonal = 200
    // → 100*0.5 + 120*0.3 + 200*0.2 = 126
    let engine = ForecastEngine::new();
    let mut history = four_stable_mondays(100);
    // 2025-03-17 为第 12 ISO 周; 2024-03-18 同为第 12 周
    history.push(obs("city", Meal::Lunch, date(2024, 3, 18), 200, 0));
    let target = date(2025, 3, 17);

    let signals = engine.build_signals(&history, "city", Meal::Lunch, target);
    assert_eq!(signals.avg_4week, 100.0);
    assert_eq!(signals.dow_avg, 120.0);
    assert_eq!(signals.seasonal, 200.0);
    assert_eq!(engine.forecast_from_signals(&signals), 126.0);
}

#[test]
fn test_children_count_toward_total_pax() {
    let engine = ForecastEngine::new();
    let history = vec![obs("city", Meal::Dinner, date(2025, 3, 10), 80, 20)];
    let signals = engine.build_signals(&history, "city", Meal::Dinner, date(2025, 3, 17));
    // 总客流 = 成人 + 儿童
    assert_eq!(signals.avg_4week, 100.0);
    assert_eq!(signals.dow_avg, 100.0);
}

#[test]
fn test_interval_widens_with_volatile_history() {
    let engine = ForecastEngine::new();
    let calm = engine.confidence_interval(100.0, &[98.0, 100.0, 102.0]);
    let volatile = engine.confidence_interval(100.0, &[40.0, 100.0, 160.0]);
    assert!(volatile.upper - volatile.lower > calm.upper - calm.lower);
    assert!(volatile.lower >= 0.0);
}

#[test]
fn test_mape_over_forecast_log() {
    let engine = ForecastEngine::new();
    // 周记录: 实际 vs 当时预测
    let actuals = [110.0, 95.0, 0.0, 120.0];
    let predictions = [100.0, 100.0, 80.0, 110.0];
    // (9.0909% + 5.2632% + 8.3333%) / 3 = 7.5624... → 7.6
    assert_eq!(engine.calculate_mape(&actuals, &predictions), 7.6);
}

#[test]
fn test_no_history_yields_zero_forecast() {
    let engine = ForecastEngine::new();
    let signals = engine.build_signals(&[], "neueroeffnung", Meal::Lunch, date(2025, 3, 17));
    let result = engine.forecast(&signals, &[]);
    assert_eq!(result.predicted, 0.0);
    assert_eq!(result.lower, 0.0);
    assert_eq!(result.upper, 0.0);
    assert_eq!(result.mape, None);
}
