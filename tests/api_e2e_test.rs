// ==========================================
// API 层端到端测试
// ==========================================
// 测试目标: 三个业务接口的请求校验、引擎编排与响应组装
// 契约: 校验先行, 失败不产生部分结果; "无数据"不走错误通道
// ==========================================

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use kitchen_ops_analytics::api::forecast_api::{ForecastApi, ForecastRequest};
use kitchen_ops_analytics::api::haccp_api::{HaccpApi, ReportingPeriod, UnitWindow};
use kitchen_ops_analytics::api::scaling_api::{ScaleRecipeRequest, ScalingApi};
use kitchen_ops_analytics::config::PaxDefaults;
use kitchen_ops_analytics::domain::types::{Meal, Recommendation, Unit};
use kitchen_ops_analytics::domain::{Ingredient, Recipe, SafeRange, TemperatureReading};
use kitchen_ops_analytics::ApiError;

// ==========================================
// 测试辅助函数
// ==========================================

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn reading(unit_id: &str, day: u32, hour: u32, temperature: f64) -> TemperatureReading {
    TemperatureReading {
        unit_id: unit_id.to_string(),
        temperature,
        timestamp: at(day, hour),
    }
}

fn gulasch_recipe() -> Recipe {
    Recipe {
        id: 7,
        name: "Rindergulasch".to_string(),
        category: Some("Hauptgericht".to_string()),
        servings: 4,
        ingredients: vec![
            Ingredient {
                name: "Rindfleisch".to_string(),
                quantity: 500.0,
                unit: Unit::G,
            },
            Ingredient {
                name: "Paprikapulver".to_string(),
                quantity: 10.0,
                unit: Unit::G,
            },
        ],
    }
}

// ==========================================
// 配方缩放接口
// ==========================================

#[test]
fn test_scale_recipe_end_to_end() {
    let api = ScalingApi::new();
    let recipe = gulasch_recipe();
    let request = ScaleRecipeRequest {
        recipe_id: 7,
        target_servings: 8,
    };

    let response = api.scale_recipe(&recipe, &request).unwrap();
    assert_eq!(response.recipe.id, 7);
    assert_eq!(response.original_servings, 4);
    assert_eq!(response.target_servings, 8);
    assert_eq!(response.scaled_ingredients.len(), 2);

    // 标准食材线性: 500g × 2
    assert_eq!(response.scaled_ingredients[0].scaled_quantity, 1000.0);
    // 香料阻尼: 10g × (0.7*sqrt(2) + 0.3*2) = 15.9g
    assert_eq!(response.scaled_ingredients[1].scaled_quantity, 15.9);
    assert!(!response.scaled_ingredients[1].note.is_empty());
}

#[test]
fn test_scale_recipe_rejects_before_computing() {
    let api = ScalingApi::new();
    let recipe = gulasch_recipe();
    let request = ScaleRecipeRequest {
        recipe_id: 7,
        target_servings: 0,
    };
    assert!(matches!(
        api.scale_recipe(&recipe, &request),
        Err(ApiError::InvalidInput(_))
    ));
}

#[test]
fn test_scale_recipe_id_mismatch_is_not_found() {
    let api = ScalingApi::new();
    let recipe = gulasch_recipe();
    let request = ScaleRecipeRequest {
        recipe_id: 99,
        target_servings: 8,
    };
    assert!(matches!(
        api.scale_recipe(&recipe, &request),
        Err(ApiError::NotFound(_))
    ));
}

// ==========================================
// HACCP 报告接口
// ==========================================

#[test]
fn test_haccp_report_two_units() {
    let api = HaccpApi::new();
    let period = ReportingPeriod {
        start: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        end: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
    };
    let range = SafeRange { min: 2.0, max: 8.0 };

    // K-01: 两日各三次检查, 读数平稳
    let healthy = UnitWindow {
        unit_id: "K-01".to_string(),
        safe_range: range,
        readings: vec![
            reading("K-01", 2, 7, 5.0),
            reading("K-01", 2, 13, 4.8),
            reading("K-01", 2, 19, 5.1),
            reading("K-01", 3, 7, 4.9),
            reading("K-01", 3, 13, 5.0),
            reading("K-01", 3, 19, 4.8),
        ],
    };
    // K-02: 第一日晚间越界 10.5°C
    let faulty = UnitWindow {
        unit_id: "K-02".to_string(),
        safe_range: range,
        readings: vec![
            reading("K-02", 2, 7, 5.0),
            reading("K-02", 2, 13, 5.2),
            reading("K-02", 2, 19, 10.5),
            reading("K-02", 3, 7, 5.1),
            reading("K-02", 3, 13, 4.9),
            reading("K-02", 3, 19, 5.0),
        ],
    };

    let response = api.analyze(&[healthy, faulty], &period).unwrap();
    assert_eq!(response.units.len(), 2);

    let k01 = &response.units[0];
    assert!(k01.anomalies.is_empty());
    assert_eq!(k01.report.health_score, 100);
    assert_eq!(k01.report.recommendation, Recommendation::Excellent);
    assert!(k01.gaps.is_empty());

    // K-02: 1 次越界 (CRITICAL) + 升/降各一个趋势 (WARNING)
    let k02 = &response.units[1];
    assert_eq!(k02.report.health_score, 80);
    assert_eq!(k02.report.recommendation, Recommendation::Good);
    assert_eq!(k02.report.checks_critical, 1);
    assert_eq!(k02.report.checks_warning, 2);
    assert_eq!(k02.report.compliance_percent, 50.0);

    // 机群汇总: 12 次检查, 9 次合格
    assert_eq!(response.fleet.unit_count, 2);
    assert_eq!(response.fleet.checks_total, 12);
    assert_eq!(response.fleet.checks_ok, 9);
    assert_eq!(response.fleet.compliance_percent, 75.0);
    assert_eq!(response.fleet.critical, 1);
    assert_eq!(response.fleet.warning, 2);
    assert_eq!(response.fleet.info, 0);
}

#[test]
fn test_haccp_readings_outside_period_are_ignored() {
    let api = HaccpApi::new();
    let period = ReportingPeriod {
        start: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        end: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    };
    let unit = UnitWindow {
        unit_id: "K-01".to_string(),
        safe_range: SafeRange { min: 2.0, max: 8.0 },
        readings: vec![
            // 报告期前一日的越界读数不得影响报告
            reading("K-01", 1, 12, 12.0),
            reading("K-01", 2, 7, 5.0),
            reading("K-01", 2, 13, 5.1),
        ],
    };
    let response = api.analyze(&[unit], &period).unwrap();
    assert!(response.units[0].anomalies.is_empty());
    assert_eq!(response.units[0].report.checks_total, 2);
}

#[test]
fn test_haccp_rejects_inverted_period() {
    let api = HaccpApi::new();
    let period = ReportingPeriod {
        start: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
        end: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    };
    assert!(matches!(
        api.analyze(&[], &period),
        Err(ApiError::InvalidInput(_))
    ));
}

// ==========================================
// 客流预测接口
// ==========================================

fn pax_defaults() -> PaxDefaults {
    let mut by_location = HashMap::new();
    by_location.insert("city".to_string(), 120.0);
    PaxDefaults::new(by_location, 60.0)
}

fn lunch_request(target: NaiveDate) -> ForecastRequest {
    ForecastRequest {
        location_id: "city".to_string(),
        meal: Meal::Lunch,
        target_date: target,
    }
}

#[test]
fn test_forecast_with_history_does_not_fall_back() {
    let api = ForecastApi::new(pax_defaults());
    let history = vec![kitchen_ops_analytics::PaxObservation {
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        meal: Meal::Lunch,
        location_id: "city".to_string(),
        adults: 100,
        children: 0,
    }];
    let request = lunch_request(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());

    let response = api.forecast_pax(&history, &request, &[], &[]).unwrap();
    assert!(!response.fallback_used);
    // avg_4week = dow_avg = 100 → 100*0.6 + 100*0.4
    assert_eq!(response.result.predicted, 100.0);
    // 单点历史启发式: σ = 100*0.2 → [70, 130]
    assert_eq!(response.result.lower, 70.0);
    assert_eq!(response.result.upper, 130.0);
    assert_eq!(response.result.mape, None);
}

#[test]
fn test_forecast_falls_back_to_configured_default() {
    let api = ForecastApi::new(pax_defaults());
    let request = lunch_request(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());

    let response = api.forecast_pax(&[], &request, &[], &[]).unwrap();
    assert!(response.fallback_used);
    assert_eq!(response.result.predicted, 120.0);
    assert_eq!(response.result.lower, 120.0);
    assert_eq!(response.result.upper, 120.0);
    assert_eq!(response.signals.avg_4week, 0.0);
}

#[test]
fn test_forecast_reports_mape_when_log_given() {
    let api = ForecastApi::new(pax_defaults());
    let request = lunch_request(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());

    let response = api
        .forecast_pax(&[], &request, &[100.0], &[90.0])
        .unwrap();
    assert_eq!(response.result.mape, Some(10.0));
}

#[test]
fn test_forecast_validation_errors() {
    let api = ForecastApi::new(pax_defaults());
    let mut request = lunch_request(NaiveDate::from_ymd_opt(2025, 3, 17).unwrap());

    // 实际值与预测值序列长度不一致
    assert!(matches!(
        api.forecast_pax(&[], &request, &[100.0, 95.0], &[90.0]),
        Err(ApiError::InvalidInput(_))
    ));

    // 空门店标识
    request.location_id = "  ".to_string();
    assert!(matches!(
        api.forecast_pax(&[], &request, &[], &[]),
        Err(ApiError::InvalidInput(_))
    ));
}
