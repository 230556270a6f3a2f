// ==========================================
// ComplianceScorer 引擎集成测试
// ==========================================
// 测试目标: 健康分有界性、建议阈值、缺口清单、机群汇总
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use kitchen_ops_analytics::domain::types::{AnomalyType, Recommendation, Severity};
use kitchen_ops_analytics::domain::{Anomaly, TemperatureReading};
use kitchen_ops_analytics::engine::ComplianceScorer;
use uuid::Uuid;

// ==========================================
// 测试辅助函数
// ==========================================

fn ts(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

fn anomaly(unit_id: &str, anomaly_type: AnomalyType, severity: Severity) -> Anomaly {
    Anomaly {
        anomaly_id: Uuid::new_v4().to_string(),
        unit_id: unit_id.to_string(),
        anomaly_type,
        severity,
        timestamp: ts(2, 8),
        detail: "{}".to_string(),
    }
}

fn reading(unit_id: &str, day: u32, hour: u32) -> TemperatureReading {
    TemperatureReading {
        unit_id: unit_id.to_string(),
        temperature: 5.0,
        timestamp: ts(day, hour),
    }
}

#[test]
fn test_health_score_formula_and_clamp() {
    let scorer = ComplianceScorer::new();

    // 100 - 10*2 - 5*3 - 2*1 = 63
    let mut anomalies = vec![
        anomaly("K-01", AnomalyType::OutOfRange, Severity::Critical),
        anomaly("K-01", AnomalyType::OutOfRange, Severity::Critical),
        anomaly("K-01", AnomalyType::Trend, Severity::Warning),
        anomaly("K-01", AnomalyType::Gap, Severity::Warning),
        anomaly("K-01", AnomalyType::Spike, Severity::Warning),
        anomaly("K-01", AnomalyType::StuckSensor, Severity::Info),
    ];
    let report = scorer.score_unit("K-01", &anomalies, 14, 14);
    assert_eq!(report.health_score, 63);
    assert_eq!(report.recommendation, Recommendation::NeedsImprovement);

    // 15 条 CRITICAL → 截断到 0, 不为负
    anomalies = (0..15)
        .map(|_| anomaly("K-01", AnomalyType::OutOfRange, Severity::Critical))
        .collect();
    let clamped = scorer.score_unit("K-01", &anomalies, 14, 14);
    assert_eq!(clamped.health_score, 0);
}

#[test]
fn test_recommendation_boundaries() {
    let scorer = ComplianceScorer::new();

    // 健康分 90 (WARNING x2) → Excellent
    let two_warnings = vec![
        anomaly("K-01", AnomalyType::Gap, Severity::Warning),
        anomaly("K-01", AnomalyType::Gap, Severity::Warning),
    ];
    assert_eq!(
        scorer.score_unit("K-01", &two_warnings, 14, 14).recommendation,
        Recommendation::Excellent
    );

    // 健康分 88 (CRITICAL + INFO) → Good
    let mixed = vec![
        anomaly("K-01", AnomalyType::OutOfRange, Severity::Critical),
        anomaly("K-01", AnomalyType::StuckSensor, Severity::Info),
    ];
    assert_eq!(
        scorer.score_unit("K-01", &mixed, 14, 14).recommendation,
        Recommendation::Good
    );
}

#[test]
fn test_gap_list_enumerates_missing_checks() {
    let scorer = ComplianceScorer::new();
    // 报告期 6/2 - 6/4, 节奏 2 次/日:
    // 6/2 早晚全检, 6/3 仅一次, 6/4 未检
    let readings = vec![
        reading("K-01", 2, 7),
        reading("K-01", 2, 19),
        reading("K-01", 3, 7),
    ];
    let gaps = scorer.check_gaps(
        "K-01",
        &readings,
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        NaiveDate::from_ymd_opt(2025, 6, 4).unwrap(),
    );

    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
    assert_eq!(gaps[0].actual, 1);
    assert_eq!(gaps[0].missing, 1);
    assert_eq!(gaps[1].date, NaiveDate::from_ymd_opt(2025, 6, 4).unwrap());
    assert_eq!(gaps[1].actual, 0);
    assert_eq!(gaps[1].missing, 2);
}

#[test]
fn test_fleet_summary_breakdown() {
    let scorer = ComplianceScorer::new();
    let anomalies = vec![
        anomaly("K-01", AnomalyType::OutOfRange, Severity::Critical),
        anomaly("K-02", AnomalyType::Spike, Severity::Warning),
        anomaly("K-02", AnomalyType::Trend, Severity::Warning),
        anomaly("K-03", AnomalyType::StuckSensor, Severity::Info),
    ];
    let reports = vec![
        scorer.score_unit("K-01", &anomalies[..1], 14, 14),
        scorer.score_unit("K-02", &anomalies[1..3], 14, 14),
        scorer.score_unit("K-03", &anomalies[3..], 14, 14),
    ];
    let fleet = scorer.fleet_summary(&reports, &anomalies);

    assert_eq!(fleet.unit_count, 3);
    assert_eq!(fleet.critical, 1);
    assert_eq!(fleet.warning, 2);
    assert_eq!(fleet.info, 1);
    assert_eq!(fleet.checks_total, 42);
}

#[test]
fn test_recommendation_label_is_localized() {
    let scorer = ComplianceScorer::new();
    let report = scorer.score_unit("K-01", &[], 14, 14);
    assert_ne!(report.recommendation_label, report.recommendation.label_key());
}

#[test]
fn test_no_expected_checks_is_not_a_failure() {
    let scorer = ComplianceScorer::new();
    let report = scorer.score_unit("K-99", &[], 0, 0);
    assert_eq!(report.compliance_percent, 100.0);
    assert_eq!(report.health_score, 100);
    assert_eq!(report.recommendation, Recommendation::Excellent);
}
