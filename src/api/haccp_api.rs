// ==========================================
// 厨房运营预测分析套件 - HACCP 报告 API
// ==========================================
// 输入: 日期范围 + 单元列表 (各带安全区间与读数)
// 输出: 每单元 ComplianceReport + 原始 Anomaly 列表
//       + 缺失检查清单 + 全机群严重度汇总
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::ApiResult;
use crate::api::validator;
use crate::config::HaccpConfig;
use crate::domain::haccp::{
    Anomaly, CheckGap, ComplianceReport, FleetSummary, SafeRange, TemperatureReading,
};
use crate::engine::anomaly::TemperatureAnomalyDetector;
use crate::engine::compliance::ComplianceScorer;

/// 报告期 (边界含入)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportingPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// 单个冷藏单元的评估输入
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitWindow {
    pub unit_id: String,
    pub safe_range: SafeRange,
    pub readings: Vec<TemperatureReading>,
}

/// 单个单元的报告 (汇总 + 原始异常 + 缺口)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitComplianceReport {
    pub report: ComplianceReport,
    pub anomalies: Vec<Anomaly>,
    pub gaps: Vec<CheckGap>,
}

/// 报告响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HaccpReportResponse {
    pub units: Vec<UnitComplianceReport>,
    pub fleet: FleetSummary,
}

// ==========================================
// HaccpApi - 冷藏合规报告接口
// ==========================================
pub struct HaccpApi {
    detector: TemperatureAnomalyDetector,
    scorer: ComplianceScorer,
}

impl HaccpApi {
    pub fn new() -> Self {
        Self::with_config(HaccpConfig::default())
    }

    pub fn with_config(config: HaccpConfig) -> Self {
        Self {
            detector: TemperatureAnomalyDetector::with_config(config),
            scorer: ComplianceScorer::with_checks_per_day(config.checks_per_day),
        }
    }

    /// 对给定报告期与单元列表生成合规报告
    ///
    /// 读数在进入引擎前按时间排序并裁剪到报告期内
    /// (引擎契约要求时间升序)
    pub fn analyze(
        &self,
        units: &[UnitWindow],
        period: &ReportingPeriod,
    ) -> ApiResult<HaccpReportResponse> {
        validator::validate_period(period.start, period.end)?;

        let checks_expected = self.scorer.expected_checks(period.start, period.end);
        let mut unit_reports = Vec::with_capacity(units.len());
        let mut all_anomalies: Vec<Anomaly> = Vec::new();

        for unit in units {
            // 引擎前置条件: 时间升序 + 报告期内
            let mut readings: Vec<TemperatureReading> = unit
                .readings
                .iter()
                .filter(|r| {
                    let date = r.timestamp.date();
                    date >= period.start && date <= period.end
                })
                .cloned()
                .collect();
            readings.sort_by_key(|r| r.timestamp);

            let anomalies = self.detector.detect(&readings, &unit.safe_range);
            let report = self.scorer.score_unit(
                &unit.unit_id,
                &anomalies,
                checks_expected,
                readings.len() as u32,
            );
            let gaps = self
                .scorer
                .check_gaps(&unit.unit_id, &readings, period.start, period.end);

            all_anomalies.extend(anomalies.iter().cloned());
            unit_reports.push(UnitComplianceReport {
                report,
                anomalies,
                gaps,
            });
        }

        let reports: Vec<ComplianceReport> =
            unit_reports.iter().map(|u| u.report.clone()).collect();
        let fleet = self.scorer.fleet_summary(&reports, &all_anomalies);

        info!(
            units = units.len(),
            anomalies = all_anomalies.len(),
            fleet_compliance = fleet.compliance_percent,
            "HACCP 报告生成完成"
        );

        Ok(HaccpReportResponse {
            units: unit_reports,
            fleet,
        })
    }
}

impl Default for HaccpApi {
    fn default() -> Self {
        Self::new()
    }
}
