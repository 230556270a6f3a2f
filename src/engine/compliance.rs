// ==========================================
// 厨房运营预测分析套件 - HACCP 合规评分引擎
// ==========================================
// 职责: 将异常列表与检查次数汇总为有界健康分、
// 分类建议、合规百分比与缺失检查清单
// 输入: 异常 + 检查计数 (按单元按报告期)
// 输出: ComplianceReport / CheckGap 清单 / 全机群汇总
// ==========================================
// 健康分: 100 起步, CRITICAL -10 / WARNING -5 / INFO -2,
// 截断到 [0,100]
// 建议阈值: >=90 Excellent / >=75 Good
//          / >=50 Needs improvement / 其余 Critical
// ==========================================

use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::domain::haccp::{Anomaly, CheckGap, ComplianceReport, FleetSummary, TemperatureReading};
use crate::domain::types::{AnomalyType, Recommendation, Severity};
use crate::i18n;
use crate::numeric::round2;

// ==========================================
// ComplianceScorer - 合规评分引擎
// ==========================================
pub struct ComplianceScorer {
    /// 每单元每日强制检查次数 (早 + 晚), 可经配置覆盖
    checks_per_day: u32,
}

impl ComplianceScorer {
    pub fn new() -> Self {
        Self { checks_per_day: 2 }
    }

    pub fn with_checks_per_day(checks_per_day: u32) -> Self {
        Self { checks_per_day }
    }

    /// 单个冷藏单元的合规评分
    ///
    /// # 参数
    /// - `unit_id`: 冷藏单元
    /// - `anomalies`: 本报告期内该单元的检测结果
    /// - `checks_expected`: 报告期应有检查次数
    /// - `checks_actual`: 实际检查次数
    ///
    /// # 返回
    /// ComplianceReport (健康分有界, 永不为负)
    pub fn score_unit(
        &self,
        unit_id: &str,
        anomalies: &[Anomaly],
        checks_expected: u32,
        checks_actual: u32,
    ) -> ComplianceReport {
        let critical = count_severity(anomalies, Severity::Critical);
        let warning = count_severity(anomalies, Severity::Warning);
        let info = count_severity(anomalies, Severity::Info);

        // 健康分: 100 - 10C - 5W - 2I, 截断到 [0,100]
        let penalty = i64::from(critical) * 10 + i64::from(warning) * 5 + i64::from(info) * 2;
        let health_score = (100 - penalty).clamp(0, 100) as u8;
        let recommendation = Recommendation::from_health_score(health_score);

        // 按检查口径拆分: 越界异常逐条对应一次检查,
        // 其余读数级 WARNING 记为警告检查, 余量为合格
        let checks_total = checks_actual;
        let checks_critical = (anomalies
            .iter()
            .filter(|a| a.anomaly_type == AnomalyType::OutOfRange)
            .count() as u32)
            .min(checks_total);
        let checks_warning = (anomalies
            .iter()
            .filter(|a| {
                a.severity == Severity::Warning
                    && matches!(a.anomaly_type, AnomalyType::Trend | AnomalyType::Spike)
            })
            .count() as u32)
            .min(checks_total - checks_critical);
        let checks_ok = checks_total - checks_critical - checks_warning;

        // 无检查要求 → 无可错失, 合规 100%
        let compliance_percent = if checks_total > 0 {
            round2(f64::from(checks_ok) / f64::from(checks_total) * 100.0)
        } else {
            100.0
        };

        if checks_actual < checks_expected {
            warn!(
                unit_id,
                checks_expected, checks_actual, "检查次数不足报告期要求"
            );
        }
        debug!(unit_id, health_score, compliance_percent, "单元合规评分");

        ComplianceReport {
            unit_id: unit_id.to_string(),
            checks_total,
            checks_ok,
            checks_warning,
            checks_critical,
            compliance_percent,
            health_score,
            recommendation,
            recommendation_label: i18n::t(recommendation.label_key()),
        }
    }

    /// 缺失检查清单: 某单元某日的应检未检次数
    ///
    /// # 参数
    /// - `unit_id`: 冷藏单元
    /// - `readings`: 报告期内的读数 (计数按自然日分组)
    /// - `period_start` / `period_end`: 报告期 (边界含入)
    pub fn check_gaps(
        &self,
        unit_id: &str,
        readings: &[TemperatureReading],
        period_start: NaiveDate,
        period_end: NaiveDate,
    ) -> Vec<CheckGap> {
        let mut per_day: HashMap<NaiveDate, u32> = HashMap::new();
        for r in readings {
            *per_day.entry(r.timestamp.date()).or_insert(0) += 1;
        }

        let mut gaps = Vec::new();
        let mut day = period_start;
        while day <= period_end {
            let actual = per_day.get(&day).copied().unwrap_or(0);
            let missing = self.checks_per_day.saturating_sub(actual);
            if missing > 0 {
                gaps.push(CheckGap {
                    unit_id: unit_id.to_string(),
                    date: day,
                    expected: self.checks_per_day,
                    actual,
                    missing,
                });
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        gaps
    }

    /// 报告期的应检总次数
    pub fn expected_checks(&self, period_start: NaiveDate, period_end: NaiveDate) -> u32 {
        if period_end < period_start {
            return 0;
        }
        let days = (period_end - period_start).num_days() as u32 + 1;
        days * self.checks_per_day
    }

    /// 全机群汇总 (合规按聚合检查数口径, 非单元百分比平均)
    pub fn fleet_summary(
        &self,
        reports: &[ComplianceReport],
        anomalies: &[Anomaly],
    ) -> FleetSummary {
        let checks_total: u32 = reports.iter().map(|r| r.checks_total).sum();
        let checks_ok: u32 = reports.iter().map(|r| r.checks_ok).sum();
        let compliance_percent = if checks_total > 0 {
            round2(f64::from(checks_ok) / f64::from(checks_total) * 100.0)
        } else {
            100.0
        };

        FleetSummary {
            unit_count: reports.len() as u32,
            checks_total,
            checks_ok,
            compliance_percent,
            critical: count_severity(anomalies, Severity::Critical),
            warning: count_severity(anomalies, Severity::Warning),
            info: count_severity(anomalies, Severity::Info),
        }
    }
}

impl Default for ComplianceScorer {
    fn default() -> Self {
        Self::new()
    }
}

fn count_severity(anomalies: &[Anomaly], severity: Severity) -> u32 {
    anomalies.iter().filter(|a| a.severity == severity).count() as u32
}
