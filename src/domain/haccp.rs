// ==========================================
// 厨房运营预测分析套件 - HACCP 领域实体
// ==========================================
// 输入: 温度读数流 (外部记录流程产生, 只读)
// 输出: 异常列表 + 合规报告 (每次检测运行产生)
// ==========================================

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{AnomalyType, Recommendation, Severity};

/// 一条 HACCP 温度记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureReading {
    pub unit_id: String,
    /// 温度 (°C)
    pub temperature: f64,
    pub timestamp: NaiveDateTime,
}

/// 冷藏单元的安全温度区间 (外部配置, 边界含入)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafeRange {
    pub min: f64,
    pub max: f64,
}

impl SafeRange {
    /// 温度是否在安全区间内 (边界含入)
    pub fn contains(&self, temperature: f64) -> bool {
        temperature >= self.min && temperature <= self.max
    }
}

/// 温度统计量 (总体公式, 除数 n)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureStats {
    pub mean: f64,
    pub std_dev: f64,
}

/// 一次检测运行产出的故障信号
///
/// 引擎自身不持久化; 调用方可落库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anomaly {
    pub anomaly_id: String,
    pub unit_id: String,
    #[serde(rename = "type")]
    pub anomaly_type: AnomalyType,
    pub severity: Severity,
    pub timestamp: NaiveDateTime,
    /// 可解释的检测依据 (JSON 字符串)
    pub detail: String,
}

/// 单个冷藏单元在报告期内的合规汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub unit_id: String,
    pub checks_total: u32,
    pub checks_ok: u32,
    pub checks_warning: u32,
    pub checks_critical: u32,
    /// checks_ok / checks_total * 100; 无检查要求时为 100
    pub compliance_percent: f64,
    /// 健康分 [0,100]
    pub health_score: u8,
    pub recommendation: Recommendation,
    /// recommendation 的本地化标签 (取当前全局 locale)
    pub recommendation_label: String,
}

/// 某单元某日缺失的强制检查 (缺口清单条目)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckGap {
    pub unit_id: String,
    pub date: NaiveDate,
    pub expected: u32,
    pub actual: u32,
    pub missing: u32,
}

/// 全机群汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub unit_count: u32,
    pub checks_total: u32,
    pub checks_ok: u32,
    /// 聚合检查数口径 (非各单元百分比的平均)
    pub compliance_percent: f64,
    pub critical: u32,
    pub warning: u32,
    pub info: u32,
}
