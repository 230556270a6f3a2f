// ==========================================
// 厨房运营预测分析套件 - 客流 (PAX) 领域实体
// ==========================================
// 输入: 历史客流观测 (外部客流存储, 只读)
// 输出: 预测结果 (每次预测调用产生)
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::Meal;

/// 一条历史客流观测
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaxObservation {
    pub date: NaiveDate,
    pub meal: Meal,
    pub location_id: String,
    pub adults: u32,
    pub children: u32,
}

impl PaxObservation {
    /// 总客流 (成人 + 儿童)
    pub fn total(&self) -> f64 {
        f64::from(self.adults) + f64::from(self.children)
    }
}

/// 预测的三路候选信号
///
/// 约定: 0.0 为"无数据"哨兵, 与"观测到 0 位客人"同值。
/// 该二义性继承自历史口径, 不在核心内消解。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSignals {
    /// 近 4 周 (28 天) 同餐段移动平均
    pub avg_4week: f64,
    /// 同星期几平均
    pub dow_avg: f64,
    /// 去年同 ISO 周平均
    pub seasonal: f64,
}

/// 置信区间 [lower, upper], lower 不为负
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// 一次预测的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
    /// 历史预测准确度诊断 (有历史实际值时才给出)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mape: Option<f64>,
}
