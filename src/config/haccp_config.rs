// ==========================================
// 厨房运营预测分析套件 - HACCP 检测配置
// ==========================================
// 检查节奏与检测阈值, 默认值对应监管口径:
// 每单元每日 2 次强制检查 (早/晚), 营业时间 06:00-22:00
// ==========================================

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// 温度异常检测与合规节奏配置 (注入式)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HaccpConfig {
    /// 每单元每日强制检查次数 (早 + 晚)
    pub checks_per_day: u32,
    /// 营业开始时刻 (gap 规则只统计营业时段)
    pub business_start: NaiveTime,
    /// 营业结束时刻
    pub business_end: NaiveTime,
    /// gap 阈值 (小时, 严格大于才触发)
    pub gap_threshold_hours: f64,
    /// stuck_sensor 触发所需的同值重复次数
    pub stuck_repeat_threshold: usize,
    /// spike 触发的标准差倍数
    pub spike_sigma: f64,
    /// spike 评估所需的最小历史读数条数
    pub spike_min_history: usize,
    /// spike 升级为 CRITICAL 的标准差倍数
    pub spike_critical_sigma: f64,
    /// 历史标准差为 0 时, spike 升级为 CRITICAL 的绝对偏差 (°C)
    pub spike_critical_abs_c: f64,
}

impl Default for HaccpConfig {
    fn default() -> Self {
        Self {
            checks_per_day: 2,
            business_start: NaiveTime::from_hms_opt(6, 0, 0).expect("valid business start"),
            business_end: NaiveTime::from_hms_opt(22, 0, 0).expect("valid business end"),
            gap_threshold_hours: 8.0,
            stuck_repeat_threshold: 5,
            spike_sigma: 2.0,
            spike_min_history: 3,
            spike_critical_sigma: 4.0,
            spike_critical_abs_c: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cadence() {
        let config = HaccpConfig::default();
        assert_eq!(config.checks_per_day, 2);
        assert_eq!(config.gap_threshold_hours, 8.0);
        assert_eq!(config.stuck_repeat_threshold, 5);
        assert_eq!(config.business_start, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
        assert_eq!(config.business_end, NaiveTime::from_hms_opt(22, 0, 0).unwrap());
    }
}
