// ==========================================
// 厨房运营预测分析套件 - 默认客流配置
// ==========================================
// 替代历史实现中的硬编码全局表 {city, sued, ak}:
// 各门店默认客流经配置注入, 新增门店无需改核心代码
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 各门店的默认客流 (预测信号全缺失时的生产兜底值)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaxDefaults {
    /// location_id -> 默认客流
    pub by_location: HashMap<String, f64>,
    /// 未配置门店的兜底值
    pub fallback: f64,
}

impl PaxDefaults {
    pub fn new(by_location: HashMap<String, f64>, fallback: f64) -> Self {
        Self {
            by_location,
            fallback,
        }
    }

    /// 取某门店的默认客流
    pub fn default_for(&self, location_id: &str) -> f64 {
        self.by_location
            .get(location_id)
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_with_fallback() {
        let mut by_location = HashMap::new();
        by_location.insert("city".to_string(), 120.0);
        by_location.insert("sued".to_string(), 80.0);
        let defaults = PaxDefaults::new(by_location, 50.0);

        assert_eq!(defaults.default_for("city"), 120.0);
        assert_eq!(defaults.default_for("sued"), 80.0);
        assert_eq!(defaults.default_for("neueroeffnung"), 50.0);
    }

    #[test]
    fn test_empty_defaults() {
        let defaults = PaxDefaults::default();
        assert_eq!(defaults.default_for("city"), 0.0);
    }
}
