// ==========================================
// 厨房运营预测分析套件 - 冷藏温度异常检测引擎
// ==========================================
// 职责: 对单个冷藏单元按时间序的读数流做五类独立检测
// 输入: 读数流 (按 timestamp 升序) + 安全温度区间
// 输出: Anomaly 列表 (单条读数可同时触发多种类型)
// 跨调用无状态, 只作用于传入窗口; 窗口大小由调用方控制
// ==========================================
// 五条规则:
// 1. out_of_range  越界 (边界含入)          → CRITICAL
// 2. trend         三连读数严格单调          → WARNING
// 3. spike         偏离尾随历史均值 > 2σ     → WARNING/CRITICAL
// 4. gap           营业时段内检查间隔 > 8h    → WARNING
// 5. stuck_sensor  同一 0.1°C 值重复 >= 5 次 → WARNING
// ==========================================

use chrono::{Duration, NaiveDateTime};
use serde_json::json;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

use crate::config::HaccpConfig;
use crate::domain::haccp::{Anomaly, SafeRange, TemperatureReading, TemperatureStats};
use crate::domain::types::{AnomalyType, Severity, TemperatureStatus};
use crate::numeric::round2;

/// 温度统计量 (总体公式, 除数 n, 非样本修正)
///
/// 少于两个值时均值与标准差皆为 0
pub fn calculate_stats(values: &[f64]) -> TemperatureStats {
    if values.len() < 2 {
        return TemperatureStats {
            mean: 0.0,
            std_dev: 0.0,
        };
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    TemperatureStats {
        mean,
        std_dev: variance.sqrt(),
    }
}

/// 温度相对安全区间的状态 (边界含入)
pub fn temperature_status(temperature: f64, min: f64, max: f64) -> TemperatureStatus {
    if temperature < min {
        TemperatureStatus::CriticalLow
    } else if temperature > max {
        TemperatureStatus::CriticalHigh
    } else {
        TemperatureStatus::Ok
    }
}

// ==========================================
// TemperatureAnomalyDetector - 异常检测引擎
// ==========================================
pub struct TemperatureAnomalyDetector {
    config: HaccpConfig,
}

impl TemperatureAnomalyDetector {
    pub fn new() -> Self {
        Self {
            config: HaccpConfig::default(),
        }
    }

    pub fn with_config(config: HaccpConfig) -> Self {
        Self { config }
    }

    /// 运行全部五条检测规则
    ///
    /// # 前置条件
    /// - `readings` 为同一冷藏单元, 按 timestamp 升序
    ///
    /// # 参数
    /// - `readings`: 本次评估窗口内的读数
    /// - `range`: 该单元配置的安全区间
    ///
    /// # 返回
    /// Anomaly 列表 (规则顺序输出, 结果确定性);
    /// 空或单点历史 → 空列表 ("无事可报", 不是错误)
    pub fn detect(&self, readings: &[TemperatureReading], range: &SafeRange) -> Vec<Anomaly> {
        if readings.len() < 2 {
            debug!(count = readings.len(), "读数不足, 无事可报");
            return Vec::new();
        }

        let mut anomalies = Vec::new();
        anomalies.extend(self.detect_out_of_range(readings, range));
        anomalies.extend(self.detect_trend(readings));
        anomalies.extend(self.detect_spike(readings));
        anomalies.extend(self.detect_gap(readings));
        anomalies.extend(self.detect_stuck_sensor(readings));

        debug!(
            readings = readings.len(),
            anomalies = anomalies.len(),
            "检测完成"
        );
        anomalies
    }

    // ==========================================
    // 规则 1: out_of_range (越界)
    // ==========================================
    fn detect_out_of_range(
        &self,
        readings: &[TemperatureReading],
        range: &SafeRange,
    ) -> Vec<Anomaly> {
        readings
            .iter()
            .filter(|r| !range.contains(r.temperature))
            .map(|r| {
                let status = temperature_status(r.temperature, range.min, range.max);
                make_anomaly(
                    &r.unit_id,
                    AnomalyType::OutOfRange,
                    Severity::Critical,
                    r.timestamp,
                    json!({
                        "temperature": r.temperature,
                        "min": range.min,
                        "max": range.max,
                        "status": status.to_string(),
                    }),
                )
            })
            .collect()
    }

    // ==========================================
    // 规则 2: trend (三连严格单调)
    // ==========================================
    // 持平或震荡的三元组不触发; 每个满足条件的三元组
    // 各触发一次, 记在第三条读数的时间点
    fn detect_trend(&self, readings: &[TemperatureReading]) -> Vec<Anomaly> {
        readings
            .windows(3)
            .filter_map(|w| {
                let (t1, t2, t3) = (w[0].temperature, w[1].temperature, w[2].temperature);
                let direction = if t1 < t2 && t2 < t3 {
                    Some("rising")
                } else if t1 > t2 && t2 > t3 {
                    Some("falling")
                } else {
                    None
                };
                direction.map(|dir| {
                    make_anomaly(
                        &w[2].unit_id,
                        AnomalyType::Trend,
                        Severity::Warning,
                        w[2].timestamp,
                        json!({
                            "from": t1,
                            "via": t2,
                            "to": t3,
                            "direction": dir,
                        }),
                    )
                })
            })
            .collect()
    }

    // ==========================================
    // 规则 3: spike (偏离尾随历史均值)
    // ==========================================
    // 对每条读数以其之前的全部窗口内读数为尾随历史;
    // |current - mean| > spike_sigma * stdDev 触发。
    // stdDev = 0 (历史全同值) 时任何偏差都触发。
    // 历史少于 spike_min_history 条不评估 (无法区分尖峰与噪声)
    fn detect_spike(&self, readings: &[TemperatureReading]) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();
        for i in self.config.spike_min_history..readings.len() {
            let history: Vec<f64> = readings[..i].iter().map(|r| r.temperature).collect();
            let stats = calculate_stats(&history);
            let current = &readings[i];
            let deviation = (current.temperature - stats.mean).abs();

            let fires = if stats.std_dev > 0.0 {
                deviation > self.config.spike_sigma * stats.std_dev
            } else {
                deviation > 0.0
            };
            if !fires {
                continue;
            }

            let severity = if stats.std_dev > 0.0 {
                if deviation > self.config.spike_critical_sigma * stats.std_dev {
                    Severity::Critical
                } else {
                    Severity::Warning
                }
            } else if deviation >= self.config.spike_critical_abs_c {
                Severity::Critical
            } else {
                Severity::Warning
            };

            anomalies.push(make_anomaly(
                &current.unit_id,
                AnomalyType::Spike,
                severity,
                current.timestamp,
                json!({
                    "temperature": current.temperature,
                    "mean": round2(stats.mean),
                    "stdDev": round2(stats.std_dev),
                    "deviation": round2(deviation),
                }),
            ));
        }
        anomalies
    }

    // ==========================================
    // 规则 4: gap (营业时段检查间隔)
    // ==========================================
    // 以相邻读数间隔落在营业时段 (默认 06:00-22:00) 内的
    // 部分计时, 严格大于阈值 (默认 8h) 触发。
    // 合法的过夜未检查不受罚; 恰好等于阈值不触发
    fn detect_gap(&self, readings: &[TemperatureReading]) -> Vec<Anomaly> {
        readings
            .windows(2)
            .filter_map(|w| {
                let business_hours = self.business_hours_overlap(w[0].timestamp, w[1].timestamp);
                if business_hours > self.config.gap_threshold_hours {
                    Some(make_anomaly(
                        &w[1].unit_id,
                        AnomalyType::Gap,
                        Severity::Warning,
                        w[1].timestamp,
                        json!({
                            "previousCheck": w[0].timestamp.to_string(),
                            "currentCheck": w[1].timestamp.to_string(),
                            "businessHoursWithoutCheck": round2(business_hours),
                            "thresholdHours": self.config.gap_threshold_hours,
                        }),
                    ))
                } else {
                    None
                }
            })
            .collect()
    }

    /// 区间 [start, end] 与每日营业时段窗口的重叠时长 (小时)
    fn business_hours_overlap(&self, start: NaiveDateTime, end: NaiveDateTime) -> f64 {
        if end <= start {
            return 0.0;
        }
        let mut total = Duration::zero();
        let mut day = start.date();
        while day <= end.date() {
            let window_start = day.and_time(self.config.business_start);
            let window_end = day.and_time(self.config.business_end);
            let overlap_start = window_start.max(start);
            let overlap_end = window_end.min(end);
            if overlap_end > overlap_start {
                total += overlap_end - overlap_start;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        total.num_seconds() as f64 / 3600.0
    }

    // ==========================================
    // 规则 5: stuck_sensor (传感器卡值)
    // ==========================================
    // 按温度舍入到 0.1°C 分组; 同一值在窗口内重复
    // >= 阈值 (默认 5) 次, 每个值只触发一次,
    // 记在最后一次出现的时间点
    fn detect_stuck_sensor(&self, readings: &[TemperatureReading]) -> Vec<Anomaly> {
        // BTreeMap 保证输出顺序确定
        let mut groups: BTreeMap<i64, (usize, NaiveDateTime)> = BTreeMap::new();
        for r in readings {
            let key = (r.temperature * 10.0).round() as i64;
            let entry = groups.entry(key).or_insert((0, r.timestamp));
            entry.0 += 1;
            entry.1 = r.timestamp;
        }

        groups
            .into_iter()
            .filter(|(_, (count, _))| *count >= self.config.stuck_repeat_threshold)
            .map(|(key, (count, last_seen))| {
                make_anomaly(
                    &readings[0].unit_id,
                    AnomalyType::StuckSensor,
                    Severity::Warning,
                    last_seen,
                    json!({
                        "value": key as f64 / 10.0,
                        "occurrences": count,
                        "threshold": self.config.stuck_repeat_threshold,
                    }),
                )
            })
            .collect()
    }
}

impl Default for TemperatureAnomalyDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// 构造带可解释 detail 的异常记录
///
/// anomaly_id 由内容派生 (uuid v5): 同一输入窗口重复检测
/// 产出逐字节相同的结果, 调用方落库时可据 id 去重
fn make_anomaly(
    unit_id: &str,
    anomaly_type: AnomalyType,
    severity: Severity,
    timestamp: NaiveDateTime,
    detail: serde_json::Value,
) -> Anomaly {
    let detail = detail.to_string();
    let seed = format!("{}|{}|{}|{}", unit_id, anomaly_type, timestamp, detail);
    Anomaly {
        anomaly_id: Uuid::new_v5(&Uuid::NAMESPACE_OID, seed.as_bytes()).to_string(),
        unit_id: unit_id.to_string(),
        anomaly_type,
        severity,
        timestamp,
        detail,
    }
}
