// ==========================================
// 厨房运营预测分析套件 - 领域类型定义
// ==========================================
// 封闭枚举: 计量单位 / 食材缩放类别 / 异常类型
// / 严重等级 / 温度状态 / 合规建议 / 餐段
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 计量单位 (Unit)
// ==========================================
// 本核心不做单位换算, 未知单位原样透传由外部协作方处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    G,
    Kg,
    Ml,
    L,
    Piece,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::G => write!(f, "g"),
            Unit::Kg => write!(f, "kg"),
            Unit::Ml => write!(f, "ml"),
            Unit::L => write!(f, "l"),
            Unit::Piece => write!(f, "piece"),
        }
    }
}

// ==========================================
// 食材缩放类别 (Ingredient Category)
// ==========================================
// 派生类别, 从不持久化; 决定非线性缩放曲线
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    /// 香料/香草 - 大批量时单位份量的感知强度更高, 强阻尼
    Spice,
    /// 发酵/膨松剂 - 大批量过量投放导致结构失败
    Leavening,
    /// 煎炸油脂 - 锅/烤箱表面效率随批量提升
    CookingFat,
    /// 高汤/汤底 - 蒸发与吸收比例随批量变化
    Liquid,
    /// 其余食材 - 线性缩放
    Standard,
}

impl IngredientCategory {
    /// 对应缩放说明文案的 i18n 键
    pub fn note_key(&self) -> &'static str {
        match self {
            IngredientCategory::Spice => "scaling.note.spice",
            IngredientCategory::Leavening => "scaling.note.leavening",
            IngredientCategory::CookingFat => "scaling.note.cooking_fat",
            IngredientCategory::Liquid => "scaling.note.liquid",
            IngredientCategory::Standard => "scaling.note.standard",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientCategory::Spice => write!(f, "spice"),
            IngredientCategory::Leavening => write!(f, "leavening"),
            IngredientCategory::CookingFat => write!(f, "cooking_fat"),
            IngredientCategory::Liquid => write!(f, "liquid"),
            IngredientCategory::Standard => write!(f, "standard"),
        }
    }
}

// ==========================================
// 异常类型 (Anomaly Type)
// ==========================================
// 五种独立的故障信号; 单条读数可同时触发多种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyType {
    OutOfRange,
    Trend,
    Spike,
    Gap,
    StuckSensor,
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnomalyType::OutOfRange => write!(f, "out_of_range"),
            AnomalyType::Trend => write!(f, "trend"),
            AnomalyType::Spike => write!(f, "spike"),
            AnomalyType::Gap => write!(f, "gap"),
            AnomalyType::StuckSensor => write!(f, "stuck_sensor"),
        }
    }
}

// ==========================================
// 严重等级 (Severity)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE (与日志存储一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Critical => write!(f, "CRITICAL"),
        }
    }
}

// ==========================================
// 温度状态 (Temperature Status)
// ==========================================
// 边界含入: 恰好等于上/下限视为 ok
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureStatus {
    Ok,
    CriticalLow,
    CriticalHigh,
}

impl fmt::Display for TemperatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemperatureStatus::Ok => write!(f, "ok"),
            TemperatureStatus::CriticalLow => write!(f, "critical_low"),
            TemperatureStatus::CriticalHigh => write!(f, "critical_high"),
        }
    }
}

// ==========================================
// 合规建议 (Recommendation)
// ==========================================
// 由健康分派生: >=90 / >=75 / >=50 / 其余
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Excellent,
    Good,
    NeedsImprovement,
    Critical,
}

impl Recommendation {
    /// 从健康分 [0,100] 派生建议等级
    pub fn from_health_score(score: u8) -> Self {
        match score {
            90..=100 => Recommendation::Excellent,
            75..=89 => Recommendation::Good,
            50..=74 => Recommendation::NeedsImprovement,
            _ => Recommendation::Critical,
        }
    }

    /// 本地化标签的 i18n 键
    pub fn label_key(&self) -> &'static str {
        match self {
            Recommendation::Excellent => "compliance.recommendation.excellent",
            Recommendation::Good => "compliance.recommendation.good",
            Recommendation::NeedsImprovement => "compliance.recommendation.needs_improvement",
            Recommendation::Critical => "compliance.recommendation.critical",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Excellent => write!(f, "Excellent"),
            Recommendation::Good => write!(f, "Good"),
            Recommendation::NeedsImprovement => write!(f, "Needs improvement"),
            Recommendation::Critical => write!(f, "Critical"),
        }
    }
}

// ==========================================
// 餐段 (Meal)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meal::Breakfast => write!(f, "breakfast"),
            Meal::Lunch => write!(f, "lunch"),
            Meal::Dinner => write!(f, "dinner"),
        }
    }
}
