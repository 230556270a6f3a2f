// ==========================================
// 厨房运营预测分析套件 - 配方领域实体
// ==========================================
// 输入: 配方 + 食材清单 (只读, 来自外部配方存储)
// 输出: 缩放后的食材 (每次调用新建, 不持久化)
// ==========================================

use serde::{Deserialize, Serialize};

use crate::domain::types::{IngredientCategory, Unit};

/// 配方中的一条食材
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// 显示名称 (分类依据)
    pub name: String,
    /// 参考份数下的数量
    pub quantity: f64,
    /// 计量单位 (本核心不换算, 原样透传)
    pub unit: Unit,
}

/// 配方 (参考份数 + 食材清单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    /// 配方分类标签 (UI 展示用, 与缩放类别无关)
    #[serde(default)]
    pub category: Option<String>,
    /// 参考份数 (必须 > 0)
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
}

/// 单条食材的缩放结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub name: String,
    pub unit: Unit,
    /// 参考份数下的原始数量
    pub original_quantity: f64,
    /// 缩放后的数量 (>= 0, 统一舍入到 2 位小数)
    pub scaled_quantity: f64,
    /// 实际应用的缩放因子 (4 位小数)
    pub scaling_factor: f64,
    /// 解析出的缩放类别 (UI 角标)
    pub category: IngredientCategory,
    /// 缩放方式的本地化说明
    pub note: String,
}
