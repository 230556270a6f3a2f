// ==========================================
// 厨房运营预测分析套件 - 缩放权重配置
// ==========================================
// scalingFactor = w_sqrt * sqrt(ratio) + w_linear * ratio
// 已确认权重: Spice (0.7, 0.3), Standard (0.0, 1.0)
// Leavening / CookingFat / Liquid 为暂定值 (亚线性且弱于
// Spice 曲线), 投产前须按厨务经验或历史批次结果校准,
// 校准入口即本配置
// ==========================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::types::IngredientCategory;

/// 单类别的缩放权重对, 约束 w_sqrt + w_linear = 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalingWeights {
    pub w_sqrt: f64,
    pub w_linear: f64,
}

impl ScalingWeights {
    pub const fn new(w_sqrt: f64, w_linear: f64) -> Self {
        Self { w_sqrt, w_linear }
    }

    /// 对给定份数比计算缩放因子
    pub fn factor(&self, ratio: f64) -> f64 {
        self.w_sqrt * ratio.sqrt() + self.w_linear * ratio
    }
}

/// 权重配置校验错误
#[derive(Error, Debug)]
pub enum ScalingProfileError {
    #[error("权重对之和必须为 1.0: category={category}, sum={sum}")]
    WeightSumInvalid { category: String, sum: f64 },

    #[error("权重不得为负: category={category}")]
    NegativeWeight { category: String },
}

/// 全类别缩放权重配置 (注入式)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalingProfile {
    pub spice: ScalingWeights,
    pub leavening: ScalingWeights,
    pub cooking_fat: ScalingWeights,
    pub liquid: ScalingWeights,
    pub standard: ScalingWeights,
}

impl ScalingProfile {
    /// 取某类别的权重对
    pub fn weights_for(&self, category: IngredientCategory) -> ScalingWeights {
        match category {
            IngredientCategory::Spice => self.spice,
            IngredientCategory::Leavening => self.leavening,
            IngredientCategory::CookingFat => self.cooking_fat,
            IngredientCategory::Liquid => self.liquid,
            IngredientCategory::Standard => self.standard,
        }
    }

    /// 校验所有权重对 (非负, 和为 1.0)
    pub fn validate(&self) -> Result<(), ScalingProfileError> {
        let pairs = [
            ("spice", self.spice),
            ("leavening", self.leavening),
            ("cooking_fat", self.cooking_fat),
            ("liquid", self.liquid),
            ("standard", self.standard),
        ];
        for (name, w) in pairs {
            if w.w_sqrt < 0.0 || w.w_linear < 0.0 {
                return Err(ScalingProfileError::NegativeWeight {
                    category: name.to_string(),
                });
            }
            let sum = w.w_sqrt + w.w_linear;
            if (sum - 1.0).abs() > 1e-9 {
                return Err(ScalingProfileError::WeightSumInvalid {
                    category: name.to_string(),
                    sum,
                });
            }
        }
        Ok(())
    }
}

impl Default for ScalingProfile {
    fn default() -> Self {
        Self {
            // 已确认: 观测行为反推
            spice: ScalingWeights::new(0.7, 0.3),
            standard: ScalingWeights::new(0.0, 1.0),
            // 暂定值: 亚线性, 弱于 Spice 曲线; 待校准
            leavening: ScalingWeights::new(0.5, 0.5),
            cooking_fat: ScalingWeights::new(0.4, 0.6),
            liquid: ScalingWeights::new(0.3, 0.7),
        }
    }
}
