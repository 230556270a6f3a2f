// ==========================================
// 厨房运营预测分析套件 - 配方批量缩放引擎
// ==========================================
// 职责: 将食材从参考份数换算到目标份数
// 核心公式: factor = w_sqrt * sqrt(ratio) + w_linear * ratio
// (翻倍宴会 ≠ 翻倍食盐: 各类别权重不同, 见 ScalingProfile)
// 输入: 食材 + 参考份数 + 目标份数
// 输出: ScaledIngredient (数量 / 因子 / 类别 / 说明)
// ==========================================

use tracing::debug;

use crate::config::ScalingProfile;
use crate::domain::recipe::{Ingredient, ScaledIngredient};
use crate::engine::classifier::IngredientClassifier;
use crate::engine::error::EngineError;
use crate::i18n;
use crate::numeric::{round2, round4};

// ==========================================
// ScalingEngine - 批量缩放引擎
// ==========================================
pub struct ScalingEngine {
    classifier: IngredientClassifier,
    profile: ScalingProfile,
}

impl ScalingEngine {
    /// 使用内置分类规则与默认权重构造
    pub fn new() -> Self {
        Self {
            classifier: IngredientClassifier::new(),
            profile: ScalingProfile::default(),
        }
    }

    /// 使用注入的权重配置构造 (校准入口)
    pub fn with_profile(profile: ScalingProfile) -> Self {
        Self {
            classifier: IngredientClassifier::new(),
            profile,
        }
    }

    /// 缩放单条食材
    ///
    /// 同一公式同时覆盖放大 (ratio > 1) 与缩小 (ratio < 1),
    /// 不做特殊分支。单位不做换算, 原样透传。
    ///
    /// # 参数
    /// - `ingredient`: 食材 (参考份数下的数量)
    /// - `reference_servings`: 参考份数 (必须 > 0)
    /// - `target_servings`: 目标份数 (必须 > 0, 违反为调用方可见的校验错误)
    ///
    /// # 返回
    /// ScaledIngredient, 或入参校验错误 (不产生部分结果)
    pub fn scale(
        &self,
        ingredient: &Ingredient,
        reference_servings: u32,
        target_servings: i32,
    ) -> Result<ScaledIngredient, EngineError> {
        if target_servings <= 0 {
            return Err(EngineError::InvalidTargetServings(target_servings));
        }
        if reference_servings == 0 {
            return Err(EngineError::InvalidReferenceServings(reference_servings));
        }

        let ratio = f64::from(target_servings) / f64::from(reference_servings);
        let category = self.classifier.classify(&ingredient.name);
        let weights = self.profile.weights_for(category);
        let factor = weights.factor(ratio);
        let scaled_quantity = round2(ingredient.quantity * factor).max(0.0);

        debug!(
            name = %ingredient.name,
            %category,
            ratio,
            factor,
            "食材缩放"
        );

        Ok(ScaledIngredient {
            name: ingredient.name.clone(),
            unit: ingredient.unit,
            original_quantity: ingredient.quantity,
            scaled_quantity,
            scaling_factor: round4(factor),
            category,
            note: i18n::t(category.note_key()),
        })
    }
}

impl Default for ScalingEngine {
    fn default() -> Self {
        Self::new()
    }
}
