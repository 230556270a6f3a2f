// ==========================================
// 厨房运营预测分析套件 - 配方缩放 API
// ==========================================
// 请求: { recipeId, targetServings }
// 响应: { recipe, originalServings, targetServings, scaledIngredients }
// 校验失败 (targetServings <= 0) 在任何计算前以客户端错误返回
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator;
use crate::domain::recipe::{Recipe, ScaledIngredient};
use crate::engine::scaling::ScalingEngine;

/// 缩放请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRecipeRequest {
    pub recipe_id: i64,
    pub target_servings: i32,
}

/// 响应中的配方摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// 缩放响应
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleRecipeResponse {
    pub recipe: RecipeSummary,
    pub original_servings: u32,
    pub target_servings: i32,
    pub scaled_ingredients: Vec<ScaledIngredient>,
}

// ==========================================
// ScalingApi - 配方缩放接口
// ==========================================
pub struct ScalingApi {
    engine: ScalingEngine,
}

impl ScalingApi {
    pub fn new() -> Self {
        Self {
            engine: ScalingEngine::new(),
        }
    }

    /// 使用注入的缩放引擎 (自定义权重配置) 构造
    pub fn with_engine(engine: ScalingEngine) -> Self {
        Self { engine }
    }

    /// 按目标份数缩放整个配方
    ///
    /// 配方数据由调用方自外部配方存储取得后传入;
    /// 校验先行, 失败不产生部分结果
    ///
    /// # 参数
    /// - `recipe`: 配方 (参考份数 + 食材清单)
    /// - `request`: 缩放请求
    pub fn scale_recipe(
        &self,
        recipe: &Recipe,
        request: &ScaleRecipeRequest,
    ) -> ApiResult<ScaleRecipeResponse> {
        validator::validate_target_servings(request.target_servings)?;
        validator::validate_reference_servings(recipe.servings)?;
        if request.recipe_id != recipe.id {
            return Err(ApiError::NotFound(format!(
                "配方不匹配: 请求 recipeId={}, 实际 id={}",
                request.recipe_id, recipe.id
            )));
        }

        let scaled_ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| {
                self.engine
                    .scale(ingredient, recipe.servings, request.target_servings)
            })
            .collect::<Result<Vec<ScaledIngredient>, _>>()?;

        info!(
            recipe_id = recipe.id,
            original = recipe.servings,
            target = request.target_servings,
            ingredients = scaled_ingredients.len(),
            "配方缩放完成"
        );

        Ok(ScaleRecipeResponse {
            recipe: RecipeSummary {
                id: recipe.id,
                name: recipe.name.clone(),
                category: recipe.category.clone(),
            },
            original_servings: recipe.servings,
            target_servings: request.target_servings,
            scaled_ingredients,
        })
    }
}

impl Default for ScalingApi {
    fn default() -> Self {
        Self::new()
    }
}
