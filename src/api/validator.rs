// ==========================================
// 厨房运营预测分析套件 - 入参校验器
// ==========================================
// 职责: 请求级前置校验, 违规即拒绝, 不产生部分结果
// ==========================================

use chrono::NaiveDate;

use crate::api::error::{ApiError, ApiResult};

/// 目标份数必须为正 (客户端错误, 任何计算前拒绝)
pub fn validate_target_servings(target_servings: i32) -> ApiResult<()> {
    if target_servings <= 0 {
        return Err(ApiError::InvalidInput(format!(
            "targetServings 必须 > 0, 实际为 {}",
            target_servings
        )));
    }
    Ok(())
}

/// 参考份数必须为正
pub fn validate_reference_servings(reference_servings: u32) -> ApiResult<()> {
    if reference_servings == 0 {
        return Err(ApiError::InvalidInput(
            "配方参考份数必须 > 0".to_string(),
        ));
    }
    Ok(())
}

/// 报告期边界必须有序 (start <= end)
pub fn validate_period(start: NaiveDate, end: NaiveDate) -> ApiResult<()> {
    if start > end {
        return Err(ApiError::InvalidInput(format!(
            "无效的报告期: start={} > end={}",
            start, end
        )));
    }
    Ok(())
}

/// 门店标识不得为空
pub fn validate_location_id(location_id: &str) -> ApiResult<()> {
    if location_id.trim().is_empty() {
        return Err(ApiError::InvalidInput("locationId 不得为空".to_string()));
    }
    Ok(())
}

/// MAPE 诊断要求实际值与预测值序列等长
pub fn validate_paired_series(actuals: usize, predictions: usize) -> ApiResult<()> {
    if actuals != predictions {
        return Err(ApiError::InvalidInput(format!(
            "实际值与预测值序列长度不一致: {} vs {}",
            actuals, predictions
        )));
    }
    Ok(())
}
