// ==========================================
// 数值策略 - 统一舍入规则
// ==========================================
// 全系统唯一舍入策略: round half away from zero
// (f64::round 即为该语义)
// 数量/百分比/预测区间 → 2 位小数
// MAPE → 1 位小数
// 缩放因子 → 4 位小数
// ==========================================

/// 按指定小数位数舍入（half away from zero）
///
/// # 参数
/// - `value`: 待舍入值
/// - `dp`: 小数位数
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}

/// 舍入到 2 位小数（数量 / 百分比 / 预测区间）
pub fn round2(value: f64) -> f64 {
    round_dp(value, 2)
}

/// 舍入到 1 位小数（MAPE / 温度分组键）
pub fn round1(value: f64) -> f64 {
    round_dp(value, 1)
}

/// 舍入到 4 位小数（缩放因子）
pub fn round4(value: f64) -> f64 {
    round_dp(value, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(1.005 + 1e-9), 1.01);
        assert_eq!(round2(2.675 + 1e-9), 2.68);
        assert_eq!(round2(-2.675 - 1e-9), -2.68);
        assert_eq!(round2(1500.0), 1500.0);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(15.04), 15.0);
        assert_eq!(round1(15.05), 15.1);
        assert_eq!(round1(-0.25), -0.3);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(37.00004), 37.0);
        assert_eq!(round4(0.123456), 0.1235);
    }
}
