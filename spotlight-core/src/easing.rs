//! # Easing 模块
//!
//! 缓动函数库，用于过渡动画的时间插值。
//!
//! `smoothstep` 同时服务两个独立的求值点：
//! - 控制器的时间缓动（半径/透明度随时间变化）
//! - 遮罩的空间渐变（像素距离到透明度，见 [`crate::shading`]）
//!
//! 两处共用同一公式，保证时间曲线与空间边缘的手感一致。

use crate::math::lerp;

/// 三次 Hermite 平滑阶梯函数
///
/// `u = clamp((x - a) / (b - a), 0, 1)`，返回 `u² · (3 - 2u)`。
/// 两端一阶导数为零。
///
/// # 边界
/// `a == b` 时渐变带宽为零，退化为阶梯函数（`x < a` 返回 0，否则返回 1），
/// 避免除零。
pub fn smoothstep(a: f32, b: f32, x: f32) -> f32 {
    if (b - a).abs() <= f32::EPSILON {
        // 零宽渐变带：硬边
        return if x < a { 0.0 } else { 1.0 };
    }
    let u = ((x - a) / (b - a)).clamp(0.0, 1.0);
    u * u * (3.0 - 2.0 * u)
}

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// 平滑阶梯（两端减速的三次 Hermite 曲线）
    #[default]
    SmoothStep,
    /// 二次缓入
    EaseInQuad,
    /// 二次缓出
    EaseOutQuad,
    /// 二次缓入缓出
    EaseInOutQuad,
    /// 三次缓入
    EaseInCubic,
    /// 三次缓出
    EaseOutCubic,
    /// 三次缓入缓出
    EaseInOutCubic,
}

impl EasingFunction {
    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值 (0.0 - 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::SmoothStep => smoothstep(0.0, 1.0, t),
            EasingFunction::EaseInQuad => t * t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::EaseInCubic => t * t * t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }

    /// 在 `from` 和 `to` 之间按缓动后的进度插值
    pub fn interpolate(&self, from: f32, to: f32, t: f32) -> f32 {
        lerp(from, to, self.apply(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_endpoints() {
        // 任意 a < b：两端精确为 0 / 1，中点精确为 0.5
        for (a, b) in [(0.0, 1.0), (-2.0, 3.0), (0.25, 0.75)] {
            assert_eq!(smoothstep(a, b, a), 0.0);
            assert_eq!(smoothstep(a, b, b), 1.0);
            assert_eq!(smoothstep(a, b, (a + b) / 2.0), 0.5);
        }
    }

    #[test]
    fn test_smoothstep_clamps_outside_band() {
        assert_eq!(smoothstep(0.0, 1.0, -5.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 5.0), 1.0);
    }

    #[test]
    fn test_smoothstep_degenerate_band_is_step() {
        // a == b：硬边，不得除零
        assert_eq!(smoothstep(0.5, 0.5, 0.4), 0.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.5), 1.0);
        assert_eq!(smoothstep(0.5, 0.5, 0.6), 1.0);
    }

    #[test]
    fn test_linear() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(0.5), 0.5);
        assert_eq!(easing.apply(1.0), 1.0);
    }

    #[test]
    fn test_smoothstep_easing_matches_free_function() {
        let easing = EasingFunction::SmoothStep;
        for t in [0.0, 0.1, 0.35, 0.5, 0.9, 1.0] {
            assert_eq!(easing.apply(t), smoothstep(0.0, 1.0, t));
        }
    }

    #[test]
    fn test_clamp() {
        // 超出范围应该被限制
        let easing = EasingFunction::SmoothStep;
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }

    #[test]
    fn test_interpolate() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.interpolate(2.0, 4.0, 0.5), 3.0);

        // SmoothStep 中点同样精确到一半
        let easing = EasingFunction::SmoothStep;
        assert_eq!(easing.interpolate(0.0, 0.8, 0.5), 0.4);
    }
}
