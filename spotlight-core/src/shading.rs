//! # Shading 模块
//!
//! 像素级圆孔剔除的参考实现。
//!
//! 实际的逐像素求值在渲染后端的 fragment shader 里进行（见宿主
//! crate 的 GLSL 材质），但数值策略在这里用纯函数给出唯一的
//! 规范表述：shader 必须与本模块逐式一致。测试直接针对本模块验证
//! 宽高比矫正与渐变带的边界行为。
//!
//! ## 求值规则
//!
//! 对归一化屏幕位置 `p`：
//!
//! ```text
//! offset = p - center_uv
//! offset.x *= aspect_ratio        // 非正方形视口矫正，圆孔保持正圆
//! inner = radius_uv - fade_distance_uv
//! opacity = smoothstep(inner, radius_uv, length(offset))
//! ```
//!
//! - `length(offset) ≤ inner`: 完全透明（孔内）
//! - `length(offset) ≥ radius_uv`: 完全不透明（遮罩）
//! - 两者之间：平滑渐变
//! - `fade_distance_uv == 0`: 渐变带宽为零，退化为阶梯（硬边）

use crate::easing::smoothstep;
use crate::math::Vec2;
use crate::params::ShadingParameters;

/// 计算像素处的遮罩不透明度系数 (0.0 - 1.0)
///
/// # 参数
/// - `p`: 像素的归一化屏幕位置
/// - `params`: 本帧着色参数快照
pub fn opacity_at(p: Vec2, params: &ShadingParameters) -> f32 {
    let mut offset = p - params.center_uv;
    // 把 x 轴按宽高比拉回，正圆在非正方形视口上不再变成椭圆
    offset.x *= params.aspect_ratio;

    let inner = params.radius_uv - params.fade_distance_uv;
    smoothstep(inner, params.radius_uv, offset.length())
}

/// 计算像素的最终 alpha
///
/// `base_texture_alpha * tint.a * opacity_at(p)`，
/// 与后端 shader 的混合式一致。
pub fn final_alpha(base_texture_alpha: f32, p: Vec2, params: &ShadingParameters) -> f32 {
    base_texture_alpha * params.tint.a * opacity_at(p, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::TintColor;

    fn params(center: Vec2, radius: f32, aspect: f32, fade: f32) -> ShadingParameters {
        ShadingParameters {
            center_uv: center,
            radius_uv: radius,
            aspect_ratio: aspect,
            fade_distance_uv: fade,
            tint: TintColor::BLACK.with_alpha(0.8),
            texture: None,
        }
    }

    #[test]
    fn test_inside_hole_fully_transparent() {
        let p = params(Vec2::new(0.5, 0.5), 0.3, 1.0, 0.1);
        // 距离 0.1 ≤ inner(0.2)：孔内完全透明
        assert_eq!(opacity_at(Vec2::new(0.6, 0.5), &p), 0.0);
        assert_eq!(opacity_at(Vec2::new(0.5, 0.5), &p), 0.0);
    }

    #[test]
    fn test_outside_radius_fully_opaque() {
        let p = params(Vec2::new(0.5, 0.5), 0.3, 1.0, 0.1);
        // 距离 0.4 ≥ radius(0.3)：遮罩完全不透明
        assert_eq!(opacity_at(Vec2::new(0.9, 0.5), &p), 1.0);
    }

    #[test]
    fn test_fade_band_midpoint() {
        let p = params(Vec2::new(0.5, 0.5), 0.3, 1.0, 0.1);
        // inner=0.2，radius=0.3，距离 0.25 恰为带中点 → 0.5
        let mid = opacity_at(Vec2::new(0.75, 0.5), &p);
        assert!((mid - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_zero_fade_is_hard_edge() {
        let p = params(Vec2::new(0.5, 0.5), 0.2, 1.0, 0.0);
        // 渐变带宽为零：阶梯函数，无除零
        assert_eq!(opacity_at(Vec2::new(0.6, 0.5), &p), 0.0);
        assert_eq!(opacity_at(Vec2::new(0.71, 0.5), &p), 1.0);
    }

    #[test]
    fn test_aspect_correction_makes_circle_round() {
        // 宽高比 2.0：矫正前 (0.1, 0) 与 (0, 0.2) 两个偏移，
        // 矫正后到中心的距离都应是 0.2
        let p = params(Vec2::new(0.0, 0.0), 0.25, 2.0, 0.2);

        let horizontal = opacity_at(Vec2::new(0.1, 0.0), &p);
        let vertical = opacity_at(Vec2::new(0.0, 0.2), &p);
        assert!((horizontal - vertical).abs() < 1e-6);
        // 距离 0.2 落在渐变带内，数值非平凡
        assert!(horizontal > 0.0);
        assert!(horizontal < 1.0);
    }

    #[test]
    fn test_final_alpha_multiplies_through() {
        let p = params(Vec2::new(0.5, 0.5), 0.1, 1.0, 0.0);
        // 孔外像素：base 1.0 * tint.a 0.8 * cutout 1.0
        let alpha = final_alpha(1.0, Vec2::new(0.9, 0.5), &p);
        assert!((alpha - 0.8).abs() < 1e-6);

        // 孔内像素：cutout 0 → 最终 alpha 0
        assert_eq!(final_alpha(1.0, Vec2::new(0.5, 0.5), &p), 0.0);
    }
}
