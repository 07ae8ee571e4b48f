//! # Projector 模块
//!
//! 把世界坐标锚点 + 世界半径换算为归一化屏幕坐标下的圆孔参数。
//!
//! ## 两点投影法
//!
//! 世界 → 屏幕的投影通常不是等比的（透视缩短、宽高比畸变），
//! 无法用单一比例系数把世界半径换成屏幕半径。唯一稳健的做法是
//! 投影两个点：锚点本身，以及沿相机"右"轴偏移 `world_radius`
//! 的第二个点，两者投影后的像素距离就是半径在屏幕上的长度。
//!
//! 无状态叶子组件：不缓存、不持有任何引用。

use crate::math::{Vec2, Vec3};
use crate::ports::{SceneCamera, Viewport};

/// 投影结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// 圆孔中心（归一化屏幕坐标）
    ///
    /// 目标在屏幕外时可以超出 [0, 1]，这不是错误，圆孔跟着
    /// 移到屏幕外。
    pub center_uv: Vec2,
    /// 圆孔半径（以视口宽度归一化）
    pub radius_uv: f32,
    /// 视口宽高比（宽 / 高）
    pub aspect_ratio: f32,
}

/// 投影目标锚点与世界半径
///
/// # 参数
/// - `camera`: 场景相机（世界 → 屏幕像素）
/// - `target`: 锚点的世界坐标
/// - `world_radius`: 圆孔半径（世界单位，负值按 0 处理）
/// - `viewport`: 视口尺寸（像素）；退化视口由调用方预先过滤
///
/// # 返回
/// 归一化的圆孔参数，见 [`Projection`]
pub fn project<C: SceneCamera>(
    camera: &C,
    target: Vec3,
    world_radius: f32,
    viewport: Viewport,
) -> Projection {
    let world_radius = world_radius.max(0.0);

    // 锚点投影 → 按宽/高各自归一化
    let center_px = camera.world_to_screen(target);
    let center_uv = Vec2::new(center_px.x / viewport.width, center_px.y / viewport.height);

    // 第二个点：沿相机右轴偏移一个世界半径
    let edge = target + camera.right_axis() * world_radius;
    let edge_px = camera.world_to_screen(edge);

    // 两点的像素距离 / 视口宽度 = 归一化半径
    let radius_uv = center_px.distance(edge_px) / viewport.width;

    Projection {
        center_uv,
        radius_uv,
        aspect_ratio: viewport.aspect_ratio(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 测试用相机：世界 XY 平面按固定比例映射到屏幕像素
    struct ScaledCamera {
        /// 每世界单位对应的像素数
        pixels_per_unit: f32,
        /// 屏幕原点偏移（像素）
        offset: Vec2,
    }

    impl SceneCamera for ScaledCamera {
        fn world_to_screen(&self, point: Vec3) -> Vec2 {
            Vec2::new(
                point.x * self.pixels_per_unit + self.offset.x,
                point.y * self.pixels_per_unit + self.offset.y,
            )
        }

        fn right_axis(&self) -> Vec3 {
            Vec3::new(1.0, 0.0, 0.0)
        }
    }

    #[test]
    fn test_center_is_normalized_per_axis() {
        let camera = ScaledCamera {
            pixels_per_unit: 1.0,
            offset: Vec2::new(640.0, 360.0),
        };
        let viewport = Viewport::new(1280.0, 720.0);

        let projection = project(&camera, Vec3::zero(), 0.0, viewport);
        // x/宽、y/高 各自归一化
        assert_eq!(projection.center_uv, Vec2::new(0.5, 0.5));
        assert_eq!(projection.aspect_ratio, 1280.0 / 720.0);
    }

    #[test]
    fn test_radius_from_two_point_projection() {
        let camera = ScaledCamera {
            pixels_per_unit: 100.0,
            offset: Vec2::zero(),
        };
        let viewport = Viewport::new(1000.0, 500.0);

        // 世界半径 2.0 → 200 像素 → 200/1000 = 0.2
        let projection = project(&camera, Vec3::zero(), 2.0, viewport);
        assert!((projection.radius_uv - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_offscreen_target_is_allowed() {
        let camera = ScaledCamera {
            pixels_per_unit: 1.0,
            offset: Vec2::zero(),
        };
        let viewport = Viewport::new(100.0, 100.0);

        // 屏幕外的目标产生超出 [0,1] 的中心坐标，不是错误
        let projection = project(&camera, Vec3::new(-50.0, 250.0, 0.0), 1.0, viewport);
        assert!(projection.center_uv.x < 0.0);
        assert!(projection.center_uv.y > 1.0);
    }

    #[test]
    fn test_negative_radius_treated_as_zero() {
        let camera = ScaledCamera {
            pixels_per_unit: 100.0,
            offset: Vec2::zero(),
        };
        let viewport = Viewport::new(1000.0, 500.0);

        let projection = project(&camera, Vec3::zero(), -5.0, viewport);
        assert_eq!(projection.radius_uv, 0.0);
    }
}
