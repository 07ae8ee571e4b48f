//! # Camera 模块
//!
//! 透视场景相机：实现 spotlight-core 的 [`SceneCamera`] 契约。
//!
//! 视图/投影矩阵用 glam 直接构建，不经过渲染上下文，因此投影
//! 数学可以在无 GPU 的测试环境里独立验证。演示程序通过
//! [`PerspectiveCamera::to_macroquad`] 把同一组参数交给场景渲染，
//! 保证 3D 画面与遮罩圆孔用的是同一套投影。

use macroquad::camera::Camera3D;
use macroquad::math::{Mat4, Vec3 as MqVec3, Vec4};
use spotlight_core::{SceneCamera, Vec2 as CoreVec2, Vec3 as CoreVec3, Viewport};

/// 透视相机
#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    /// 相机位置（世界坐标）
    pub position: MqVec3,
    /// 注视点（世界坐标）
    pub look_at: MqVec3,
    /// 上方向
    pub up: MqVec3,
    /// 垂直视场角（弧度）
    pub fov_y: f32,
    /// 近裁剪面
    pub z_near: f32,
    /// 远裁剪面
    pub z_far: f32,
    /// 当前视口（像素）
    viewport: Viewport,
}

impl PerspectiveCamera {
    /// 创建新的透视相机（45° 视场角，Y 轴向上）
    pub fn new(position: MqVec3, look_at: MqVec3, viewport: Viewport) -> Self {
        Self {
            position,
            look_at,
            up: MqVec3::Y,
            fov_y: 45.0_f32.to_radians(),
            z_near: 0.1,
            z_far: 100.0,
            viewport,
        }
    }

    /// 更新视口（窗口尺寸变化时每帧调用）
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// 当前视口
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// 视图 × 投影矩阵
    fn view_projection(&self) -> Mat4 {
        let aspect = if self.viewport.is_degenerate() {
            1.0
        } else {
            self.viewport.aspect_ratio()
        };
        let projection = Mat4::perspective_rh_gl(self.fov_y, aspect, self.z_near, self.z_far);
        let view = Mat4::look_at_rh(self.position, self.look_at, self.up);
        projection * view
    }

    /// 转换为 macroquad 场景相机（演示程序渲染 3D 场景用）
    pub fn to_macroquad(&self) -> Camera3D {
        Camera3D {
            position: self.position,
            target: self.look_at,
            up: self.up,
            ..Default::default()
        }
    }
}

impl SceneCamera for PerspectiveCamera {
    /// 世界坐标 → 屏幕像素坐标
    ///
    /// 相机正后方的点透视除法会产生翻转的坐标；按契约容忍，
    /// 结果退化为屏幕外位置，不报错。
    fn world_to_screen(&self, point: CoreVec3) -> CoreVec2 {
        let clip = self.view_projection() * Vec4::new(point.x, point.y, point.z, 1.0);

        // 裁剪空间 w 接近零（点落在相机平面上）时避免除零
        let w = if clip.w.abs() <= f32::EPSILON {
            f32::EPSILON
        } else {
            clip.w
        };
        let ndc_x = clip.x / w;
        let ndc_y = clip.y / w;

        // NDC [-1,1] → 像素坐标，y 轴翻转（屏幕原点在左上角）
        CoreVec2::new(
            (ndc_x * 0.5 + 0.5) * self.viewport.width,
            (1.0 - (ndc_y * 0.5 + 0.5)) * self.viewport.height,
        )
    }

    fn right_axis(&self) -> CoreVec3 {
        let forward = (self.look_at - self.position).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        CoreVec3::new(right.x, right.y, right.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec3;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(
            vec3(0.0, 0.0, 5.0),
            vec3(0.0, 0.0, 0.0),
            Viewport::new(1280.0, 720.0),
        )
    }

    #[test]
    fn test_look_at_point_projects_to_viewport_center() {
        let camera = camera();
        let screen = camera.world_to_screen(CoreVec3::zero());
        assert!((screen.x - 640.0).abs() < 1e-3);
        assert!((screen.y - 360.0).abs() < 1e-3);
    }

    #[test]
    fn test_right_axis_for_minus_z_view() {
        // 沿 -Z 看、Y 向上的相机：右轴是 +X
        let camera = camera();
        let right = camera.right_axis();
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);
        assert!(right.z.abs() < 1e-6);
    }

    #[test]
    fn test_right_offset_lands_right_of_center() {
        let camera = camera();
        let center = camera.world_to_screen(CoreVec3::zero());
        let offset = camera.world_to_screen(CoreVec3::new(1.0, 0.0, 0.0));
        assert!(offset.x > center.x);
        // 纯水平偏移不改变屏幕 y
        assert!((offset.y - center.y).abs() < 1e-3);
    }

    #[test]
    fn test_point_above_lands_above_center() {
        // 世界 +Y 在屏幕上是向上，即像素 y 更小
        let camera = camera();
        let center = camera.world_to_screen(CoreVec3::zero());
        let above = camera.world_to_screen(CoreVec3::new(0.0, 1.0, 0.0));
        assert!(above.y < center.y);
    }

    #[test]
    fn test_behind_camera_does_not_panic() {
        let camera = camera();
        let screen = camera.world_to_screen(CoreVec3::new(0.0, 0.0, 100.0));
        // 相机正后方：结果是有限值（可能在屏幕外），不是错误
        assert!(screen.x.is_finite());
        assert!(screen.y.is_finite());
    }

    #[test]
    fn test_viewport_update() {
        let mut camera = camera();
        camera.set_viewport(Viewport::new(1920.0, 1080.0));
        let screen = camera.world_to_screen(CoreVec3::zero());
        assert!((screen.x - 960.0).abs() < 1e-3);
        assert!((screen.y - 540.0).abs() < 1e-3);
    }
}
