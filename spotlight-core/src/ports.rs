//! # Ports 模块
//!
//! 核心与外部协作者之间的契约接口。
//!
//! 核心不直接依赖任何场景/渲染实现，宿主通过实现这些 trait
//! 把相机投影与遮罩绘制接进来：
//!
//! - [`SceneCamera`]: 世界坐标 → 屏幕像素坐标的投影
//! - [`OverlayBackend`]: 消费每帧着色参数快照的渲染后端
//! - [`Viewport`]: 视口尺寸（像素），按帧传入

use crate::math::{Vec2, Vec3};
use crate::params::ShadingParameters;

/// 场景相机契约
///
/// 要求对任意有限输入点有定义：目标在屏幕外甚至相机正后方时，
/// 返回值可以是任意（含屏幕外）像素坐标，但不得 panic；
/// 控制器把这种结果优雅降级为屏幕外的圆孔。
pub trait SceneCamera {
    /// 把世界坐标点投影为屏幕像素坐标
    fn world_to_screen(&self, point: Vec3) -> Vec2;

    /// 相机本地"右"轴（世界坐标系下的单位向量）
    ///
    /// 投影器沿此轴偏移目标点，用两点投影法测量世界半径在
    /// 屏幕上的投影长度。
    fn right_axis(&self) -> Vec3;
}

/// 视口尺寸（像素）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// 创建新的视口
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// 是否退化（零/负尺寸或非有限值）
    ///
    /// 退化视口的帧更新会被整帧跳过，视口恢复有效后自动继续。
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// 宽高比（宽 / 高）
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// 较小边的一半
    ///
    /// 用作动画过渡的起始半径：保证圆孔从接近全屏的外包范围
    /// 向目标收拢，而不是从一个点放大。
    pub fn half_extent(&self) -> f32 {
        self.width.min(self.height) * 0.5
    }
}

/// 渲染后端契约
///
/// 后端负责把着色参数应用到实际的材质/着色器上。后端不持有
/// 控制器状态，只消费每帧快照。
pub trait OverlayBackend {
    /// 后端是否支持所需的着色输入
    ///
    /// 控制器初始化时检查一次；不支持则控制器自我禁用并返回
    /// 诊断错误，不尝试降级渲染路径。
    fn supports_shading_contract(&self) -> bool;

    /// 应用本帧的着色参数快照
    fn apply(&mut self, params: &ShadingParameters);

    /// 设置遮罩整体可见性
    fn set_visible(&mut self, visible: bool);
}
