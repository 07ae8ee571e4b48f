//! # Params 模块
//!
//! 每帧推送给渲染后端的遮罩着色参数快照。
//!
//! 快照是短生命周期数据：每帧由控制器重新计算，后端只读消费，
//! 不跨帧持有。

use serde::{Deserialize, Serialize};

use crate::math::Vec2;

/// 遮罩色（RGBA，分量 0.0 - 1.0）
///
/// alpha 分量由控制器每帧以当前过渡透明度覆写，配置中的 alpha
/// 只作为基色的一部分参与默认值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl TintColor {
    /// 纯黑
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// 纯白
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// 创建新的颜色
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// 替换 alpha 分量
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl Default for TintColor {
    fn default() -> Self {
        Self::BLACK
    }
}

/// 着色参数快照
///
/// 字段与渲染后端的 shader 输入一一对应：
/// - `center_uv`: 圆孔中心（归一化屏幕坐标，允许超出 [0,1]）
/// - `radius_uv`: 圆孔半径（以视口宽度归一化）
/// - `aspect_ratio`: 视口宽高比，shader 用于把椭圆矫正为正圆
/// - `fade_distance_uv`: 边缘渐变带宽（归一化）
/// - `tint`: 遮罩色，alpha 即当前整体不透明度
/// - `texture`: 遮罩纹理句柄（可选，由后端解析）
#[derive(Debug, Clone, PartialEq)]
pub struct ShadingParameters {
    pub center_uv: Vec2,
    pub radius_uv: f32,
    pub aspect_ratio: f32,
    pub fade_distance_uv: f32,
    pub tint: TintColor,
    pub texture: Option<String>,
}
