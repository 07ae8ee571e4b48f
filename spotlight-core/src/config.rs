//! # Config 模块
//!
//! 聚光灯遮罩的配置项，集中管理所有默认值。
//!
//! ## 配置优先级
//!
//! 1. 运行期 setter（最高，见 [`crate::controller::SpotlightController`]）
//! 2. 配置文件 (JSON)
//! 3. 默认值（最低）

use serde::{Deserialize, Serialize};

use crate::error::{SpotlightError, SpotlightResult};
use crate::params::TintColor;

/// 聚光灯配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotlightConfig {
    /// 目标圆孔半径（世界单位）
    #[serde(default = "default_hole_radius")]
    pub target_hole_radius: f32,

    /// 目标遮罩不透明度 (0.0 - 1.0)
    #[serde(default = "default_background_opacity")]
    pub target_background_opacity: f32,

    /// 边缘渐变带宽（归一化，0.0 - 1.0）
    ///
    /// 0.0 表示硬边圆孔。
    #[serde(default = "default_fade_distance")]
    pub fade_distance: f32,

    /// 遮罩基色（alpha 分量运行期由当前不透明度覆写）
    #[serde(default)]
    pub tint: TintColor,

    /// 遮罩纹理句柄（可选，由渲染后端解析；缺省为纯色遮罩）
    #[serde(default)]
    pub texture: Option<String>,

    /// 设计分辨率宽度
    ///
    /// 仅在尚未观测到有效视口时，用于推导动画起始半径的兜底值。
    #[serde(default = "default_design_width")]
    pub design_width: f32,

    /// 设计分辨率高度
    #[serde(default = "default_design_height")]
    pub design_height: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            target_hole_radius: default_hole_radius(),
            target_background_opacity: default_background_opacity(),
            fade_distance: default_fade_distance(),
            tint: TintColor::default(),
            texture: None,
            design_width: default_design_width(),
            design_height: default_design_height(),
        }
    }
}

impl SpotlightConfig {
    /// 从 JSON 文本解析配置
    ///
    /// 解析成功后立即做范围修正（见 [`SpotlightConfig::sanitized`]）。
    pub fn from_json(text: &str) -> SpotlightResult<Self> {
        let config: Self =
            serde_json::from_str(text).map_err(|e| SpotlightError::InvalidConfig {
                message: e.to_string(),
            })?;
        Ok(config.sanitized())
    }

    /// 返回范围修正后的配置
    ///
    /// 与运行期 setter 的钳制策略一致：半径非负、不透明度与
    /// 渐变带宽落在 [0, 1]，静默修正而不拒绝。
    pub fn sanitized(mut self) -> Self {
        self.target_hole_radius = self.target_hole_radius.max(0.0);
        self.target_background_opacity = self.target_background_opacity.clamp(0.0, 1.0);
        self.fade_distance = self.fade_distance.clamp(0.0, 1.0);
        self.design_width = self.design_width.max(1.0);
        self.design_height = self.design_height.max(1.0);
        self
    }
}

fn default_hole_radius() -> f32 {
    1.0
}

fn default_background_opacity() -> f32 {
    0.8
}

fn default_fade_distance() -> f32 {
    0.1
}

fn default_design_width() -> f32 {
    1920.0
}

fn default_design_height() -> f32 {
    1080.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpotlightConfig::default();
        assert_eq!(config.target_hole_radius, 1.0);
        assert_eq!(config.target_background_opacity, 0.8);
        assert_eq!(config.fade_distance, 0.1);
        assert_eq!(config.tint, TintColor::BLACK);
        assert_eq!(config.texture, None);
        assert_eq!(config.design_width, 1920.0);
        assert_eq!(config.design_height, 1080.0);
    }

    #[test]
    fn test_from_json_partial() {
        // 未给出的字段回落到默认值
        let config = SpotlightConfig::from_json(r#"{ "target_hole_radius": 2.5 }"#).unwrap();
        assert_eq!(config.target_hole_radius, 2.5);
        assert_eq!(config.target_background_opacity, 0.8);
        assert_eq!(config.fade_distance, 0.1);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = SpotlightConfig::from_json("not json");
        assert!(matches!(
            result,
            Err(SpotlightError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_sanitized_clamps_ranges() {
        let config = SpotlightConfig {
            target_hole_radius: -3.0,
            target_background_opacity: 1.7,
            fade_distance: -0.2,
            ..SpotlightConfig::default()
        }
        .sanitized();

        assert_eq!(config.target_hole_radius, 0.0);
        assert_eq!(config.target_background_opacity, 1.0);
        assert_eq!(config.fade_distance, 0.0);
    }
}
