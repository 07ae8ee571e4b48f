//! # SpotlightMaterial 模块
//!
//! 聚光灯遮罩的自定义材质：fragment shader 对每个像素做
//! 距离-smoothstep 的圆孔剔除。
//!
//! 数值策略与 `spotlight_core::shading` 的参考实现逐式一致：
//! - 偏移 x 分量乘以宽高比，非正方形视口上圆孔保持正圆
//! - `_fade_distance > 0`：smoothstep 柔边
//! - `_fade_distance == 0`：step 硬边（规避零宽带的除零）

use macroquad::miniquad::{BlendFactor, BlendState, BlendValue, Equation, PipelineParams};
use macroquad::prelude::*;
use spotlight_core::ShadingParameters;

/// 遮罩顶点 shader
const VERTEX_SHADER: &str = r#"
#version 100
attribute vec3 position;
attribute vec2 texcoord;
attribute vec4 color0;

varying lowp vec2 uv;
varying lowp vec4 color;

uniform mat4 Model;
uniform mat4 Projection;

void main() {
    gl_Position = Projection * Model * vec4(position, 1);
    color = color0 / 255.0;
    uv = texcoord;
}
"#;

/// 遮罩片段 shader
///
/// 逐像素圆孔剔除：
/// - _hole_center: 圆孔中心（归一化屏幕坐标）
/// - _hole_radius: 圆孔半径（以视口宽度归一化）
/// - _aspect_ratio: 视口宽高比
/// - _fade_distance: 边缘渐变带宽（归一化）
/// - _tint: 遮罩色，alpha 即整体不透明度
const FRAGMENT_SHADER: &str = r#"
#version 100
precision mediump float;

varying vec2 uv;
varying vec4 color;

uniform sampler2D Texture;      // 遮罩基底纹理
uniform vec2 _hole_center;      // 圆孔中心 (UV)
uniform float _hole_radius;     // 圆孔半径 (UV)
uniform float _aspect_ratio;    // 视口宽高比
uniform float _fade_distance;   // 渐变带宽 (UV)
uniform vec4 _tint;             // 遮罩色 (RGBA)

void main() {
    vec4 base = texture2D(Texture, uv);

    // 到圆孔中心的偏移；x 按宽高比矫正，圆孔在非正方形视口上保持正圆
    vec2 offset = uv - _hole_center;
    offset.x *= _aspect_ratio;
    float dist = length(offset);

    // 孔内完全透明，孔外完全不透明，渐变带内 smoothstep 过渡
    float cutout;
    if (_fade_distance > 0.0001) {
        cutout = smoothstep(_hole_radius - _fade_distance, _hole_radius, dist);
    } else {
        // 零宽渐变带：硬边
        cutout = step(_hole_radius, dist);
    }

    gl_FragColor = vec4(base.rgb * _tint.rgb, base.a * _tint.a * cutout);
}
"#;

/// 聚光灯材质管理器
pub struct SpotlightMaterial {
    /// shader 材质
    material: Option<Material>,
}

impl SpotlightMaterial {
    /// 创建新的材质管理器（尚未获取 GPU 资源）
    pub fn new() -> Self {
        Self { material: None }
    }

    /// 初始化 shader（获取材质资源）
    ///
    /// 材质随本对象的生命周期释放，不改动任何全局共享资源。
    pub fn init(&mut self) -> Result<(), String> {
        match load_material(
            ShaderSource::Glsl {
                vertex: VERTEX_SHADER,
                fragment: FRAGMENT_SHADER,
            },
            MaterialParams {
                pipeline_params: PipelineParams {
                    // 标准 source-over alpha 混合
                    color_blend: Some(BlendState::new(
                        Equation::Add,
                        BlendFactor::Value(BlendValue::SourceAlpha),
                        BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
                    )),
                    ..Default::default()
                },
                uniforms: vec![
                    UniformDesc::new("_hole_center", UniformType::Float2),
                    UniformDesc::new("_hole_radius", UniformType::Float1),
                    UniformDesc::new("_aspect_ratio", UniformType::Float1),
                    UniformDesc::new("_fade_distance", UniformType::Float1),
                    UniformDesc::new("_tint", UniformType::Float4),
                ],
                ..Default::default()
            },
        ) {
            Ok(material) => {
                self.material = Some(material);
                println!("✅ Spotlight shader 初始化成功");
                Ok(())
            }
            Err(e) => {
                eprintln!("❌ Spotlight shader 初始化失败: {}", e);
                Err(format!("Shader 初始化失败: {}", e))
            }
        }
    }

    /// 检查是否已初始化
    pub fn is_initialized(&self) -> bool {
        self.material.is_some()
    }

    /// 绘制带圆孔剔除的全屏遮罩
    ///
    /// # 参数
    /// - `texture`: 遮罩基底纹理（纯色遮罩用 1x1 白色纹理）
    /// - `params`: 本帧着色参数快照
    pub fn draw(&self, texture: &Texture2D, params: &ShadingParameters) {
        if let Some(material) = &self.material {
            material.set_uniform(
                "_hole_center",
                vec2(params.center_uv.x, params.center_uv.y),
            );
            material.set_uniform("_hole_radius", params.radius_uv);
            material.set_uniform("_aspect_ratio", params.aspect_ratio);
            material.set_uniform("_fade_distance", params.fade_distance_uv);
            material.set_uniform(
                "_tint",
                vec4(params.tint.r, params.tint.g, params.tint.b, params.tint.a),
            );

            gl_use_material(material);
            draw_texture_ex(
                texture,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(screen_width(), screen_height())),
                    ..Default::default()
                },
            );
            gl_use_default_material();
        } else {
            panic!("Spotlight shader 未初始化");
        }
    }
}

impl Default for SpotlightMaterial {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 材质本体需要 GL 上下文，这里只校验 shader 源与契约声明的一致性

    #[test]
    fn test_fragment_declares_contract_uniforms() {
        for name in [
            "_hole_center",
            "_hole_radius",
            "_aspect_ratio",
            "_fade_distance",
            "_tint",
        ] {
            assert!(
                FRAGMENT_SHADER.contains(name),
                "fragment shader 缺少 uniform: {}",
                name
            );
        }
    }

    #[test]
    fn test_fragment_guards_zero_fade_band() {
        // 零宽渐变带必须走 step 分支，不得除零
        assert!(FRAGMENT_SHADER.contains("step(_hole_radius, dist)"));
    }

    #[test]
    fn test_uninitialized_material() {
        let material = SpotlightMaterial::new();
        assert!(!material.is_initialized());
    }
}
