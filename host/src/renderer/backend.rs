//! # Backend 模块
//!
//! [`OverlayBackend`] 的 macroquad 实现：持有聚光灯材质与遮罩基底
//! 纹理，消费控制器每帧推送的着色参数快照。
//!
//! 资源在 [`MaterialBackend::init`] 时一次性获取，随对象释放；
//! 初始化失败时 [`OverlayBackend::supports_shading_contract`] 返回
//! false，控制器据此自我禁用。

use macroquad::prelude::*;
use spotlight_core::{OverlayBackend, ShadingParameters};
use tracing::warn;

use super::spotlight_material::SpotlightMaterial;

/// macroquad 遮罩后端
pub struct MaterialBackend {
    /// 聚光灯材质
    material: SpotlightMaterial,
    /// 遮罩基底纹理（纯色遮罩用 1x1 白色像素）
    ///
    /// 快照里的纹理句柄（路径）留给宿主扩展解析；当前实现始终
    /// 使用纯色基底，颜色由 _tint 提供。
    overlay_texture: Option<Texture2D>,
    /// 最近一次应用的快照
    latest: Option<ShadingParameters>,
    /// 遮罩可见性
    visible: bool,
}

impl MaterialBackend {
    /// 创建新的后端（尚未获取 GPU 资源）
    pub fn new() -> Self {
        Self {
            material: SpotlightMaterial::new(),
            overlay_texture: None,
            latest: None,
            visible: false,
        }
    }

    /// 初始化：加载 shader 材质与基底纹理
    pub fn init(&mut self) -> Result<(), String> {
        self.material.init()?;
        self.overlay_texture = Some(Texture2D::from_rgba8(1, 1, &[255, 255, 255, 255]));
        Ok(())
    }

    /// 绘制遮罩（每帧在场景之后调用）
    ///
    /// 不可见、无快照或未初始化时静默跳过。
    pub fn draw(&self) {
        if !self.visible || !self.material.is_initialized() {
            return;
        }
        let (Some(params), Some(texture)) = (&self.latest, &self.overlay_texture) else {
            return;
        };
        self.material.draw(texture, params);
    }

    /// 最近一次应用的快照（调试用）
    pub fn latest_params(&self) -> Option<&ShadingParameters> {
        self.latest.as_ref()
    }
}

impl OverlayBackend for MaterialBackend {
    fn supports_shading_contract(&self) -> bool {
        self.material.is_initialized()
    }

    fn apply(&mut self, params: &ShadingParameters) {
        if params.texture.is_some() && self.latest.is_none() {
            // 首帧提示一次：纹理句柄未被解析
            warn!("着色参数携带纹理句柄，当前后端仅支持纯色基底");
        }
        self.latest = Some(params.clone());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for MaterialBackend {
    fn default() -> Self {
        Self::new()
    }
}
