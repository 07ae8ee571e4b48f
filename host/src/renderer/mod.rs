//! # Renderer 模块
//!
//! 聚光灯遮罩的渲染层。
//!
//! ## 渲染顺序
//!
//! 1. 宿主自行渲染 3D 场景
//! 2. 控制器 `update` 推送着色参数快照到 [`MaterialBackend`]
//! 3. [`MaterialBackend::draw`] 用自定义材质绘制全屏遮罩，
//!    fragment shader 按距离剔除出圆孔

mod backend;
mod spotlight_material;

pub use backend::MaterialBackend;
pub use spotlight_material::SpotlightMaterial;
