//! # Host
//!
//! spotlight-core 的 macroquad 宿主层。
//!
//! 核心是纯逻辑库，本 crate 提供它需要的两个协作者实现：
//!
//! - [`PerspectiveCamera`]：透视投影相机（`SceneCamera` 契约）
//! - [`MaterialBackend`]：自定义材质渲染后端（`OverlayBackend` 契约）
//!
//! 演示程序入口见 `src/main.rs`。

pub mod camera;
pub mod renderer;

pub use camera::PerspectiveCamera;
pub use renderer::{MaterialBackend, SpotlightMaterial};
