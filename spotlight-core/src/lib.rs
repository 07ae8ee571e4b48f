//! # Spotlight Core
//!
//! 聚光灯遮罩（带柔边圆孔的全屏遮罩）的核心逻辑库。
//!
//! ## 架构概述
//!
//! `spotlight-core` 是纯逻辑核心，不依赖任何窗口或渲染引擎。
//! 它通过 **每帧快照模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                               Core
//!   │                                  │
//!   │── update(dt, camera, viewport) ─►│
//!   │                                  │ 推进过渡 → 投影 → 组快照
//!   │◄─ backend.apply(ShadingParameters)
//!   │◄─ Vec<SpotlightEvent> ───────────│
//! ```
//!
//! 宿主实现 [`SceneCamera`]（世界 → 屏幕像素投影）与
//! [`OverlayBackend`]（消费着色参数的材质/着色器），核心负责：
//!
//! - [`projector`]：两点投影法，把世界锚点 + 世界半径换算为
//!   归一化屏幕坐标下的圆孔参数
//! - [`controller`]：`Hidden/Showing/Shown/Hiding` 过渡状态机，
//!   按帧插值半径与不透明度
//! - [`shading`]：像素级圆孔剔除的数值规范（shader 的参考实现）
//!
//! ## 模块结构
//!
//! - [`math`]：轻量向量类型与标量插值
//! - [`easing`]：缓动函数（`smoothstep` 与时间缓动共用一套公式）
//! - [`target`]：外部持有的目标锚点与非拥有句柄
//! - [`ports`]：相机 / 视口 / 渲染后端的契约接口
//! - [`params`]：每帧着色参数快照
//! - [`projector`]：世界 → 归一化屏幕坐标的投影
//! - [`transition`]：过渡状态与纯函数推进
//! - [`controller`]：聚光灯控制器（状态机 + 每帧更新）
//! - [`shading`]：像素级遮罩不透明度的参考实现
//! - [`config`]：配置与默认值
//! - [`error`]：错误类型定义

pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod math;
pub mod params;
pub mod ports;
pub mod projector;
pub mod shading;
pub mod target;
pub mod transition;

// 重导出核心类型
pub use config::SpotlightConfig;
pub use controller::{AnimationArm, SpotlightController, SpotlightEvent, SpotlightPhase};
pub use easing::{EasingFunction, smoothstep};
pub use error::{SpotlightError, SpotlightResult};
pub use math::{Vec2, Vec3, lerp};
pub use params::{ShadingParameters, TintColor};
pub use ports::{OverlayBackend, SceneCamera, Viewport};
pub use projector::{Projection, project};
pub use target::{SpotlightTarget, TargetAnchor};
pub use transition::TransitionState;
