//! # Controller 模块
//!
//! 聚光灯遮罩控制器：持有过渡状态机，按帧推进并把投影结果
//! 推送给渲染后端。
//!
//! ## 状态机
//!
//! `Hidden → Showing → Shown → Hiding → Hidden`
//!
//! - `show()`/`hide()` 在武装了动画参数时启动在途过渡，否则瞬间跳变
//! - 过渡在途时再次触发会取消旧过渡，新过渡从**当前插值值**出发，
//!   保证画面连续、无跳变
//! - 所有状态变更发生在调用线程上，每帧一次 [`SpotlightController::update`]
//!   推进，无重入、无阻塞
//!
//! ## 动画武装（一次性标志）
//!
//! [`SpotlightController::with_animation`] 武装下一次 `show()`/`hide()`。
//! 标志在 `hide()` 完成后清除，`show()` 不清除。

use tracing::{debug, warn};

use crate::config::SpotlightConfig;
use crate::easing::EasingFunction;
use crate::error::{SpotlightError, SpotlightResult};
use crate::params::ShadingParameters;
use crate::ports::{OverlayBackend, SceneCamera, Viewport};
use crate::projector;
use crate::target::SpotlightTarget;
use crate::transition::TransitionState;

/// 聚光灯状态机阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpotlightPhase {
    /// 完全隐藏
    #[default]
    Hidden,
    /// 显示过渡在途
    Showing,
    /// 完全显示
    Shown,
    /// 隐藏过渡在途
    Hiding,
}

/// 动画武装标志
///
/// 显式枚举而非裸布尔值，让"一次性"语义在类型上可见。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationArm {
    /// 未武装：下一次 show/hide 瞬间跳变
    NotArmed,
    /// 已武装：下一次 show/hide 使用这组动画参数
    Armed {
        /// 过渡时长（秒）
        duration: f32,
        /// 时间缓动函数
        easing: EasingFunction,
    },
}

/// 控制器事件
///
/// 由 [`SpotlightController::update`] 按帧返回，供宿主做教程步骤
/// 衔接等后续处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotlightEvent {
    /// show() 被调用
    ShowStarted,
    /// 显示过渡完成（瞬间显示时与 ShowStarted 同帧）
    ShowCompleted,
    /// hide() 被调用
    HideStarted,
    /// 隐藏过渡完成，遮罩不可见
    HideCompleted,
    /// 在途过渡被 skip() 跳到终点
    TransitionSkipped,
}

/// 聚光灯遮罩控制器
///
/// 独占持有过渡状态与可见性标志；投影器与渲染后端只消费每帧
/// 派生出的 [`ShadingParameters`] 快照。
#[derive(Debug)]
pub struct SpotlightController {
    /// 配置（运行期 setter 直接改写）
    config: SpotlightConfig,
    /// 目标句柄（非拥有，可悬空）
    target: Option<SpotlightTarget>,
    /// 当前阶段
    phase: SpotlightPhase,
    /// 过渡状态
    transition: TransitionState,
    /// 动画武装标志
    arm: AnimationArm,
    /// 遮罩是否可见（Hiding 期间仍为 true）
    overlay_visible: bool,
    /// 初始化检查失败后永久禁用
    disabled: bool,
    /// skip() 请求，下一帧推进时生效
    skip_requested: bool,
    /// 最近一次观测到的有效视口（推导过渡起始半径用）
    last_viewport: Option<Viewport>,
    /// 待返回的事件队列
    events: Vec<SpotlightEvent>,
}

impl SpotlightController {
    /// 创建新的控制器
    ///
    /// 过渡状态初始化为静止：当前值与配置目标值一致，无动画。
    pub fn new(config: SpotlightConfig) -> Self {
        let config = config.sanitized();
        let transition =
            TransitionState::idle(config.target_hole_radius, config.target_background_opacity);
        Self {
            config,
            target: None,
            phase: SpotlightPhase::Hidden,
            transition,
            arm: AnimationArm::NotArmed,
            overlay_visible: false,
            disabled: false,
            skip_requested: false,
            last_viewport: None,
            events: Vec::new(),
        }
    }

    /// 初始化期的着色契约检查
    ///
    /// 后端不支持所需的着色输入时，控制器自我禁用并返回诊断错误；
    /// 不尝试降级渲染路径。
    ///
    /// # 返回
    /// - `Ok(())`: 后端满足契约
    /// - `Err(ShadingContractUnsupported)`: 控制器已禁用
    pub fn init<B: OverlayBackend>(&mut self, backend: &B) -> SpotlightResult<()> {
        if backend.supports_shading_contract() {
            Ok(())
        } else {
            self.disabled = true;
            warn!("渲染后端不满足着色契约，聚光灯控制器已禁用");
            Err(SpotlightError::ShadingContractUnsupported)
        }
    }

    // ========== 公开 setter（链式） ==========

    /// 绑定目标锚点句柄
    pub fn set_target(&mut self, target: SpotlightTarget) -> &mut Self {
        self.target = Some(target);
        self
    }

    /// 解除目标绑定
    ///
    /// 之后的帧更新进入空闲跳过状态，不是错误。
    pub fn clear_target(&mut self) -> &mut Self {
        self.target = None;
        self
    }

    /// 设置目标圆孔半径（世界单位，负值钳制为 0）
    ///
    /// 无在途过渡且处于显示状态时立即生效；显示过渡在途时改写
    /// 过渡终点，完成后落在新值上。
    pub fn set_radius(&mut self, radius: f32) -> &mut Self {
        let radius = radius.max(0.0);
        self.config.target_hole_radius = radius;

        if self.transition.is_active() {
            if self.phase == SpotlightPhase::Showing {
                self.transition.end_radius = radius;
            }
        } else if self.phase == SpotlightPhase::Shown {
            self.transition =
                TransitionState::idle(radius, self.transition.current_opacity);
        }
        self
    }

    /// 设置目标遮罩不透明度（钳制到 [0, 1]）
    pub fn set_opacity(&mut self, opacity: f32) -> &mut Self {
        let opacity = opacity.clamp(0.0, 1.0);
        self.config.target_background_opacity = opacity;

        if self.transition.is_active() {
            if self.phase == SpotlightPhase::Showing {
                self.transition.end_opacity = opacity;
            }
        } else if self.phase == SpotlightPhase::Shown {
            self.transition =
                TransitionState::idle(self.transition.current_radius, opacity);
        }
        self
    }

    /// 设置边缘渐变带宽（归一化，钳制到 [0, 1]）
    pub fn set_fade_distance(&mut self, fade_distance: f32) -> &mut Self {
        self.config.fade_distance = fade_distance.clamp(0.0, 1.0);
        self
    }

    /// 武装下一次 show/hide 的动画参数（默认 SmoothStep 缓动）
    pub fn with_animation(&mut self, duration: f32) -> &mut Self {
        self.with_animation_eased(duration, EasingFunction::default())
    }

    /// 武装下一次 show/hide 的动画参数，并指定缓动函数
    pub fn with_animation_eased(&mut self, duration: f32, easing: EasingFunction) -> &mut Self {
        self.arm = AnimationArm::Armed {
            duration: duration.max(0.0),
            easing,
        };
        self
    }

    // ========== show / hide ==========

    /// 显示聚光灯遮罩
    ///
    /// 已武装动画时启动显示过渡：起始半径为视口较小边的一半
    /// （圆孔从近全屏向目标收拢）、起始不透明度 0；若已有过渡在途，
    /// 起点改取当前插值值以保证连续。未武装时瞬间跳到目标值。
    ///
    /// 两种路径都立即把遮罩标记为可见。武装标志不在此处清除。
    pub fn show(&mut self) {
        if self.disabled {
            return;
        }
        self.events.push(SpotlightEvent::ShowStarted);
        self.overlay_visible = true;

        match self.arm {
            AnimationArm::Armed { duration, easing } => {
                let (start_radius, start_opacity) = if self.transition.is_active() {
                    // 在途过渡被取消：从当前值出发，画面连续
                    (
                        self.transition.current_radius,
                        self.transition.current_opacity,
                    )
                } else {
                    (self.outer_bound_radius(), 0.0)
                };
                self.transition = TransitionState::between(
                    start_radius,
                    self.config.target_hole_radius,
                    start_opacity,
                    self.config.target_background_opacity,
                    duration,
                    easing,
                );
                self.phase = SpotlightPhase::Showing;
                debug!(duration, "聚光灯显示过渡开始");
            }
            AnimationArm::NotArmed => {
                self.transition = TransitionState::idle(
                    self.config.target_hole_radius,
                    self.config.target_background_opacity,
                );
                self.phase = SpotlightPhase::Shown;
                self.events.push(SpotlightEvent::ShowCompleted);
                debug!("聚光灯瞬间显示");
            }
        }
    }

    /// 隐藏聚光灯遮罩
    ///
    /// 已武装动画时从**当前**半径/不透明度过渡到
    /// （视口半边长, 0），完成后遮罩不可见且武装标志清除。
    /// 未武装时立即不可见。
    pub fn hide(&mut self) {
        if self.disabled {
            return;
        }
        self.events.push(SpotlightEvent::HideStarted);

        match self.arm {
            AnimationArm::Armed { duration, easing } => {
                self.transition = TransitionState::between(
                    self.transition.current_radius,
                    self.outer_bound_radius(),
                    self.transition.current_opacity,
                    0.0,
                    duration,
                    easing,
                );
                self.phase = SpotlightPhase::Hiding;
                debug!(duration, "聚光灯隐藏过渡开始");
            }
            AnimationArm::NotArmed => {
                self.overlay_visible = false;
                self.phase = SpotlightPhase::Hidden;
                self.transition = TransitionState::idle(self.config.target_hole_radius, 0.0);
                self.events.push(SpotlightEvent::HideCompleted);
                debug!("聚光灯瞬间隐藏");
            }
        }
    }

    /// 把在途过渡跳到终点
    ///
    /// 下一帧推进时生效（单帧完成，含相应的完成动作）。
    /// 无在途过渡时是空操作。
    pub fn skip(&mut self) {
        if self.transition.is_active() {
            self.skip_requested = true;
        }
    }

    // ========== 每帧更新 ==========

    /// 推进一帧
    ///
    /// 流程：推进在途过渡（含完成动作）→ 投影当前目标与半径 →
    /// 推送着色参数快照到后端。
    ///
    /// 以下情况静默跳过本帧（空闲状态，不是错误）：
    /// - 控制器已禁用或遮罩不可见
    /// - 目标未绑定或锚点已被外部释放
    /// - 视口退化（恢复有效后自动继续）
    ///
    /// # 参数
    /// - `dt`: 帧间隔（秒，外部时钟提供，负值按 0 处理）
    ///
    /// # 返回
    /// 本帧产生的事件列表
    pub fn update<C: SceneCamera, B: OverlayBackend>(
        &mut self,
        dt: f32,
        camera: &C,
        viewport: Viewport,
        backend: &mut B,
    ) -> Vec<SpotlightEvent> {
        if self.disabled {
            return std::mem::take(&mut self.events);
        }

        if !viewport.is_degenerate() {
            self.last_viewport = Some(viewport);
        }

        // 可见性按帧同步推送（快照语义，后端不持有控制器状态）
        backend.set_visible(self.overlay_visible);
        if !self.overlay_visible {
            return std::mem::take(&mut self.events);
        }

        // 1. 推进在途过渡
        if self.transition.is_active() {
            if self.skip_requested {
                self.transition = self.transition.completed();
                self.events.push(SpotlightEvent::TransitionSkipped);
            } else {
                self.transition = self.transition.advanced(dt);
            }
            if !self.transition.is_active() {
                self.finish_transition(backend);
            }
        }
        self.skip_requested = false;

        if !self.overlay_visible {
            // 隐藏过渡在本帧完成
            return std::mem::take(&mut self.events);
        }

        // 2. 前置条件检查：目标与视口
        let Some(position) = self.target.as_ref().and_then(|t| t.position()) else {
            return std::mem::take(&mut self.events);
        };
        if !position.is_finite() {
            // 相机契约只覆盖有限点
            warn!("目标锚点坐标非有限值，跳过本帧聚光灯更新");
            return std::mem::take(&mut self.events);
        }
        if viewport.is_degenerate() {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "视口退化，跳过本帧聚光灯更新"
            );
            return std::mem::take(&mut self.events);
        }

        // 3. 投影并推送着色参数
        let projection =
            projector::project(camera, position, self.transition.current_radius, viewport);
        let params = ShadingParameters {
            center_uv: projection.center_uv,
            radius_uv: projection.radius_uv,
            aspect_ratio: projection.aspect_ratio,
            fade_distance_uv: self.config.fade_distance,
            tint: self.config.tint.with_alpha(self.transition.current_opacity),
            texture: self.config.texture.clone(),
        };
        backend.apply(&params);

        std::mem::take(&mut self.events)
    }

    /// 过渡完成时的收尾动作
    fn finish_transition<B: OverlayBackend>(&mut self, backend: &mut B) {
        match self.phase {
            SpotlightPhase::Showing => {
                self.phase = SpotlightPhase::Shown;
                self.events.push(SpotlightEvent::ShowCompleted);
                debug!("聚光灯显示过渡完成");
            }
            SpotlightPhase::Hiding => {
                self.phase = SpotlightPhase::Hidden;
                self.overlay_visible = false;
                backend.set_visible(false);
                // 隐藏完成后清除武装标志（一次性语义的消费点）
                self.arm = AnimationArm::NotArmed;
                self.events.push(SpotlightEvent::HideCompleted);
                debug!("聚光灯隐藏过渡完成");
            }
            _ => {}
        }
    }

    /// 动画过渡的外包起始半径
    ///
    /// 取最近观测到的视口较小边的一半；尚无有效视口时回落到
    /// 配置的设计分辨率。
    fn outer_bound_radius(&self) -> f32 {
        self.last_viewport
            .unwrap_or(Viewport::new(self.config.design_width, self.config.design_height))
            .half_extent()
    }

    // ========== 查询方法 ==========

    /// 当前阶段
    pub fn phase(&self) -> SpotlightPhase {
        self.phase
    }

    /// 遮罩是否可见（Hiding 期间仍为 true）
    pub fn is_visible(&self) -> bool {
        self.overlay_visible
    }

    /// 是否有过渡在途
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    /// 当前圆孔半径（世界单位，可能处于插值中）
    pub fn current_radius(&self) -> f32 {
        self.transition.current_radius
    }

    /// 当前遮罩不透明度（可能处于插值中）
    pub fn current_opacity(&self) -> f32 {
        self.transition.current_opacity
    }

    /// 配置的目标圆孔半径
    pub fn target_radius(&self) -> f32 {
        self.config.target_hole_radius
    }

    /// 配置的目标不透明度
    pub fn target_opacity(&self) -> f32 {
        self.config.target_background_opacity
    }

    /// 配置的渐变带宽
    pub fn fade_distance(&self) -> f32 {
        self.config.fade_distance
    }

    /// 武装标志当前状态
    pub fn animation_arm(&self) -> AnimationArm {
        self.arm
    }

    /// 控制器是否已被禁用（初始化契约检查失败）
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Default for SpotlightController {
    fn default() -> Self {
        Self::new(SpotlightConfig::default())
    }
}
