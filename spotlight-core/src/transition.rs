//! # Transition 模块
//!
//! 半径/透明度过渡的状态数据与推进逻辑。
//!
//! 过渡是一个 `Copy` 的纯数据结构，由纯函数
//! [`TransitionState::advanced`] 按帧推进：没有挂起的执行上下文，
//! 没有调度器，可以脱离渲染循环直接测试。
//!
//! ## 不变量
//!
//! - 在途时 `elapsed ≤ duration`
//! - `current_*` 始终落在本次过渡的起止区间内，不越过终点

use crate::easing::EasingFunction;

/// 过渡状态
///
/// 同时携带半径与透明度两条插值轨道，共享一条时间轴。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionState {
    /// 起始半径（世界单位）
    pub start_radius: f32,
    /// 目标半径（世界单位）
    pub end_radius: f32,
    /// 起始不透明度 (0.0 - 1.0)
    pub start_opacity: f32,
    /// 目标不透明度 (0.0 - 1.0)
    pub end_opacity: f32,
    /// 当前半径
    pub current_radius: f32,
    /// 当前不透明度
    pub current_opacity: f32,
    /// 过渡时长（秒）
    pub duration: f32,
    /// 已经过的时间（秒）
    pub elapsed: f32,
    /// 时间缓动函数
    pub easing: EasingFunction,
    /// 是否在途
    active: bool,
}

impl TransitionState {
    /// 创建静止状态：当前值与目标值相同，无动画
    pub fn idle(radius: f32, opacity: f32) -> Self {
        Self {
            start_radius: radius,
            end_radius: radius,
            start_opacity: opacity,
            end_opacity: opacity,
            current_radius: radius,
            current_opacity: opacity,
            duration: 0.0,
            elapsed: 0.0,
            easing: EasingFunction::default(),
            active: false,
        }
    }

    /// 创建在途过渡：从起点值出发，`elapsed = 0`
    ///
    /// `duration == 0` 的过渡仍然标记为在途，在下一次推进时
    /// 单帧跳到终点值。
    pub fn between(
        start_radius: f32,
        end_radius: f32,
        start_opacity: f32,
        end_opacity: f32,
        duration: f32,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_radius,
            end_radius,
            start_opacity,
            end_opacity,
            current_radius: start_radius,
            current_opacity: start_opacity,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            active: true,
        }
    }

    /// 是否在途
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 原始时间进度 (0.0 - 1.0，未缓动)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// 推进一帧（纯函数）
    ///
    /// # 参数
    /// - `dt`: 帧间隔（秒，负值按 0 处理）
    ///
    /// # 返回
    /// 推进后的新状态。`elapsed ≥ duration` 时精确落在终点值并
    /// 结束在途标记，不会越过终点。
    #[must_use]
    pub fn advanced(self, dt: f32) -> Self {
        if !self.active {
            return self;
        }

        let elapsed = self.elapsed + dt.max(0.0);
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.completed();
        }

        let t = elapsed / self.duration;
        Self {
            current_radius: self.easing.interpolate(self.start_radius, self.end_radius, t),
            current_opacity: self
                .easing
                .interpolate(self.start_opacity, self.end_opacity, t),
            elapsed,
            ..self
        }
    }

    /// 立即落到终点值并结束在途状态
    #[must_use]
    pub fn completed(self) -> Self {
        Self {
            current_radius: self.end_radius,
            current_opacity: self.end_opacity,
            elapsed: self.duration,
            active: false,
            ..self
        }
    }
}
