//! # Target 模块
//!
//! 聚光灯目标锚点：世界坐标系中的关注点。
//!
//! 锚点由外部（场景/教程系统）持有并每帧移动；控制器只保留一个
//! 非拥有的句柄。锚点被外部释放后，句柄自动退化为"未绑定目标"的
//! 空闲状态，不产生错误。

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::math::Vec3;

/// 目标锚点（外部持有）
///
/// 使用 `Rc<RefCell<Vec3>>` 实现内部可变性：持有方可以每帧更新位置，
/// 控制器通过 [`SpotlightTarget`] 句柄读取最新值。
#[derive(Debug, Clone)]
pub struct TargetAnchor {
    position: Rc<RefCell<Vec3>>,
}

impl TargetAnchor {
    /// 创建新的锚点
    pub fn new(position: Vec3) -> Self {
        Self {
            position: Rc::new(RefCell::new(position)),
        }
    }

    /// 更新锚点位置
    pub fn set_position(&self, position: Vec3) {
        *self.position.borrow_mut() = position;
    }

    /// 读取当前位置
    pub fn position(&self) -> Vec3 {
        *self.position.borrow()
    }

    /// 创建非拥有句柄，供控制器绑定
    pub fn handle(&self) -> SpotlightTarget {
        SpotlightTarget {
            position: Rc::downgrade(&self.position),
        }
    }
}

/// 聚光灯目标句柄（非拥有）
///
/// 内部为 `Weak` 引用：锚点存活时可读取位置，锚点被释放后
/// [`SpotlightTarget::position`] 返回 `None`。
#[derive(Debug, Clone)]
pub struct SpotlightTarget {
    position: Weak<RefCell<Vec3>>,
}

impl SpotlightTarget {
    /// 读取目标当前位置
    ///
    /// # 返回
    /// - `Some(position)`: 锚点存活
    /// - `None`: 锚点已被外部释放
    pub fn position(&self) -> Option<Vec3> {
        self.position.upgrade().map(|p| *p.borrow())
    }

    /// 锚点是否仍然存活
    pub fn is_alive(&self) -> bool {
        self.position.strong_count() > 0
    }
}
