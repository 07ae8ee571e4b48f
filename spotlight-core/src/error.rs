//! # Error 模块
//!
//! 定义 spotlight-core 中使用的错误类型。
//!
//! 错误面有意很小：目标未绑定、视口暂时退化等属于正常空闲状态，
//! 按帧静默跳过，不算错误；被钳制的输入（透明度、半径、渐变带宽）
//! 静默修正，不拒绝。真正的错误只有初始化期能检出的配置问题。

use thiserror::Error;

/// spotlight-core 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpotlightError {
    /// 渲染后端不满足着色契约
    ///
    /// 初始化时检出一次；控制器自我禁用，不尝试降级渲染路径。
    #[error("渲染后端不支持所需的着色输入（hole_center/hole_radius/aspect_ratio/fade_distance）")]
    ShadingContractUnsupported,

    /// 配置解析失败
    #[error("配置解析失败: {message}")]
    InvalidConfig { message: String },
}

/// Result 类型别名
pub type SpotlightResult<T> = Result<T, SpotlightError>;
