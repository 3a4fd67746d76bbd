//! # Error 模块
//!
//! 定义 vfx-runtime 中使用的错误类型。

use thiserror::Error;

/// 特效目录错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// 目录为空
    #[error("特效目录为空，至少需要一个特效定义")]
    Empty,

    /// 特效名称为空
    #[error("第 {index} 个特效定义的名称为空")]
    BlankName { index: usize },

    /// 特效名称重复
    #[error("特效名称 '{name}' 重复出现")]
    DuplicateName { name: String },

    /// JSON 解析失败
    #[error("无法解析目录 JSON - {message}")]
    Json { message: String },
}

/// 播放错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// 无效的选择索引
    #[error("无效的特效索引 {index}，有效范围是 0..{count}")]
    InvalidIndex { index: usize, count: usize },
}

/// vfx-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VfxError {
    /// 目录错误
    #[error("目录错误: {0}")]
    Catalog(#[from] CatalogError),

    /// 播放错误
    #[error("播放错误: {0}")]
    Playback(#[from] PlaybackError),
}

/// Result 类型别名
pub type VfxResult<T> = Result<T, VfxError>;
