//! # Library 模块
//!
//! 载入并校验特效目录文件。
//!
//! 目录文件是一份 JSON 文档，按展示顺序列出全部特效定义。
//! 结构解析与内容校验由 vfx-runtime 的 [`EffectCatalog`] 负责，
//! 这里只处理文件 IO 并把两类失败统一成载入错误。

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;
use vfx_runtime::{CatalogError, EffectCatalog};

/// 特效目录载入错误
#[derive(Error, Debug)]
pub enum LibraryError {
    /// 目录文件读取失败
    #[error("无法读取特效目录文件: {path} - {message}")]
    ReadFailed {
        /// 目录文件路径
        path: String,
        /// 错误消息
        message: String,
    },

    /// 目录内容无效
    #[error("特效目录无效: {path} - {source}")]
    Invalid {
        /// 目录文件路径
        path: String,
        /// 具体原因
        #[source]
        source: CatalogError,
    },
}

/// 从文件载入特效目录
///
/// 载入后立即校验，校验失败视为载入失败。
pub fn load_catalog(path: impl AsRef<Path>) -> Result<EffectCatalog, LibraryError> {
    let path = path.as_ref();
    let path_text = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|e| LibraryError::ReadFailed {
        path: path_text.clone(),
        message: e.to_string(),
    })?;

    let catalog = EffectCatalog::from_json(&content).map_err(|e| LibraryError::Invalid {
        path: path_text.clone(),
        source: e,
    })?;

    catalog.validate().map_err(|e| LibraryError::Invalid {
        path: path_text.clone(),
        source: e,
    })?;

    info!(path = %path_text, count = catalog.len(), "特效目录载入完成");
    Ok(catalog)
}
