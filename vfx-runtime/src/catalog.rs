//! # Catalog 模块
//!
//! 特效目录：有序、以名称标识的特效定义注册表。
//!
//! 目录由宿主在启动时载入并校验，运行期间不可变。
//! 选择索引直接对应目录顺序，也就是选择列表的展示顺序。

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// 单个特效定义
///
/// 特效资产的不透明模板：控制器只关心名称与发射控制能力，
/// 实例化的具体方式由宿主引擎负责。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    /// 展示名称
    pub name: String,
    /// 实例是否带有发射控制开关
    ///
    /// `false` 表示资产缺少发射控制组件，播放阶段会被整体跳过，
    /// 实例保持未激活。
    #[serde(default = "default_emitter")]
    pub emitter: bool,
}

fn default_emitter() -> bool {
    true
}

impl EffectDefinition {
    /// 创建带发射控制的特效定义
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emitter: true,
        }
    }

    /// 创建缺少发射控制的特效定义
    pub fn without_emitter(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            emitter: false,
        }
    }
}

/// 特效目录
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectCatalog {
    /// 按展示顺序排列的特效定义
    #[serde(default)]
    pub effects: Vec<EffectDefinition>,
}

impl EffectCatalog {
    /// 从定义列表创建目录
    pub fn new(effects: Vec<EffectDefinition>) -> Self {
        Self { effects }
    }

    /// 从 JSON 文本解析目录
    ///
    /// 只做结构解析，内容校验由 [`EffectCatalog::validate`] 负责。
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(text).map_err(|e| CatalogError::Json {
            message: e.to_string(),
        })
    }

    /// 校验目录内容
    ///
    /// 规则：目录非空、名称非空、名称不重复。
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.effects.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, def) in self.effects.iter().enumerate() {
            if def.name.trim().is_empty() {
                return Err(CatalogError::BlankName { index });
            }
        }

        for (index, def) in self.effects.iter().enumerate() {
            if self.effects[..index].iter().any(|d| d.name == def.name) {
                return Err(CatalogError::DuplicateName {
                    name: def.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// 目录中的特效数量
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// 按索引获取特效定义
    pub fn get(&self, index: usize) -> Option<&EffectDefinition> {
        self.effects.get(index)
    }

    /// 展示名称列表（按目录顺序）
    ///
    /// 宿主用它填充选择列表。
    pub fn display_names(&self) -> Vec<String> {
        self.effects.iter().map(|d| d.name.clone()).collect()
    }
}
