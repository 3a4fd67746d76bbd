//! # Command 模块
//!
//! 定义控制器向宿主发出的所有舞台指令。
//! StageCommand 是控制器与宿主之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：指令描述"做什么"，不描述"怎么做"
//! - **无副作用**：指令本身不执行任何操作
//! - **引擎无关**：不包含任何具体引擎的类型

use serde::{Deserialize, Serialize};

/// 实例令牌
///
/// 控制器为每个新实例分配单调递增的令牌。实例寻址的指令都携带
/// 目标令牌，宿主据此识别并丢弃针对已被替换实例的过期指令。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceToken(pub(crate) u64);

impl InstanceToken {
    /// 创建新的实例令牌（仅供控制器内部使用）
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// 从原始值构造令牌
    ///
    /// 正常流程中令牌只由控制器发放；这个构造器留给宿主侧
    /// 需要凭原始值还原令牌的场景。
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部令牌值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for InstanceToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InstanceToken({})", self.0)
    }
}

/// 控制器向宿主发出的舞台指令
///
/// 宿主接收指令后，将其转换为实际的场景与动画操作。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StageCommand {
    /// 销毁特效实例
    DespawnInstance {
        /// 目标实例令牌
        token: InstanceToken,
    },

    /// 实例化特效（初始未激活）
    SpawnInstance {
        /// 新实例令牌
        token: InstanceToken,
        /// 目录索引
        index: usize,
        /// 特效展示名称
        name: String,
    },

    /// 激活或停用特效实例
    SetActive {
        /// 目标实例令牌
        token: InstanceToken,
        /// 是否激活
        active: bool,
    },

    /// 开启或关闭特效发射
    SetEmission {
        /// 目标实例令牌
        token: InstanceToken,
        /// 是否发射
        enabled: bool,
    },

    /// 触发角色动画
    FireTrigger {
        /// 触发器名称
        name: String,
    },

    /// 复位角色动画触发器
    ResetTrigger {
        /// 触发器名称
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_value() {
        let token = InstanceToken::new(7);
        assert_eq!(token.value(), 7);
        assert_eq!(format!("{}", token), "InstanceToken(7)");
    }

    #[test]
    fn test_token_equality() {
        assert_eq!(InstanceToken::new(1), InstanceToken::new(1));
        assert_ne!(InstanceToken::new(1), InstanceToken::new(2));
    }

    #[test]
    fn test_command_serialization() {
        let cmd = StageCommand::SpawnInstance {
            token: InstanceToken::new(3),
            index: 1,
            name: "Aura".to_string(),
        };

        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: StageCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, deserialized);
    }
}
