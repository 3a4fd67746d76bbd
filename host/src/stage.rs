//! # Stage 模块
//!
//! 场景侧的特效实例存储。实例的生命周期由宿主引擎拥有，
//! 这里是它在无头环境下的替身。
//!
//! 舞台只有一个实例槽。安装新实例时旧实例在同一步内离开舞台，
//! 替换前必先销毁是安装操作自身的不变式，不依赖调用方先行清理。
//! 所有实例寻址操作都要求令牌匹配，过期令牌一律拒绝。

use vfx_runtime::InstanceToken;

/// 舞台上的特效实例
#[derive(Debug, Clone, PartialEq)]
pub struct StagedInstance {
    /// 实例令牌
    pub token: InstanceToken,
    /// 目录索引
    pub index: usize,
    /// 特效展示名称
    pub name: String,
    /// 是否激活
    pub active: bool,
    /// 是否正在发射
    pub emission_on: bool,
}

impl StagedInstance {
    /// 创建新实例（初始未激活、不发射）
    pub fn new(token: InstanceToken, index: usize, name: impl Into<String>) -> Self {
        Self {
            token,
            index,
            name: name.into(),
            active: false,
            emission_on: false,
        }
    }
}

/// 特效舞台
#[derive(Debug, Default)]
pub struct Stage {
    /// 当前实例槽（最多一个）
    slot: Option<StagedInstance>,
}

impl Stage {
    /// 创建空舞台
    pub fn new() -> Self {
        Self::default()
    }

    /// 安装新实例，返回被挤出的旧实例
    ///
    /// 正常流程里调用方会先收到独立的销毁指令；这里的返回值是
    /// 兜底，保证槽位在任何调用顺序下都不会双占。
    pub fn install(&mut self, instance: StagedInstance) -> Option<StagedInstance> {
        self.slot.replace(instance)
    }

    /// 销毁指定实例
    ///
    /// 令牌不匹配时返回 `None`（目标实例已被替换，指令过期）。
    pub fn despawn(&mut self, token: InstanceToken) -> Option<StagedInstance> {
        if self.slot.as_ref().is_some_and(|inst| inst.token == token) {
            self.slot.take()
        } else {
            None
        }
    }

    /// 激活或停用指定实例，返回指令是否生效
    pub fn set_active(&mut self, token: InstanceToken, active: bool) -> bool {
        match self.slot.as_mut() {
            Some(inst) if inst.token == token => {
                inst.active = active;
                true
            }
            _ => false,
        }
    }

    /// 开启或关闭指定实例的发射，返回指令是否生效
    pub fn set_emission(&mut self, token: InstanceToken, enabled: bool) -> bool {
        match self.slot.as_mut() {
            Some(inst) if inst.token == token => {
                inst.emission_on = enabled;
                true
            }
            _ => false,
        }
    }

    /// 当前实例
    pub fn current(&self) -> Option<&StagedInstance> {
        self.slot.as_ref()
    }

    /// 指定令牌是否仍指向当前实例
    pub fn is_live(&self, token: InstanceToken) -> bool {
        self.slot.as_ref().is_some_and(|inst| inst.token == token)
    }

    /// 清空舞台，返回被移除的实例
    pub fn clear(&mut self) -> Option<StagedInstance> {
        self.slot.take()
    }
}
