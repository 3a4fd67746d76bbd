//! # Controller 模块
//!
//! 特效播放控制器，vfx-runtime 的核心类型。
//!
//! ## 执行模型
//!
//! ```text
//! select_and_prepare(index) -> Vec<StageCommand>   选择并立即进入播放
//! update(dt)                -> Vec<StageCommand>   推进延迟完成计时
//! ```
//!
//! 控制器不触碰场景、动画与时钟：场景与动画操作以 [`StageCommand`]
//! 的形式交给宿主执行，时间以逐帧 `dt` 的形式由宿主馈入。
//! 所有路径都运行在宿主的协作式单时间线上，不涉及线程。

use crate::catalog::EffectCatalog;
use crate::command::{InstanceToken, StageCommand};
use crate::error::PlaybackError;
use crate::triggers::{self, IDLE_TRIGGER, PLAY_TRIGGERS};

/// 当前实例在控制器侧的登记信息
///
/// 场景中的实例状态由宿主持有，这里只保留控制器决策所需的镜像：
/// 令牌、目录索引与发射控制能力。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotEntry {
    /// 实例令牌
    pub token: InstanceToken,
    /// 目录索引
    pub index: usize,
    /// 是否带发射控制
    pub emitter: bool,
}

/// 待决的延迟完成
///
/// 每次播放调度一个。新的选择不会取消旧的完成项：它们可以同时
/// 存在多个，到期后各自凭令牌独立结算。
#[derive(Debug, Clone)]
struct PendingCompletion {
    /// 目标实例令牌
    token: InstanceToken,
    /// 已经过时间（秒）
    elapsed: f32,
    /// 延迟时长（秒）
    duration: f32,
}

impl PendingCompletion {
    fn new(token: InstanceToken, duration: f32) -> Self {
        Self {
            token,
            elapsed: 0.0,
            duration,
        }
    }

    /// 推进计时，返回是否到期
    fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.duration
    }
}

/// 特效播放控制器
///
/// 负责三件事：
///
/// - 把用户选择映射到目录中的特效定义；
/// - 持有**最多一个**当前实例的登记信息（替换前必先销毁）；
/// - 排定播放序列：未激活实例化 → 激活 + 开启发射 + 触发配套动画
///   → 固定时长后关闭发射 + 停用 + 动画复位回待机。
pub struct PlaybackController {
    /// 特效目录
    catalog: EffectCatalog,
    /// 固定播放时长（秒）
    effect_duration: f32,
    /// 当前选择（首次有效选择前为 None）
    selection: Option<usize>,
    /// 当前实例槽（最多一个）
    slot: Option<SlotEntry>,
    /// 令牌发号器
    next_token: u64,
    /// 待决的延迟完成列表
    pending: Vec<PendingCompletion>,
}

impl PlaybackController {
    /// 创建控制器
    ///
    /// # 参数
    ///
    /// - `catalog`: 已校验的特效目录
    /// - `effect_duration`: 每次播放的固定时长（秒）
    pub fn new(catalog: EffectCatalog, effect_duration: f32) -> Self {
        Self {
            catalog,
            effect_duration,
            selection: None,
            slot: None,
            next_token: 1,
            pending: Vec::new(),
        }
    }

    /// 选择指定特效并立即进入播放序列
    ///
    /// 越界索引返回错误，调用方据此记录警告；此时控制器状态保持
    /// 不变。有效索引会先销毁旧实例（槽位易主前必先销毁），再以
    /// 未激活状态实例化新特效，然后接续 [`PlaybackController::play`]。
    pub fn select_and_prepare(
        &mut self,
        index: usize,
    ) -> Result<Vec<StageCommand>, PlaybackError> {
        let Some(def) = self.catalog.get(index) else {
            return Err(PlaybackError::InvalidIndex {
                index,
                count: self.catalog.len(),
            });
        };
        let name = def.name.clone();
        let emitter = def.emitter;

        self.selection = Some(index);

        let mut commands = Vec::new();

        // 槽位不变式：新实例登记之前，旧实例必须先销毁
        if let Some(old) = self.slot.take() {
            commands.push(StageCommand::DespawnInstance { token: old.token });
        }

        let token = self.issue_token();
        commands.push(StageCommand::SpawnInstance { token, index, name });
        self.slot = Some(SlotEntry {
            token,
            index,
            emitter,
        });

        commands.extend(self.play());
        Ok(commands)
    }

    /// 播放当前实例
    ///
    /// 没有实例、或实例缺少发射控制时整体跳过，实例保持未激活，
    /// 不算错误。正常路径：激活 → 开启发射 → 触发配套动画（若有）
    /// → 调度延迟完成。
    pub fn play(&mut self) -> Vec<StageCommand> {
        let Some(entry) = self.slot else {
            return Vec::new();
        };
        if !entry.emitter {
            return Vec::new();
        }

        let mut commands = vec![
            StageCommand::SetActive {
                token: entry.token,
                active: true,
            },
            StageCommand::SetEmission {
                token: entry.token,
                enabled: true,
            },
        ];

        if let Some(trigger) = triggers::play_trigger(entry.index) {
            commands.push(StageCommand::FireTrigger {
                name: trigger.to_string(),
            });
        }

        self.pending
            .push(PendingCompletion::new(entry.token, self.effect_duration));

        commands
    }

    /// 推进延迟完成计时
    ///
    /// 宿主每帧调用一次。到期的完成项按调度顺序结算。
    pub fn update(&mut self, dt: f32) -> Vec<StageCommand> {
        let mut commands = Vec::new();

        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].advance(dt) {
                let done = self.pending.remove(index);
                self.complete(done.token, &mut commands);
            } else {
                index += 1;
            }
        }

        commands
    }

    /// 结算单个到期的延迟完成
    ///
    /// 实例寻址的步骤只在令牌仍然当前时发出（实例可能已被新的
    /// 选择替换）；动画复位与待机触发不以实例存活为前提。
    fn complete(&mut self, token: InstanceToken, commands: &mut Vec<StageCommand>) {
        if self.slot.is_some_and(|entry| entry.token == token) {
            commands.push(StageCommand::SetEmission {
                token,
                enabled: false,
            });
            commands.push(StageCommand::SetActive {
                token,
                active: false,
            });
        }

        for name in PLAY_TRIGGERS {
            commands.push(StageCommand::ResetTrigger {
                name: name.to_string(),
            });
        }
        commands.push(StageCommand::FireTrigger {
            name: IDLE_TRIGGER.to_string(),
        });
    }

    /// 拆除控制器
    ///
    /// 销毁残余实例，丢弃所有未结算的完成项。
    pub fn teardown(&mut self) -> Vec<StageCommand> {
        self.pending.clear();
        match self.slot.take() {
            Some(entry) => vec![StageCommand::DespawnInstance { token: entry.token }],
            None => Vec::new(),
        }
    }

    fn issue_token(&mut self) -> InstanceToken {
        let token = InstanceToken::new(self.next_token);
        self.next_token += 1;
        token
    }

    // ── 状态查询 ──────────────────────────────────────────────

    /// 当前选择索引
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    /// 当前实例的登记信息
    pub fn slot(&self) -> Option<&SlotEntry> {
        self.slot.as_ref()
    }

    /// 是否没有待决的延迟完成
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// 待决的延迟完成数量
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// 特效目录
    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    /// 固定播放时长（秒）
    pub fn effect_duration(&self) -> f32 {
        self.effect_duration
    }
}
