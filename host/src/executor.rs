//! # Executor 模块
//!
//! 把控制器发出的舞台指令落到宿主拥有的子系统上。
//!
//! 所有失败都就地恢复并记录日志，不向调用方传播：
//!
//! - 实例寻址指令在令牌过期时按 debug 级丢弃（选择替换与延迟
//!   完成之间的竞争是预期行为，不是故障）；
//! - 未挂接动画器时跳过触发器指令（动画器是可选协作方）。

use tracing::{debug, info, warn};
use vfx_runtime::StageCommand;

use crate::animator::TriggerSink;
use crate::stage::{Stage, StagedInstance};

/// 应用一批舞台指令
///
/// 按指令顺序逐条应用。`animator` 为 `None` 表示没有挂接动画器。
pub fn apply_commands(
    commands: &[StageCommand],
    stage: &mut Stage,
    mut animator: Option<&mut dyn TriggerSink>,
) {
    for command in commands {
        apply_single(command, stage, animator.as_deref_mut());
    }
}

/// 应用单条舞台指令
fn apply_single(
    command: &StageCommand,
    stage: &mut Stage,
    animator: Option<&mut (dyn TriggerSink + '_)>,
) {
    match command {
        StageCommand::DespawnInstance { token } => match stage.despawn(*token) {
            Some(instance) => {
                info!(token = %token, name = %instance.name, "销毁特效实例");
            }
            None => {
                debug!(token = %token, "销毁指令的目标已不在舞台，忽略");
            }
        },

        StageCommand::SpawnInstance { token, index, name } => {
            let evicted = stage.install(StagedInstance::new(*token, *index, name.clone()));
            if let Some(old) = evicted {
                // 正常指令流会先送达销毁指令；残留说明上游漏发了一步
                warn!(token = %old.token, name = %old.name, "安装新实例时槽位仍被占用，旧实例已销毁");
            }
            info!(token = %token, index = index, name = %name, "实例化特效（未激活）");
        }

        StageCommand::SetActive { token, active } => {
            if stage.set_active(*token, *active) {
                if *active {
                    debug!(token = %token, "激活特效实例");
                } else {
                    info!(token = %token, "特效播放完毕，实例已停用");
                }
            } else {
                debug!(token = %token, active = active, "激活指令的目标已被替换，忽略");
            }
        }

        StageCommand::SetEmission { token, enabled } => {
            if stage.set_emission(*token, *enabled) {
                debug!(token = %token, enabled = enabled, "切换特效发射");
            } else {
                debug!(token = %token, enabled = enabled, "发射指令的目标已被替换，忽略");
            }
        }

        StageCommand::FireTrigger { name } => match animator {
            Some(sink) => {
                sink.set_trigger(name);
                debug!(trigger = %name, "触发角色动画");
            }
            None => {
                debug!(trigger = %name, "未挂接动画器，跳过触发");
            }
        },

        StageCommand::ResetTrigger { name } => match animator {
            Some(sink) => {
                sink.reset_trigger(name);
                debug!(trigger = %name, "复位动画触发器");
            }
            None => {
                debug!(trigger = %name, "未挂接动画器，跳过复位");
            }
        },
    }
}
