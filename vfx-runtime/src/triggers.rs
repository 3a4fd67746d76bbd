//! # Triggers 模块
//!
//! 选择索引到动画触发器名称的固定映射表。
//!
//! 映射关系是一张显式枚举表（触发器名称的唯一来源），不是计算函数：
//! 表内索引一一对应角色动画状态机的入场触发器，表外索引不触发任何动画。

/// 按选择索引排列的播放触发器表
///
/// 索引 0/1/2 分别对应雷电、光环、寒冰三套角色动画。
/// 这张表刻意保持不可扩展：新增特效默认没有配套动画。
pub const PLAY_TRIGGERS: [&str; 3] = ["RAYO", "AURA", "HIELO"];

/// 播放结束后回落的待机触发器
pub const IDLE_TRIGGER: &str = "Idle";

/// 查询选择索引对应的播放触发器
///
/// 表外索引返回 `None`，表示该特效没有配套动画。
pub fn play_trigger(index: usize) -> Option<&'static str> {
    PLAY_TRIGGERS.get(index).copied()
}
