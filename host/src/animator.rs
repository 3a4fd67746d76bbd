//! # Animator 模块
//!
//! 角色动画触发器的接收端。
//!
//! 动画状态机本体由引擎拥有，这里只维护触发器语义：触发后保持
//! 置位（latched），直到被状态机消费或被显式复位；复位一个未置位
//! 的触发器照常接受。状态机消费触发器的时机不在本模型之内。
//! 接收端同时记录事件历史，供诊断检视。

use std::collections::HashSet;

/// 动画触发器接收端
///
/// 控制器一侧只认识这个接口；具体实现可以是本地记录器，
/// 也可以是真实引擎动画系统的桥接。
pub trait TriggerSink {
    /// 触发指定触发器
    fn set_trigger(&mut self, name: &str);

    /// 复位指定触发器
    fn reset_trigger(&mut self, name: &str);
}

/// 触发器事件（按发生顺序记录）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// 触发器被触发
    Set(String),
    /// 触发器被复位
    Reset(String),
}

/// 角色动画器
///
/// [`TriggerSink`] 的宿主实现：维护置位集合与事件历史。
#[derive(Debug, Default)]
pub struct Animator {
    /// 当前置位的触发器
    latched: HashSet<String>,
    /// 事件历史（按发生顺序）
    history: Vec<TriggerEvent>,
}

impl Animator {
    /// 创建动画器
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定触发器当前是否置位
    pub fn is_latched(&self, name: &str) -> bool {
        self.latched.contains(name)
    }

    /// 当前置位的触发器数量
    pub fn latched_count(&self) -> usize {
        self.latched.len()
    }

    /// 事件历史
    pub fn history(&self) -> &[TriggerEvent] {
        &self.history
    }

    /// 清空事件历史（置位状态保留）
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl TriggerSink for Animator {
    fn set_trigger(&mut self, name: &str) {
        self.latched.insert(name.to_string());
        self.history.push(TriggerEvent::Set(name.to_string()));
    }

    fn reset_trigger(&mut self, name: &str) {
        self.latched.remove(name);
        self.history.push(TriggerEvent::Reset(name.to_string()));
    }
}
