//! # 控制面板模块
//!
//! 特效选择面板的交互模型：一个下拉选择器加一个播放按钮。
//! 只维护选择状态并把点击翻译成意图，不负责绘制。

/// 面板操作意图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Play { index: usize },
}

/// 特效选择面板
#[derive(Debug, Clone)]
pub struct EffectPanel {
    /// 下拉选项（特效显示名，顺序与目录一致）
    entries: Vec<String>,
    /// 当前选中索引
    selected_index: Option<usize>,
}

impl EffectPanel {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected_index: None,
        }
    }

    /// 设置下拉选项
    pub fn set_entries(&mut self, entries: Vec<String>) {
        self.entries = entries;
        // 保持选中索引有效
        if let Some(idx) = self.selected_index {
            if idx >= self.entries.len() {
                self.selected_index = if self.entries.is_empty() {
                    None
                } else {
                    Some(self.entries.len() - 1)
                };
            }
        }
    }

    /// 选中指定项，越界时不改变当前选择
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.selected_index = Some(index);
            true
        } else {
            false
        }
    }

    /// 选择上一项
    pub fn select_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        match self.selected_index {
            Some(idx) if idx > 0 => {
                self.selected_index = Some(idx - 1);
            }
            None => {
                self.selected_index = Some(self.entries.len() - 1);
            }
            _ => {}
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        match self.selected_index {
            Some(idx) if idx < self.entries.len() - 1 => {
                self.selected_index = Some(idx + 1);
            }
            None => {
                self.selected_index = Some(0);
            }
            _ => {}
        }
    }

    /// 点击播放按钮
    ///
    /// 尚未选中任何项时点击无效，返回 [`PanelAction::None`]。
    pub fn click_play(&self) -> PanelAction {
        match self.selected_index {
            Some(index) => PanelAction::Play { index },
            None => PanelAction::None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

impl Default for EffectPanel {
    fn default() -> Self {
        Self::new()
    }
}
