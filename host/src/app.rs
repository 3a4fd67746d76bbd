//! # App 模块
//!
//! 应用状态与驱动循环：把面板意图交给控制器，把控制器发出的
//! 舞台指令交给执行器，并按固定步长推进延迟完成。

use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};
use vfx_runtime::{EffectCatalog, PlaybackController, StageCommand};

use crate::animator::{Animator, TriggerSink};
use crate::config::AppConfig;
use crate::executor::apply_commands;
use crate::panel::{EffectPanel, PanelAction};
use crate::stage::Stage;

/// 应用状态
pub struct AppState {
    /// 播放控制器（纯逻辑，不触碰任何子系统）
    pub controller: PlaybackController,
    /// 特效舞台
    pub stage: Stage,
    /// 角色动画器（可选挂接）
    pub animator: Option<Animator>,
    /// 控制面板
    pub panel: EffectPanel,
    /// 每秒逻辑帧数
    pub tick_rate: u32,
    /// 时间缩放（大于 1 加速播放）
    pub speed: f32,
}

impl AppState {
    pub fn new(catalog: EffectCatalog, config: &AppConfig, speed: f32) -> Self {
        let mut panel = EffectPanel::new();
        panel.set_entries(catalog.display_names());

        Self {
            controller: PlaybackController::new(catalog, config.playback.effect_duration),
            stage: Stage::new(),
            animator: Some(Animator::new()),
            panel,
            tick_rate: config.playback.tick_rate,
            speed,
        }
    }

    /// 选中指定特效并立即播放
    ///
    /// 索引无效时保持当前状态不变，返回 `false`。
    pub fn select_and_play(&mut self, index: usize) -> bool {
        self.panel.select(index);
        match self.controller.select_and_prepare(index) {
            Ok(commands) => {
                info!(
                    index = index,
                    duration = %self.controller.effect_duration(),
                    "选择并播放特效"
                );
                if self.controller.slot().is_some_and(|entry| !entry.emitter) {
                    debug!(index = index, "特效缺少发射控制，跳过播放，实例保持未激活");
                }
                self.apply(&commands);
                true
            }
            Err(e) => {
                warn!(error = %e, "特效索引无效，保持当前状态");
                false
            }
        }
    }

    /// 点击面板的播放按钮
    pub fn click_play(&mut self) -> bool {
        match self.panel.click_play() {
            PanelAction::Play { index } => self.select_and_play(index),
            PanelAction::None => {
                warn!("尚未选中任何特效，忽略播放请求");
                false
            }
        }
    }

    /// 推进一段逻辑时间
    pub fn update(&mut self, dt: f32) {
        let commands = self.controller.update(dt);
        self.apply(&commands);
    }

    /// 以固定步长运行，直到所有延迟完成都已送达
    ///
    /// 每逻辑帧按真实 `tick_rate` 休眠，`speed` 只缩放步长。
    pub fn run_until_idle(&mut self) {
        let frame = Duration::from_secs_f32(1.0 / self.tick_rate as f32);
        let dt = self.speed / self.tick_rate as f32;

        while !self.controller.is_idle() {
            thread::sleep(frame);
            self.update(dt);
        }
    }

    /// 清空舞台并丢弃所有待决完成
    pub fn shutdown(&mut self) {
        let commands = self.controller.teardown();
        self.apply(&commands);
        info!("舞台已清空");
    }

    fn apply(&mut self, commands: &[StageCommand]) {
        let animator = self
            .animator
            .as_mut()
            .map(|a| a as &mut dyn TriggerSink);
        apply_commands(commands, &mut self.stage, animator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vfx_runtime::EffectDefinition;

    fn test_catalog() -> EffectCatalog {
        EffectCatalog::new(vec![
            EffectDefinition::new("Rayo"),
            EffectDefinition::new("Aura"),
            EffectDefinition::new("Hielo"),
            EffectDefinition::new("Viento"),
        ])
    }

    fn test_state(effect_duration: f32) -> AppState {
        let mut config = AppConfig::default();
        config.playback.effect_duration = effect_duration;
        AppState::new(test_catalog(), &config, 1.0)
    }

    #[test]
    fn test_new_wires_catalog_panel_and_duration() {
        let state = test_state(2.5);

        // 目录、面板选项与播放时长都来自构造参数
        assert_eq!(state.controller.catalog().len(), 4);
        assert!((state.controller.effect_duration() - 2.5).abs() < f32::EPSILON);
        assert_eq!(state.panel.entries().len(), 4);
        assert_eq!(state.panel.selected_index(), None);
    }

    #[test]
    fn test_click_play_without_selection_is_noop() {
        let mut state = test_state(5.0);
        assert!(!state.click_play());
        assert!(state.stage.current().is_none());
    }

    #[test]
    fn test_select_and_play_reaches_stage_and_animator() {
        let mut state = test_state(5.0);
        assert!(state.select_and_play(1));

        let current = state.stage.current().unwrap();
        assert_eq!(current.name, "Aura");
        assert!(current.active);
        assert!(current.emission_on);

        let animator = state.animator.as_ref().unwrap();
        assert!(animator.is_latched("AURA"));
    }

    #[test]
    fn test_invalid_index_leaves_state_untouched() {
        let mut state = test_state(5.0);
        state.select_and_play(0);

        assert!(!state.select_and_play(9));
        let current = state.stage.current().unwrap();
        assert_eq!(current.name, "Rayo");
        assert!(current.active);
    }

    #[test]
    fn test_update_completes_playback() {
        let mut state = test_state(5.0);
        state.select_and_play(2);
        state.update(5.0);

        // 完成后实例停留在舞台上，但已停用、停止发射
        let current = state.stage.current().unwrap();
        assert!(!current.active);
        assert!(!current.emission_on);

        let animator = state.animator.as_ref().unwrap();
        assert!(!animator.is_latched("HIELO"));
        assert!(animator.is_latched("Idle"));
    }

    #[test]
    fn test_click_play_uses_panel_selection() {
        let mut state = test_state(5.0);
        state.panel.select(3);
        assert!(state.click_play());

        assert_eq!(state.stage.current().unwrap().name, "Viento");
    }

    #[test]
    fn test_run_until_idle_drains_pending() {
        let mut state = test_state(0.05);
        state.tick_rate = 100;
        state.speed = 10.0;

        state.select_and_play(0);
        state.run_until_idle();

        assert!(state.controller.is_idle());
        assert!(!state.stage.current().unwrap().active);
    }

    #[test]
    fn test_shutdown_clears_stage() {
        let mut state = test_state(5.0);
        state.select_and_play(1);
        state.shutdown();

        assert!(state.stage.current().is_none());
        assert!(state.controller.is_idle());
    }
}
