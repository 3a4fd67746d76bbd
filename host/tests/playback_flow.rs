//! # 播放链路集成测试
//!
//! 测试 PlaybackController → Executor → Stage/Animator 的执行链路。
//! 这些测试不依赖真实的粒子系统或动画设备。

use host::app::AppState;
use host::config::AppConfig;
use host::library::load_catalog;
use host::TriggerEvent;
use vfx_runtime::{EffectCatalog, EffectDefinition};

/// 创建测试用的三项目录（与触发器表一一对应）
fn three_effect_catalog() -> EffectCatalog {
    EffectCatalog::new(vec![
        EffectDefinition::new("Rayo"),
        EffectDefinition::new("Aura"),
        EffectDefinition::new("Hielo"),
    ])
}

fn test_state(catalog: EffectCatalog, effect_duration: f32) -> AppState {
    let mut config = AppConfig::default();
    config.playback.effect_duration = effect_duration;
    AppState::new(catalog, &config, 1.0)
}

/// 测试一次完整播放：选择、激活、定时完成
#[test]
fn test_full_playback_flow() {
    let mut state = test_state(three_effect_catalog(), 5.0);

    // 1. 选择并播放索引 1（Aura）
    assert!(state.select_and_play(1));

    let current = state.stage.current().unwrap();
    assert_eq!(current.name, "Aura");
    assert_eq!(current.index, 1);
    assert!(current.active);
    assert!(current.emission_on);
    assert!(state.animator.as_ref().unwrap().is_latched("AURA"));

    // 2. 接近时长但未到，状态不变
    state.update(4.9);
    let current = state.stage.current().unwrap();
    assert!(current.active);
    assert!(current.emission_on);

    // 3. 跨过时长，完成序列送达
    state.update(0.2);
    let current = state.stage.current().unwrap();
    assert!(!current.active);
    assert!(!current.emission_on);

    // 4. 动画器复位三个播放触发器后回到 Idle
    let animator = state.animator.as_ref().unwrap();
    assert!(!animator.is_latched("AURA"));
    assert!(animator.is_latched("Idle"));

    let history = animator.history();
    let tail = &history[history.len() - 4..];
    assert_eq!(
        tail,
        &[
            TriggerEvent::Reset("RAYO".to_string()),
            TriggerEvent::Reset("AURA".to_string()),
            TriggerEvent::Reset("HIELO".to_string()),
            TriggerEvent::Set("Idle".to_string()),
        ]
    );
}

/// 测试快速替换：前一实例的延迟完成不得触碰后一实例
#[test]
fn test_replacement_race_keeps_new_instance_playing() {
    let mut state = test_state(three_effect_catalog(), 5.0);

    // 1. t=0 播放 Rayo
    assert!(state.select_and_play(0));
    let first_token = state.stage.current().unwrap().token;

    // 2. t=2 改播 Aura，旧实例被销毁
    state.update(2.0);
    assert!(state.select_and_play(1));
    let second_token = state.stage.current().unwrap().token;
    assert_ne!(first_token, second_token);

    // 3. t=5.2 跨过 Rayo 的完成时刻：新实例不受影响
    state.update(3.2);
    let current = state.stage.current().unwrap();
    assert_eq!(current.token, second_token);
    assert_eq!(current.name, "Aura");
    assert!(current.active);
    assert!(current.emission_on);

    // 过期完成仍会复位动画器（触发器是全局的，不属于单个实例）
    let animator = state.animator.as_ref().unwrap();
    assert!(!animator.is_latched("AURA"));
    assert!(animator.is_latched("Idle"));

    // 4. t=7.2 轮到 Aura 自己的完成
    state.update(2.0);
    let current = state.stage.current().unwrap();
    assert_eq!(current.token, second_token);
    assert!(!current.active);
    assert!(!current.emission_on);
}

/// 测试索引到触发器的映射表
#[test]
fn test_trigger_table_per_index() {
    let cases = [(0, "RAYO"), (1, "AURA"), (2, "HIELO")];

    for (index, trigger) in cases {
        let mut state = test_state(three_effect_catalog(), 5.0);
        state.select_and_play(index);

        let animator = state.animator.as_ref().unwrap();
        assert!(animator.is_latched(trigger), "索引 {} 应触发 {}", index, trigger);
        assert_eq!(animator.latched_count(), 1);
    }
}

/// 测试表外索引：照常播放，但不触发任何动画
#[test]
fn test_index_beyond_trigger_table_plays_without_animation() {
    let catalog = EffectCatalog::new(vec![
        EffectDefinition::new("Rayo"),
        EffectDefinition::new("Aura"),
        EffectDefinition::new("Hielo"),
        EffectDefinition::new("Viento"),
    ]);
    let mut state = test_state(catalog, 5.0);

    assert!(state.select_and_play(3));

    let current = state.stage.current().unwrap();
    assert!(current.active);
    assert!(current.emission_on);
    assert_eq!(state.animator.as_ref().unwrap().latched_count(), 0);
}

/// 测试无发射器的特效：装好后保持未激活
#[test]
fn test_non_emitter_effect_stays_dormant() {
    let catalog = EffectCatalog::new(vec![
        EffectDefinition::new("Rayo"),
        EffectDefinition::without_emitter("Humo"),
    ]);
    let mut state = test_state(catalog, 5.0);

    assert!(state.select_and_play(1));

    // 实例在舞台上，但既未激活也未发射
    let current = state.stage.current().unwrap();
    assert_eq!(current.name, "Humo");
    assert!(!current.active);
    assert!(!current.emission_on);
    assert_eq!(state.animator.as_ref().unwrap().latched_count(), 0);

    // 没有排期的完成，时间流逝不改变任何状态
    state.update(10.0);
    assert!(state.controller.is_idle());
    assert!(!state.stage.current().unwrap().active);
}

/// 测试无效索引：保持上一个实例不变
#[test]
fn test_invalid_index_keeps_previous_instance() {
    let mut state = test_state(three_effect_catalog(), 5.0);
    state.select_and_play(1);

    assert!(!state.select_and_play(9));

    let current = state.stage.current().unwrap();
    assert_eq!(current.name, "Aura");
    assert!(current.active);
    assert_eq!(state.controller.selection(), Some(1));
}

/// 测试未挂接动画器时整条链路照常工作
#[test]
fn test_flow_without_animator() {
    let mut state = test_state(three_effect_catalog(), 5.0);
    state.animator = None;

    assert!(state.select_and_play(2));
    let current = state.stage.current().unwrap();
    assert!(current.active);
    assert!(current.emission_on);

    state.update(5.0);
    let current = state.stage.current().unwrap();
    assert!(!current.active);
    assert!(!current.emission_on);
}

/// 测试从目录文件到播放完成的端到端链路
#[test]
fn test_catalog_file_to_playback() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("effects.json");
    std::fs::write(
        &path,
        r#"{ "effects": [ { "name": "Rayo" }, { "name": "Aura" } ] }"#,
    )
    .unwrap();

    // 1. 从文件装载目录
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    // 2. 正常播放一轮
    let mut state = test_state(catalog, 0.5);
    assert!(state.select_and_play(0));
    state.update(0.5);

    let current = state.stage.current().unwrap();
    assert!(!current.active);
    assert!(state.animator.as_ref().unwrap().is_latched("Idle"));
}

/// 测试关停：清空舞台并丢弃未决完成
#[test]
fn test_shutdown_drains_slot_and_pending() {
    let mut state = test_state(three_effect_catalog(), 5.0);
    state.select_and_play(0);
    state.update(1.0);

    state.shutdown();

    assert!(state.stage.current().is_none());
    assert!(state.controller.is_idle());

    // 关停后时间流逝不会再产生任何效果
    state.update(10.0);
    assert!(state.stage.current().is_none());
}
