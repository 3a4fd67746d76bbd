//! # Host 层
//!
//! 特效播放系统的宿主层实现：装载配置与特效目录，驱动 vfx-runtime
//! 的播放控制器，并把控制器发出的舞台指令转换为实际效果。
//!
//! ## 架构说明
//!
//! Host 层负责：
//! - 配置与特效目录装载
//! - 舞台上的实例生命周期（单槽位）
//! - 角色动画器的触发器收发
//! - 面板交互与驱动循环
//!
//! Host 层不包含播放时序逻辑，只负责执行控制器发出的 StageCommand。

pub mod animator;
pub mod app;
pub mod config;
pub mod executor;
pub mod library;
pub mod panel;
pub mod stage;

pub use animator::{Animator, TriggerEvent, TriggerSink};
pub use app::AppState;
pub use config::{AppConfig, ConfigError, PlaybackConfig};
pub use executor::apply_commands;
pub use library::{LibraryError, load_catalog};
pub use panel::{EffectPanel, PanelAction};
pub use stage::{Stage, StagedInstance};
