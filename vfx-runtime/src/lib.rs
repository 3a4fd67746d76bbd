//! # VFX Runtime
//!
//! 特效播放舞台的核心运行时库。
//!
//! ## 架构概述
//!
//! `vfx-runtime` 是纯逻辑核心，不依赖任何 IO、时钟或渲染引擎。
//! 它通过 **指令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                              Runtime
//!   │                                  │
//!   │── select_and_prepare(index) ───►│
//!   │◄────── Vec<StageCommand> ───────│
//!   │                                  │
//!   │── update(dt)  每帧 ────────────►│
//!   │◄────── Vec<StageCommand> ───────│
//! ```
//!
//! 宿主把指令应用到它拥有的子系统上（场景实例、动画触发器），
//! 并以逐帧 `dt` 驱动延迟完成的计时。
//!
//! ## 核心类型
//!
//! - [`PlaybackController`]：播放控制器（选择 → 播放 → 延迟完成）
//! - [`StageCommand`]：控制器向宿主发出的舞台指令
//! - [`EffectCatalog`]：有序的特效定义目录
//! - [`InstanceToken`]：实例令牌，用于识别过期指令
//!
//! ## 模块结构
//!
//! - [`catalog`]：特效目录定义与校验
//! - [`command`]：StageCommand 与实例令牌
//! - [`controller`]：播放控制器
//! - [`triggers`]：索引到动画触发器的固定映射表
//! - [`error`]：错误类型定义

pub mod catalog;
pub mod command;
pub mod controller;
pub mod error;
pub mod triggers;

// 重导出核心类型
pub use catalog::{EffectCatalog, EffectDefinition};
pub use command::{InstanceToken, StageCommand};
pub use controller::{PlaybackController, SlotEntry};
pub use error::{CatalogError, PlaybackError, VfxError, VfxResult};
pub use triggers::{IDLE_TRIGGER, PLAY_TRIGGERS, play_trigger};
