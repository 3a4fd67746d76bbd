//! 特效播放宿主（headless 入口）
//!
//! 解析命令行，装载配置与特效目录，然后驱动一次或多次完整播放。

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use vfx_runtime::EffectCatalog;

use host::app::AppState;
use host::config::AppConfig;
use host::library::load_catalog;

#[derive(Parser)]
#[command(name = "host")]
#[command(about = "特效播放宿主 - 从目录选择特效并驱动一次完整播放")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 配置文件路径（默认：config.json）
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// 时间缩放，大于 1 加速播放（默认：1.0）
    #[arg(short, long, default_value = "1.0", global = true)]
    speed: f32,

    /// 只输出警告及以上级别的日志
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出特效目录
    List,

    /// 播放指定索引的特效并等待完成
    Play {
        /// 特效索引（从 0 开始）
        index: usize,
    },

    /// 依次播放目录中的每个特效
    Cycle,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    if let Err(e) = run(&cli) {
        eprintln!("❌ 运行失败: {}", e);
        process::exit(1);
    }
}

/// 初始化日志（RUST_LOG 优先于默认级别）
///
/// 日志走 stderr，列表与播放摘要走 stdout。
fn init_logging(quiet: bool) {
    let default_level = if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !(cli.speed.is_finite() && cli.speed > 0.0) {
        return Err(format!("时间缩放必须为正数: {}", cli.speed).into());
    }

    let config = AppConfig::load(&cli.config);
    config.validate()?;

    let catalog = load_catalog(config.catalog_full_path())?;

    match &cli.command {
        // 默认行为：列出目录
        None | Some(Commands::List) => {
            list_effects(&catalog);
            Ok(())
        }
        Some(Commands::Play { index }) => play_one(catalog, &config, cli.speed, *index),
        Some(Commands::Cycle) => cycle_all(catalog, &config, cli.speed),
    }
}

/// 打印目录条目
fn list_effects(catalog: &EffectCatalog) {
    println!("特效目录（{} 项）:", catalog.len());
    for (index, name) in catalog.display_names().iter().enumerate() {
        println!("  [{}] {}", index, name);
    }
}

/// 播放单个特效，等完成序列送达后退出
fn play_one(
    catalog: EffectCatalog,
    config: &AppConfig,
    speed: f32,
    index: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::new(catalog, config, speed);

    if !state.select_and_play(index) {
        return Err(format!("特效索引无效: {}", index).into());
    }
    let name = state
        .controller
        .catalog()
        .get(index)
        .map(|e| e.name.clone());

    state.run_until_idle();
    state.shutdown();

    if let Some(name) = name {
        println!("✅ 播放完成: [{}] {}", index, name);
    }
    Ok(())
}

/// 依次播放目录中的每个特效
fn cycle_all(
    catalog: EffectCatalog,
    config: &AppConfig,
    speed: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::new(catalog, config, speed);
    let count = state.panel.entries().len();

    for index in 0..count {
        // 模拟用户操作：先在下拉框选中，再点击播放
        state.panel.select(index);
        if state.click_play() {
            state.run_until_idle();
        }
    }
    state.shutdown();

    println!("✅ 轮播完成，共 {} 个特效", count);
    Ok(())
}
