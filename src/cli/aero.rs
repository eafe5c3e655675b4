//! # aero 子命令 CLI 定义
//!
//! 可压缩流关系与输运性质：
//! - `sutherland`: Sutherland 粘度/热导率（可按温度扫描）
//! - `sound`: 声速
//! - `isentropic`: 等熵总/静参数比
//! - `normal-shock`: 正激波关系
//! - `oblique-shock`: 斜激波关系
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/aero.rs`

use clap::{Args, Subcommand};
use haot::constants::DEFAULT_ADIABATIC_INDEX;
use std::path::PathBuf;

/// aero 主命令参数
#[derive(Args, Debug)]
pub struct AeroArgs {
    #[command(subcommand)]
    pub command: AeroCommands,
}

/// aero 子命令
#[derive(Subcommand, Debug)]
pub enum AeroCommands {
    /// Sutherland viscosity and thermal conductivity
    Sutherland(SutherlandArgs),

    /// Ideal-gas speed of sound
    Sound(SoundArgs),

    /// Isentropic total-to-static ratios
    Isentropic(MachArgs),

    /// Normal shock jump relations
    NormalShock(MachArgs),

    /// Oblique shock relations from a shock or deflection angle
    ObliqueShock(ObliqueShockArgs),
}

// ─────────────────────────────────────────────────────────────
// Sutherland
// ─────────────────────────────────────────────────────────────

/// sutherland 子命令参数
#[derive(Args, Debug)]
pub struct SutherlandArgs {
    /// Temperature in K (single point)
    #[arg(short, long, conflicts_with = "range")]
    pub temperature: Option<f64>,

    /// Temperature range in K for a sweep (e.g., "200-2000")
    #[arg(short, long)]
    pub range: Option<String>,

    /// Temperature step in K for a sweep
    #[arg(long, default_value_t = 100.0)]
    pub step: f64,

    /// Gas name (Air, Argon, N2, O2)
    #[arg(short, long, default_value = "Air")]
    pub gas: String,

    /// Export the sweep to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "HAOT_JOBS")]
    pub jobs: usize,
}

// ─────────────────────────────────────────────────────────────
// 声速 / 等熵 / 正激波
// ─────────────────────────────────────────────────────────────

/// sound 子命令参数
#[derive(Args, Debug)]
pub struct SoundArgs {
    /// Static temperature in K
    #[arg(short, long)]
    pub temperature: f64,

    /// Adiabatic index γ
    #[arg(long, default_value_t = DEFAULT_ADIABATIC_INDEX)]
    pub gamma: f64,
}

/// 只需马赫数的子命令参数
#[derive(Args, Debug)]
pub struct MachArgs {
    /// Free-stream Mach number
    #[arg(short, long)]
    pub mach: f64,

    /// Adiabatic index γ
    #[arg(long, default_value_t = DEFAULT_ADIABATIC_INDEX)]
    pub gamma: f64,
}

// ─────────────────────────────────────────────────────────────
// 斜激波
// ─────────────────────────────────────────────────────────────

/// oblique-shock 子命令参数
#[derive(Args, Debug)]
pub struct ObliqueShockArgs {
    /// Free-stream Mach number
    #[arg(short, long)]
    pub mach: f64,

    /// Shock angle β in degrees
    #[arg(short = 'b', long, required_unless_present = "deflection", conflicts_with = "deflection")]
    pub shock_angle: Option<f64>,

    /// Flow deflection angle θ in degrees (solves for β)
    #[arg(short, long)]
    pub deflection: Option<f64>,

    /// Use the strong-shock solution when solving from a deflection angle
    #[arg(long, default_value_t = false)]
    pub strong: bool,

    /// Adiabatic index γ
    #[arg(long, default_value_t = DEFAULT_ADIABATIC_INDEX)]
    pub gamma: f64,
}
