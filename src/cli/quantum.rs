//! # quantum 子命令 CLI 定义
//!
//! 双原子分子能级与统计：
//! - `zpe`: 零点能
//! - `levels`: 振动/转动/Born-Oppenheimer 能级表
//! - `partition`: 配分函数
//! - `distribution`: 布居分布（可导出 CSV）
//! - `dunham`: Dunham 势能系数
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/quantum.rs`

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// quantum 主命令参数
#[derive(Args, Debug)]
pub struct QuantumArgs {
    #[command(subcommand)]
    pub command: QuantumCommands,
}

/// quantum 子命令
#[derive(Subcommand, Debug)]
pub enum QuantumCommands {
    /// Vibrational zero-point energy
    Zpe(MoleculeArgs),

    /// Energy levels of a diatomic molecule
    Levels(LevelsArgs),

    /// Truncated partition functions
    Partition(PartitionArgs),

    /// Population distribution over (v, J) levels
    Distribution(DistributionArgs),

    /// Dunham potential coefficients
    Dunham(DunhamArgs),
}

/// 只需分子名称的子命令参数
#[derive(Args, Debug)]
pub struct MoleculeArgs {
    /// Molecule (H2, N2, O2, NO, N2+, O2+, NO+)
    #[arg(short, long, default_value = "N2")]
    pub molecule: String,
}

/// levels 子命令参数
#[derive(Args, Debug)]
pub struct LevelsArgs {
    /// Molecule (H2, N2, O2, NO, N2+, O2+, NO+)
    #[arg(short, long, default_value = "N2")]
    pub molecule: String,

    /// Highest vibrational quantum number
    #[arg(short = 'v', long, default_value_t = 5)]
    pub max_vibrational: u32,

    /// Highest rotational quantum number
    #[arg(short = 'J', long, default_value_t = 10)]
    pub max_rotational: u32,
}

/// partition 子命令参数
#[derive(Args, Debug)]
pub struct PartitionArgs {
    /// Temperature in K
    #[arg(short, long)]
    pub temperature: f64,

    /// Molecule (H2, N2, O2, NO, N2+, O2+, NO+)
    #[arg(short, long, default_value = "N2")]
    pub molecule: String,

    /// Highest vibrational quantum number in the sum
    #[arg(short = 'v', long, default_value_t = 20)]
    pub max_vibrational: u32,

    /// Highest rotational quantum number in the sum
    #[arg(short = 'J', long, default_value_t = 100)]
    pub max_rotational: u32,
}

/// distribution 子命令参数
#[derive(Args, Debug)]
pub struct DistributionArgs {
    /// Temperature in K
    #[arg(short, long)]
    pub temperature: f64,

    /// Molecule (H2, N2, O2, NO, N2+, O2+, NO+)
    #[arg(short, long, default_value = "N2")]
    pub molecule: String,

    /// Highest vibrational quantum number
    #[arg(short = 'v', long, required_unless_present = "max_rotational")]
    pub max_vibrational: Option<u32>,

    /// Highest rotational quantum number
    #[arg(short = 'J', long)]
    pub max_rotational: Option<u32>,

    /// Use Born-Oppenheimer levels (needs both -v and -J)
    #[arg(long, default_value_t = false)]
    pub born_oppenheimer: bool,

    /// Number of table rows to print
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,

    /// Export the full distribution to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// dunham 子命令参数
#[derive(Args, Debug)]
pub struct DunhamArgs {
    /// Molecule (H2, N2, O2, NO, N2+, O2+, NO+)
    #[arg(short, long, default_value = "N2")]
    pub molecule: String,

    /// Highest coefficient order aₘ to print (m ≥ 2)
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u32).range(2..))]
    pub order: u32,
}
