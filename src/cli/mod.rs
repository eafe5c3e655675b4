//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `aero`: 空气动力学（sutherland, sound, isentropic, normal-shock, oblique-shock）
//! - `optics`: 气体光学（kerl, refraction, gladstone-dale, atmosphere）
//! - `quantum`: 双原子分子统计（zpe, levels, partition, distribution, dunham）
//! - `coords`: 坐标变换（haversine, lla-to-ecef, ecef-to-lla）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: aero, optics, quantum, coords

pub mod aero;
pub mod coords;
pub mod optics;
pub mod quantum;

use clap::{Parser, Subcommand};

/// haot - 高超声速气动光学工具箱
#[derive(Parser)]
#[command(name = "haot")]
#[command(author = "Martin E. Liza")]
#[command(version)]
#[command(about = "Hypersonic aero-optics toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Compressible-flow relations and transport properties
    Aero(aero::AeroArgs),

    /// Polarizability, refractive index and atmospheric optics
    Optics(optics::OpticsArgs),

    /// Diatomic energy levels, partition functions and populations
    Quantum(quantum::QuantumArgs),

    /// Geodetic coordinates and direction cosine matrices
    Coords(coords::CoordsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nested_subcommand() {
        let cli = Cli::try_parse_from(["haot", "aero", "sound", "--temperature", "300"]).unwrap();
        assert!(matches!(cli.command, Commands::Aero(_)));

        let cli =
            Cli::try_parse_from(["haot", "coords", "lla-to-ecef", "-33.9", "151.2", "50"]).unwrap();
        assert!(matches!(cli.command, Commands::Coords(_)));
    }
}
