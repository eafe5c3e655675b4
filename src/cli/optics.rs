//! # optics 子命令 CLI 定义
//!
//! 气体光学性质：
//! - `kerl`: Kerl 温度/波长相关极化率
//! - `refraction`: 折射率（组分质量密度或温度-密度）
//! - `gladstone-dale`: Gladstone-Dale 常数
//! - `atmosphere`: 标准大气折射率剖面扫描
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/optics.rs`

use clap::{Args, Subcommand, ValueEnum};
use haot::constants::DEFAULT_WAVELENGTH_NM;
use std::path::PathBuf;

/// optics 主命令参数
#[derive(Args, Debug)]
pub struct OpticsArgs {
    #[command(subcommand)]
    pub command: OpticsCommands,
}

/// optics 子命令
#[derive(Subcommand, Debug)]
pub enum OpticsCommands {
    /// Temperature- and wavelength-dependent polarizability (Kerl)
    Kerl(KerlArgs),

    /// Refractive index, permittivity and susceptibility of a gas
    Refraction(RefractionArgs),

    /// Gladstone-Dale constants of air species or a mixture
    GladstoneDale(GladstoneDaleArgs),

    /// Refractive-index profile of the standard atmosphere
    Atmosphere(AtmosphereArgs),
}

/// 解析 "species=value" 形式的组分输入
pub fn parse_species_value(input: &str) -> Result<(String, f64), String> {
    let (species, value) = input
        .split_once('=')
        .ok_or_else(|| format!("Invalid species entry '{}'. Use the form N2=0.95", input))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number '{}' for species '{}'", value, species))?;
    Ok((species.trim().to_string(), value))
}

// ─────────────────────────────────────────────────────────────
// Kerl 极化率
// ─────────────────────────────────────────────────────────────

/// kerl 子命令参数
#[derive(Args, Debug)]
pub struct KerlArgs {
    /// Temperature in K
    #[arg(short, long)]
    pub temperature: f64,

    /// Molecule (Air, H2, N2, O2)
    #[arg(short, long, default_value = "N2")]
    pub molecule: String,

    /// Wavelength in nm
    #[arg(short, long, default_value_t = DEFAULT_WAVELENGTH_NM)]
    pub wavelength: f64,
}

// ─────────────────────────────────────────────────────────────
// 折射率
// ─────────────────────────────────────────────────────────────

/// refraction 子命令参数
#[derive(Args, Debug)]
pub struct RefractionArgs {
    /// Species mass densities in kg/m³, comma separated (e.g., "N2=0.95,O2=0.29")
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_parser = parse_species_value,
        conflicts_with_all = ["temperature", "mass_density"]
    )]
    pub species: Vec<(String, f64)>,

    /// Temperature in K (Kerl polarizability mode)
    #[arg(short, long, requires = "mass_density")]
    pub temperature: Option<f64>,

    /// Mass density in kg/m³ (Kerl polarizability mode)
    #[arg(short = 'd', long, requires = "temperature")]
    pub mass_density: Option<f64>,

    /// Molecule for the Kerl mode (Air, H2, N2, O2)
    #[arg(short, long, default_value = "Air")]
    pub molecule: String,

    /// Wavelength in nm (Kerl mode)
    #[arg(short, long, default_value_t = DEFAULT_WAVELENGTH_NM)]
    pub wavelength: f64,

    /// Geometric path length in m for the optical path length
    #[arg(short = 'L', long)]
    pub distance: Option<f64>,
}

// ─────────────────────────────────────────────────────────────
// Gladstone-Dale
// ─────────────────────────────────────────────────────────────

/// gladstone-dale 子命令参数
#[derive(Args, Debug)]
pub struct GladstoneDaleArgs {
    /// Species mass densities in kg/m³ for a mixture (e.g., "N2=0.95,O2=0.29")
    #[arg(short, long, value_delimiter = ',', value_parser = parse_species_value)]
    pub species: Vec<(String, f64)>,
}

// ─────────────────────────────────────────────────────────────
// 大气剖面
// ─────────────────────────────────────────────────────────────

/// 剖面输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ProfileFormat {
    /// CSV data file
    Csv,
    /// PNG image
    Png,
    /// SVG vector image
    Svg,
}

/// atmosphere 子命令参数
#[derive(Args, Debug)]
pub struct AtmosphereArgs {
    /// Geometric altitude range in m (e.g., "0-80000")
    #[arg(short, long, default_value = "0-80000")]
    pub range: String,

    /// Altitude step in m
    #[arg(long, default_value_t = 1000.0)]
    pub step: f64,

    /// Water vapour partial pressure in mbar
    #[arg(long, default_value_t = 0.0)]
    pub vapor_pressure: f64,

    /// Output file (CSV, PNG or SVG)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (auto-detected from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<ProfileFormat>,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0, env = "HAOT_JOBS")]
    pub jobs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species_value() {
        assert_eq!(
            parse_species_value("N2=0.95").unwrap(),
            ("N2".to_string(), 0.95)
        );
        assert_eq!(
            parse_species_value(" O2 = 1e-3").unwrap(),
            ("O2".to_string(), 1e-3)
        );
        assert!(parse_species_value("N2").is_err());
        assert!(parse_species_value("N2=abc").is_err());
    }
}
