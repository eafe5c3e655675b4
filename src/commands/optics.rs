//! # optics 命令实现
//!
//! ## 功能
//! - Kerl 极化率、折射率及派生量（介电常数、电极化率、光程）
//! - Gladstone-Dale 常数表
//! - 标准大气折射率剖面：并行扫描高度，输出表格并导出 CSV/PNG/SVG
//!
//! ## 依赖关系
//! - 使用 `cli/optics.rs` 定义的参数
//! - 使用 `haot::optics`, `haot::atmosphere`
//! - 使用 `sweep.rs`, `export.rs`, `plot.rs`

use crate::cli::optics::{
    AtmosphereArgs, GladstoneDaleArgs, KerlArgs, OpticsArgs, OpticsCommands, ProfileFormat,
    RefractionArgs,
};
use crate::commands::{extension_of, parse_range, report_sweep};
use crate::export;
use crate::plot::{self, PlotConfig};
use crate::sweep::{self, SweepRunner};
use crate::utils::output;

use haot::atmosphere::Atmosphere;
use haot::error::{HaotError, Result};
use haot::optics::{self, DiluteDense};
use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 执行 optics 命令
pub fn execute(args: OpticsArgs) -> Result<()> {
    match args.command {
        OpticsCommands::Kerl(a) => execute_kerl(a),
        OpticsCommands::Refraction(a) => execute_refraction(a),
        OpticsCommands::GladstoneDale(a) => execute_gladstone_dale(a),
        OpticsCommands::Atmosphere(a) => execute_atmosphere(a),
    }
}

// ─────────────────────────────────────────────────────────────
// Kerl / 折射率
// ─────────────────────────────────────────────────────────────

fn execute_kerl(args: KerlArgs) -> Result<()> {
    output::print_header(&format!("Kerl Polarizability: {}", args.molecule));
    let alpha =
        optics::kerl_polarizability_temperature(args.temperature, &args.molecule, args.wavelength)?;

    output::print_value("Temperature", args.temperature, "K");
    output::print_value("Wavelength", args.wavelength, "nm");
    output::print_value("Polarizability", alpha, "m³");
    output::print_value("Polarizability", alpha * 1e30, "Å³");
    Ok(())
}

fn execute_refraction(args: RefractionArgs) -> Result<()> {
    let index = if args.species.is_empty() {
        let (Some(temperature), Some(mass_density)) = (args.temperature, args.mass_density) else {
            return Err(HaotError::InvalidArgument(
                "give --species, or both --temperature and --mass-density".to_string(),
            ));
        };
        output::print_header(&format!("Refractive Index: {}", args.molecule));
        output::print_info(&format!(
            "Kerl polarizability at T = {} K, ρ = {} kg/m³, λ = {} nm",
            temperature, mass_density, args.wavelength
        ));
        optics::index_of_refraction_density_temperature(
            temperature,
            mass_density,
            &args.molecule,
            args.wavelength,
        )?
    } else {
        output::print_header("Refractive Index: Species Mixture");
        for (species, density) in &args.species {
            output::print_info(&format!("{:<5} {} kg/m³", species, density));
        }
        optics::index_of_refraction(&args.species)?
    };

    let permittivity = optics::dielectric_material_const(index)?;
    let susceptibility = DiluteDense {
        dilute: optics::electric_susceptibility(index.dilute)?,
        dense: optics::electric_susceptibility(index.dense)?,
    };

    let mut rows = vec![
        ("n", index),
        ("n − 1", DiluteDense {
            dilute: index.dilute - 1.0,
            dense: index.dense - 1.0,
        }),
        ("ε (F/m)", permittivity),
        ("χ", susceptibility),
    ];
    if let Some(distance) = args.distance {
        rows.push(("OPL (m)", optics::optical_path_length(index, distance)?));
    }

    print_dilute_dense_table(&rows);
    Ok(())
}

fn print_dilute_dense_table(values: &[(&str, DiluteDense)]) {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Quantity")]
        name: String,
        #[tabled(rename = "Dilute")]
        dilute: String,
        #[tabled(rename = "Dense")]
        dense: String,
    }

    let rows: Vec<Row> = values
        .iter()
        .map(|(name, v)| Row {
            name: name.to_string(),
            dilute: format!("{:.9e}", v.dilute),
            dense: format!("{:.9e}", v.dense),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

fn execute_gladstone_dale(args: GladstoneDaleArgs) -> Result<()> {
    output::print_header("Gladstone-Dale Constants");

    let species = (!args.species.is_empty()).then_some(args.species.as_slice());
    let gd = optics::gladstone_dale_constant(species)?;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Species")]
        species: String,
        #[tabled(rename = "K (m³/kg)")]
        constant: String,
    }

    let rows: Vec<Row> = gd
        .species
        .iter()
        .map(|(s, k)| Row {
            species: s.clone(),
            constant: format!("{:.6e}", k),
        })
        .collect();
    println!("{}", Table::new(&rows));

    if let Some(total) = gd.total {
        output::print_value("Mixture constant", total, "m³/kg");
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 大气剖面扫描
// ─────────────────────────────────────────────────────────────

/// 大气剖面行
#[derive(Debug, Clone, Serialize)]
struct ProfileRow {
    altitude_m: f64,
    temperature_k: f64,
    pressure_pa: f64,
    density: f64,
    speed_of_sound: f64,
    refractive_index: f64,
    /// (n − 1)·10⁶
    refractivity: f64,
    layer: &'static str,
}

fn profile_at(altitude_m: f64, vapor_pressure_mbar: f64) -> Result<ProfileRow> {
    let atm = Atmosphere::at(altitude_m)?;
    let n = optics::atmospheric_index_of_refraction(altitude_m, vapor_pressure_mbar)?;
    Ok(ProfileRow {
        altitude_m,
        temperature_k: atm.temperature_k,
        pressure_pa: atm.pressure_pa,
        density: atm.density,
        speed_of_sound: atm.speed_of_sound,
        refractive_index: n,
        refractivity: (n - 1.0) * 1e6,
        layer: atm.layer,
    })
}

fn execute_atmosphere(args: AtmosphereArgs) -> Result<()> {
    output::print_header("Standard Atmosphere Refractive Index Profile");

    let (z_min, z_max) = parse_range(&args.range)?;
    let grid = sweep::linspace(z_min, z_max, args.step)?;
    output::print_info(&format!(
        "Altitude {:.0} m to {:.0} m, step {} m ({} points)",
        z_min,
        z_max,
        args.step,
        grid.len()
    ));

    let runner = SweepRunner::new(args.jobs);
    let vapor = args.vapor_pressure;
    let result = runner.run(&grid, "Atmosphere", |z| profile_at(z, vapor))?;

    print_profile_table(&result.rows);
    report_sweep(&result);

    if let Some(path) = &args.output {
        let format = args
            .format
            .unwrap_or_else(|| guess_format_from_extension(path));
        write_profile(&result.rows, path, format, &args)?;
        output::print_success(&format!("Profile saved to '{}'", path.display()));
    }

    Ok(())
}

fn write_profile(
    rows: &[ProfileRow],
    path: &Path,
    format: ProfileFormat,
    args: &AtmosphereArgs,
) -> Result<()> {
    match format {
        ProfileFormat::Csv => export::rows_to_csv(rows, path),
        ProfileFormat::Png | ProfileFormat::Svg => {
            let data: Vec<(f64, f64)> = rows
                .iter()
                .map(|r| (r.refractivity, r.altitude_m / 1e3))
                .collect();
            let config = PlotConfig {
                title: "Atmospheric Refractivity",
                x_desc: "(n − 1) × 10⁶",
                y_desc: "Altitude (km)",
                width: args.width,
                height: args.height,
                use_svg: format == ProfileFormat::Svg,
            };
            plot::generate_profile_plot(&data, path, &config)
        }
    }
}

/// 从文件扩展名推断输出格式
fn guess_format_from_extension(path: &Path) -> ProfileFormat {
    match extension_of(path).as_deref() {
        Some("png") => ProfileFormat::Png,
        Some("svg") => ProfileFormat::Svg,
        _ => ProfileFormat::Csv,
    }
}

fn print_profile_table(rows: &[ProfileRow]) {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "z (m)")]
        altitude: String,
        #[tabled(rename = "T (K)")]
        temperature: String,
        #[tabled(rename = "p (Pa)")]
        pressure: String,
        #[tabled(rename = "ρ (kg/m³)")]
        density: String,
        #[tabled(rename = "N")]
        refractivity: String,
        #[tabled(rename = "Layer")]
        layer: String,
    }

    let rows: Vec<Row> = rows
        .iter()
        .map(|r| Row {
            altitude: format!("{:.0}", r.altitude_m),
            temperature: format!("{:.2}", r.temperature_k),
            pressure: format!("{:.4e}", r.pressure_pa),
            density: format!("{:.4e}", r.density),
            refractivity: format!("{:.4}", r.refractivity),
            layer: r.layer.to_string(),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_profile_row_sea_level() {
        let row = profile_at(0.0, 0.0).unwrap();
        assert!((row.refractivity - 272.87).abs() < 0.01);
        assert_eq!(row.layer, "Troposphere");
        assert!(profile_at(95_000.0, 0.0).is_err());
    }

    #[test]
    fn test_guess_format() {
        assert_eq!(
            guess_format_from_extension(&PathBuf::from("n.png")),
            ProfileFormat::Png
        );
        assert_eq!(
            guess_format_from_extension(&PathBuf::from("n.SVG")),
            ProfileFormat::Svg
        );
        assert_eq!(
            guess_format_from_extension(&PathBuf::from("n.dat")),
            ProfileFormat::Csv
        );
    }
}
