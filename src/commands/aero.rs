//! # aero 命令实现
//!
//! ## 功能
//! - Sutherland 输运性质：单点或并行温度扫描（可导出 CSV）
//! - 声速、等熵关系、正/斜激波关系的表格输出
//!
//! ## 依赖关系
//! - 使用 `cli/aero.rs` 定义的参数
//! - 使用 `haot::aerodynamics` 计算
//! - 使用 `sweep.rs` 与 `export.rs` 进行扫描和导出

use crate::cli::aero::{
    AeroArgs, AeroCommands, MachArgs, ObliqueShockArgs, SoundArgs, SutherlandArgs,
};
use crate::commands::{parse_range, report_sweep};
use crate::export;
use crate::sweep::{self, SweepRunner};
use crate::utils::output;

use haot::aerodynamics::{self, ShockBranch};
use haot::error::{HaotError, Result};
use serde::Serialize;
use tabled::{Table, Tabled};

/// 执行 aero 命令
pub fn execute(args: AeroArgs) -> Result<()> {
    match args.command {
        AeroCommands::Sutherland(a) => execute_sutherland(a),
        AeroCommands::Sound(a) => execute_sound(a),
        AeroCommands::Isentropic(a) => execute_isentropic(a),
        AeroCommands::NormalShock(a) => execute_normal_shock(a),
        AeroCommands::ObliqueShock(a) => execute_oblique_shock(a),
    }
}

// ─────────────────────────────────────────────────────────────
// Sutherland
// ─────────────────────────────────────────────────────────────

/// 输运性质扫描行
#[derive(Debug, Clone, Serialize)]
struct TransportRow {
    temperature_k: f64,
    viscosity: f64,
    conductivity: f64,
}

fn transport_at(temperature_k: f64, gas: &str) -> Result<TransportRow> {
    Ok(TransportRow {
        temperature_k,
        viscosity: aerodynamics::sutherland_law_viscosity(temperature_k, gas)?,
        conductivity: aerodynamics::sutherland_law_conductivity(temperature_k, gas)?,
    })
}

fn execute_sutherland(args: SutherlandArgs) -> Result<()> {
    output::print_header(&format!("Sutherland Transport Properties: {}", args.gas));

    if let Some(temperature) = args.temperature {
        let row = transport_at(temperature, &args.gas)?;
        output::print_value("Temperature", row.temperature_k, "K");
        output::print_value("Dynamic viscosity", row.viscosity, "kg/(m·s)");
        output::print_value("Thermal conductivity", row.conductivity, "W/(m·K)");
        return Ok(());
    }

    let range = args.range.as_deref().ok_or_else(|| {
        HaotError::InvalidArgument("either --temperature or --range is required".to_string())
    })?;
    let (t_min, t_max) = parse_range(range)?;
    let grid = sweep::linspace(t_min, t_max, args.step)?;

    let runner = SweepRunner::new(args.jobs);
    output::print_info(&format!(
        "Sweeping {} temperatures on {} threads",
        grid.len(),
        runner.jobs()
    ));
    let gas = args.gas.as_str();
    let result = runner.run(&grid, "Sutherland", |t| transport_at(t, gas))?;

    print_transport_table(&result.rows);
    report_sweep(&result);

    if let Some(path) = &args.output {
        export::rows_to_csv(&result.rows, path)?;
        output::print_success(&format!("Sweep saved to '{}'", path.display()));
    }

    Ok(())
}

fn print_transport_table(rows: &[TransportRow]) {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "T (K)")]
        temperature: String,
        #[tabled(rename = "μ (kg/(m·s))")]
        viscosity: String,
        #[tabled(rename = "k (W/(m·K))")]
        conductivity: String,
    }

    let rows: Vec<Row> = rows
        .iter()
        .map(|r| Row {
            temperature: format!("{:.2}", r.temperature_k),
            viscosity: format!("{:.5e}", r.viscosity),
            conductivity: format!("{:.5e}", r.conductivity),
        })
        .collect();

    if !rows.is_empty() {
        println!("{}", Table::new(&rows));
    }
}

// ─────────────────────────────────────────────────────────────
// 声速 / 等熵 / 激波
// ─────────────────────────────────────────────────────────────

fn execute_sound(args: SoundArgs) -> Result<()> {
    output::print_header("Speed of Sound");
    let a = aerodynamics::speed_of_sound(args.temperature, args.gamma)?;
    output::print_value("Temperature", args.temperature, "K");
    output::print_value("γ", args.gamma, "");
    output::print_value("Speed of sound", a, "m/s");
    Ok(())
}

fn execute_isentropic(args: MachArgs) -> Result<()> {
    output::print_header(&format!("Isentropic Relations (M = {})", args.mach));
    let rel = aerodynamics::isentropic_relations(args.mach, args.gamma)?;

    print_ratio_table(&[
        ("p₀/p", rel.pressure_s),
        ("T₀/T", rel.temperature_s),
        ("ρ₀/ρ", rel.density_s),
    ]);

    if args.mach >= 1.0 {
        output::print_info(&format!(
            "Mach angle μ = {:.4}°",
            aerodynamics::mach_angle_deg(args.mach)
        ));
    }
    Ok(())
}

fn execute_normal_shock(args: MachArgs) -> Result<()> {
    output::print_header(&format!("Normal Shock Relations (M₁ = {})", args.mach));
    let shock = aerodynamics::normal_shock_relations(args.mach, args.gamma)?;

    print_ratio_table(&[
        ("M₂", shock.mach_2),
        ("p₂/p₁", shock.pressure_r),
        ("T₂/T₁", shock.temperature_r),
        ("ρ₂/ρ₁", shock.density_r),
        ("p₀₂/p₀₁", shock.pressure_tr),
        ("T₀₂/T₀₁", shock.temperature_tr),
    ]);
    Ok(())
}

fn execute_oblique_shock(args: ObliqueShockArgs) -> Result<()> {
    output::print_header(&format!("Oblique Shock Relations (M₁ = {})", args.mach));

    let (beta_max, theta_max) = aerodynamics::max_deflection_angle(args.mach, args.gamma)?;
    output::print_info(&format!(
        "Maximum deflection θ_max = {:.4}° at β = {:.4}°",
        theta_max, beta_max
    ));

    let shock_angle = match (args.shock_angle, args.deflection) {
        (Some(beta), _) => beta,
        (None, Some(theta)) => {
            let branch = if args.strong {
                ShockBranch::Strong
            } else {
                ShockBranch::Weak
            };
            let beta =
                aerodynamics::shock_angle_from_deflection(args.mach, theta, args.gamma, branch)?;
            output::print_info(&format!("{:?} shock solution: β = {:.4}°", branch, beta));
            beta
        }
        (None, None) => {
            return Err(HaotError::InvalidArgument(
                "either --shock-angle or --deflection is required".to_string(),
            ))
        }
    };

    let shock = aerodynamics::oblique_shock_relations(args.mach, shock_angle, args.gamma)?;
    print_ratio_table(&[
        ("β (°)", shock_angle),
        ("θ (°)", shock.deflection_angle_deg),
        ("M₂", shock.mach_2),
        ("p₂/p₁", shock.pressure_r),
        ("T₂/T₁", shock.temperature_r),
        ("ρ₂/ρ₁", shock.density_r),
    ]);

    if shock.mach_2 < 1.0 {
        output::print_warning("Flow behind the shock is subsonic");
    }
    Ok(())
}

/// 打印 (名称, 数值) 两列表格
fn print_ratio_table(values: &[(&str, f64)]) {
    #[derive(Tabled)]
    struct RatioRow {
        #[tabled(rename = "Quantity")]
        name: String,
        #[tabled(rename = "Value")]
        value: String,
    }

    let rows: Vec<RatioRow> = values
        .iter()
        .map(|(name, value)| RatioRow {
            name: name.to_string(),
            value: format!("{:.6}", value),
        })
        .collect();

    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_row_air() {
        let row = transport_at(300.0, "Air").unwrap();
        assert!((row.viscosity - 1.8469e-5).abs() < 1e-8);
        assert!(row.conductivity > 0.026 && row.conductivity < 0.0265);
        assert!(transport_at(300.0, "Xenon").is_err());
    }
}
