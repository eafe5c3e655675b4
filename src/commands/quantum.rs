//! # quantum 命令实现
//!
//! ## 功能
//! - 零点能与 Dunham 系数
//! - 能级表（谐振子、刚性转子、Born-Oppenheimer）
//! - 配分函数与布居分布（可导出 CSV）
//!
//! ## 依赖关系
//! - 使用 `cli/quantum.rs` 定义的参数
//! - 使用 `haot::quantum_mechanics`, `haot::conversions`
//! - 使用 `export.rs` 导出分布

use crate::cli::quantum::{
    DistributionArgs, DunhamArgs, LevelsArgs, MoleculeArgs, PartitionArgs, QuantumArgs,
    QuantumCommands,
};
use crate::export;
use crate::utils::output;

use haot::conversions::wavenumber_to_electronvolt;
use haot::error::Result;
use haot::quantum_mechanics::{self as qm, LevelSelection};
use tabled::{Table, Tabled};

/// 执行 quantum 命令
pub fn execute(args: QuantumArgs) -> Result<()> {
    match args.command {
        QuantumCommands::Zpe(a) => execute_zpe(a),
        QuantumCommands::Levels(a) => execute_levels(a),
        QuantumCommands::Partition(a) => execute_partition(a),
        QuantumCommands::Distribution(a) => execute_distribution(a),
        QuantumCommands::Dunham(a) => execute_dunham(a),
    }
}

fn execute_zpe(args: MoleculeArgs) -> Result<()> {
    output::print_header(&format!("Zero-Point Energy: {}", args.molecule));
    let zpe = qm::zero_point_energy(&args.molecule)?;
    output::print_value("ZPE", zpe, "cm⁻¹");
    output::print_value("ZPE", wavenumber_to_electronvolt(zpe), "eV");
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 能级表
// ─────────────────────────────────────────────────────────────

fn execute_levels(args: LevelsArgs) -> Result<()> {
    output::print_header(&format!("Energy Levels: {}", args.molecule));

    #[derive(Tabled)]
    struct LevelRow {
        #[tabled(rename = "v")]
        v: u32,
        #[tabled(rename = "J")]
        j: u32,
        #[tabled(rename = "G(v) (cm⁻¹)")]
        vibrational: String,
        #[tabled(rename = "F(J) (cm⁻¹)")]
        rotational: String,
        #[tabled(rename = "E_BO (cm⁻¹)")]
        born_oppenheimer: String,
    }

    let mut rows = Vec::new();
    for v in 0..=args.max_vibrational {
        let vibrational = qm::vibrational_energy_k(v, &args.molecule)?;
        for j in 0..=args.max_rotational {
            rows.push(LevelRow {
                v,
                j,
                vibrational: format!("{:.4}", vibrational),
                rotational: format!("{:.4}", qm::rotational_energy_k(j, &args.molecule)?),
                born_oppenheimer: format!(
                    "{:.4}",
                    qm::born_oppenheimer_approximation(v, j, &args.molecule)?
                ),
            });
        }
    }

    println!("{}", Table::new(&rows));
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// 配分函数 / 布居分布
// ─────────────────────────────────────────────────────────────

fn execute_partition(args: PartitionArgs) -> Result<()> {
    output::print_header(&format!(
        "Partition Functions: {} at {} K",
        args.molecule, args.temperature
    ));
    output::print_info(&format!(
        "Truncated at v = {}, J = {}",
        args.max_vibrational, args.max_rotational
    ));

    let z_vib =
        qm::vibrational_partition_function(args.max_vibrational, args.temperature, &args.molecule)?;
    let z_rot =
        qm::rotational_partition_function(args.max_rotational, args.temperature, &args.molecule)?;
    let z_bo = qm::born_oppenheimer_partition_function(
        args.max_vibrational,
        args.max_rotational,
        args.temperature,
        &args.molecule,
    )?;

    output::print_value("Z_vib", z_vib, "");
    output::print_value("Z_rot", z_rot, "");
    output::print_value("Z_vib · Z_rot", z_vib * z_rot, "");
    output::print_value("Z_BO", z_bo, "");
    Ok(())
}

fn execute_distribution(args: DistributionArgs) -> Result<()> {
    output::print_header(&format!(
        "Population Distribution: {} at {} K",
        args.molecule, args.temperature
    ));

    let selection = LevelSelection {
        max_vibrational: args.max_vibrational,
        max_rotational: args.max_rotational,
        born_oppenheimer: args.born_oppenheimer,
    };
    let distribution = qm::distribution_function(args.temperature, &args.molecule, selection)?;

    let mut populated: Vec<(usize, usize, f64)> = distribution
        .iter()
        .enumerate()
        .flat_map(|(v, row)| row.iter().enumerate().map(move |(j, &p)| (v, j, p)))
        .collect();
    let total: f64 = populated.iter().map(|(_, _, p)| p).sum();
    populated.sort_by(|a, b| b.2.total_cmp(&a.2));

    #[derive(Tabled)]
    struct PopulationRow {
        #[tabled(rename = "v")]
        v: usize,
        #[tabled(rename = "J")]
        j: usize,
        #[tabled(rename = "N(v,J)/N")]
        fraction: String,
    }

    let rows: Vec<PopulationRow> = populated
        .iter()
        .take(args.top_n)
        .map(|&(v, j, p)| PopulationRow {
            v,
            j,
            fraction: format!("{:.6e}", p),
        })
        .collect();

    output::print_info(&format!("Top {} populated levels", rows.len()));
    println!("{}", Table::new(&rows));
    output::print_value("Sum of populations", total, "");

    if let Some(path) = &args.output {
        export::distribution_to_csv(&distribution, path)?;
        output::print_success(&format!("Distribution saved to '{}'", path.display()));
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────
// Dunham 系数
// ─────────────────────────────────────────────────────────────

fn execute_dunham(args: DunhamArgs) -> Result<()> {
    output::print_header(&format!("Dunham Potential Coefficients: {}", args.molecule));

    let (a_0, a_1, a_2) = qm::potential_dunham_coef_012(&args.molecule)?;
    output::print_value("a₀", a_0, "cm⁻¹");
    output::print_value("a₁", a_1, "");
    output::print_value("a₂", a_2, "");

    for m in 3..=args.order {
        let a_m = qm::potential_dunham_coeff_m(a_1, a_2, m)?;
        output::print_value(&format!("a{}", m), a_m, "");
    }
    Ok(())
}
