//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `sweep.rs`, `export.rs`, `plot.rs`, `utils/`
//! - 子模块: aero, optics, quantum, coords

pub mod aero;
pub mod coords;
pub mod optics;
pub mod quantum;

use crate::cli::Commands;
use crate::sweep::SweepResult;
use crate::utils::output;

use haot::error::{HaotError, Result};
use std::path::Path;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Aero(args) => aero::execute(args),
        Commands::Optics(args) => optics::execute(args),
        Commands::Quantum(args) => quantum::execute(args),
        Commands::Coords(args) => coords::execute(args),
    }
}

/// 解析 "min-max" 形式的范围，允许负数（如 "-5000-0"）
pub fn parse_range(range: &str) -> Result<(f64, f64)> {
    let invalid = || HaotError::InvalidRange(range.to_string());
    let trimmed = range.trim();

    // 首字符可能是负号；指数中的 "e-" 不是分隔符
    let sep = trimmed
        .char_indices()
        .skip(1)
        .find(|&(i, c)| c == '-' && !trimmed[..i].ends_with(|p: char| p == 'e' || p == 'E'))
        .map(|(i, _)| i)
        .ok_or_else(invalid)?;

    let min: f64 = trimmed[..sep].trim().parse().map_err(|_| invalid())?;
    let max: f64 = trimmed[sep + 1..].trim().parse().map_err(|_| invalid())?;

    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Err(HaotError::InvalidRange(format!(
            "{} (must be min < max)",
            range
        )));
    }

    Ok((min, max))
}

/// 打印扫描统计与失败点（最多 10 条）
pub fn report_sweep<T>(result: &SweepResult<T>) {
    output::print_separator();
    output::print_success(&format!(
        "Sweep complete: {} of {} points evaluated",
        result.rows.len(),
        result.total()
    ));

    let failures = &result.failures;
    if failures.is_empty() {
        return;
    }
    output::print_warning("Failed points:");
    for (x, err) in failures.iter().take(10) {
        output::print_error(&format!("  {}: {}", x, err));
    }
    if failures.len() > 10 {
        output::print_warning(&format!("  ... and {} more", failures.len() - 10));
    }
}

/// 文件扩展名（小写）
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}
