//! # 数据导出
//!
//! 将扫描结果与布居分布写为 CSV。
//!
//! ## 支持格式
//! - 任意 `Serialize` 行结构：表头取字段名
//! - 布居分布矩阵：首列为 v，其余列为 J = 0, 1, ...
//!
//! ## 依赖关系
//! - 被 `commands/optics.rs`, `commands/aero.rs`, `commands/quantum.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use haot::error::{HaotError, Result};
use serde::Serialize;
use std::path::Path;

/// 导出行数据为 CSV
pub fn rows_to_csv<T: Serialize>(rows: &[T], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| HaotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出布居分布矩阵为 CSV
pub fn distribution_to_csv(distribution: &[Vec<f64>], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let cols = distribution.first().map(|row| row.len()).unwrap_or(0);
    let mut header = vec!["v".to_string()];
    header.extend((0..cols).map(|j| format!("J={}", j)));
    wtr.write_record(&header)?;

    for (v, row) in distribution.iter().enumerate() {
        let mut record = vec![v.to_string()];
        record.extend(row.iter().map(|p| format!("{:.8e}", p)));
        wtr.write_record(&record)?;
    }

    wtr.flush().map_err(|e| HaotError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[derive(Serialize)]
    struct Row {
        altitude_m: f64,
        temperature_k: f64,
    }

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("haot_{}_{}.csv", name, std::process::id()))
    }

    #[test]
    fn test_rows_to_csv_header_from_fields() {
        let path = temp_path("rows");
        let rows = [
            Row {
                altitude_m: 0.0,
                temperature_k: 288.15,
            },
            Row {
                altitude_m: 1000.0,
                temperature_k: 281.65,
            },
        ];
        rows_to_csv(&rows, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("altitude_m,temperature_k"));
        assert_eq!(lines.next(), Some("0.0,288.15"));
        assert_eq!(content.lines().count(), 3);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_distribution_to_csv_layout() {
        let path = temp_path("dist");
        let distribution = vec![vec![0.5, 0.25], vec![0.125, 0.125]];
        distribution_to_csv(&distribution, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "v,J=0,J=1");
        assert!(lines[1].starts_with("0,5.00000000e-1"));
        assert_eq!(lines.len(), 3);
        fs::remove_file(&path).ok();
    }
}
