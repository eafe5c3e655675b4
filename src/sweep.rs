//! # 参数扫描执行器
//!
//! 在均匀网格上并行求值公式。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，线程数由 `--jobs` 控制（0 = 自动）
//! - 进度条显示
//! - 逐点收集失败信息，成功结果保持网格顺序
//!
//! ## 依赖关系
//! - 被 `commands/aero.rs`, `commands/optics.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use haot::error::{HaotError, Result};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 单点求值结果
#[derive(Debug, Clone)]
pub enum PointResult<T> {
    /// 求值成功
    Success(T),
    /// 求值失败
    Failed(f64, String), // (网格点, 错误信息)
}

/// 扫描结果汇总
#[derive(Debug)]
pub struct SweepResult<T> {
    /// 成功行，按网格顺序
    pub rows: Vec<T>,
    /// 失败详情
    pub failures: Vec<(f64, String)>,
}

impl<T> Default for SweepResult<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> SweepResult<T> {
    /// 合并单点结果
    pub fn merge(&mut self, result: PointResult<T>) {
        match result {
            PointResult::Success(row) => self.rows.push(row),
            PointResult::Failed(x, err) => self.failures.push((x, err)),
        }
    }

    /// 总点数
    pub fn total(&self) -> usize {
        self.rows.len() + self.failures.len()
    }
}

/// 扫描执行器
pub struct SweepRunner {
    /// 并行作业数
    jobs: usize,
}

impl SweepRunner {
    /// 创建新的扫描执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行作业数
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 在网格上并行求值
    pub fn run<T, F>(&self, grid: &[f64], message: &str, evaluate: F) -> Result<SweepResult<T>>
    where
        T: Send,
        F: Fn(f64) -> Result<T> + Sync + Send,
    {
        let pb = progress::create_progress_bar(grid.len() as u64, message);
        let failed_count = AtomicUsize::new(0);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| HaotError::Other(format!("Failed to build thread pool: {}", e)))?;

        // par_iter + collect 保持输入顺序
        let results: Vec<PointResult<T>> = pool.install(|| {
            grid.par_iter()
                .map(|&x| {
                    let result = match evaluate(x) {
                        Ok(row) => PointResult::Success(row),
                        Err(e) => {
                            let failed = failed_count.fetch_add(1, Ordering::Relaxed) + 1;
                            pb.set_message(format!("{} ({} failed)", message, failed));
                            PointResult::Failed(x, e.to_string())
                        }
                    };
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        let mut sweep_result = SweepResult::default();
        for result in results {
            sweep_result.merge(result);
        }

        Ok(sweep_result)
    }
}

/// 单次扫描的网格点上限
pub const MAX_GRID_POINTS: usize = 1_000_000;

/// 由 [min, max] 与步长构造均匀网格（包含端点）
pub fn linspace(min: f64, max: f64, step: f64) -> Result<Vec<f64>> {
    if !(step.is_finite() && step > 0.0) {
        return Err(HaotError::InvalidRange(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if !(min.is_finite() && max.is_finite()) || max < min {
        return Err(HaotError::InvalidRange(format!("{} to {}", min, max)));
    }

    // 容许浮点误差，避免丢掉末端点
    let ratio = ((max - min) / step + 1e-9).floor();
    if !(ratio.is_finite() && ratio < MAX_GRID_POINTS as f64) {
        return Err(HaotError::InvalidRange(format!(
            "{} to {} with step {} exceeds {} grid points",
            min, max, step, MAX_GRID_POINTS
        )));
    }
    let n_steps = ratio as usize;
    Ok((0..=n_steps).map(|i| min + i as f64 * step).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_endpoints() {
        let grid = linspace(0.0, 1.0, 0.25).unwrap();
        assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(5.0, 5.0, 1.0).unwrap(), vec![5.0]);
        assert_eq!(linspace(0.0, 1.0, 0.1).unwrap().len(), 11);
    }

    #[test]
    fn test_linspace_invalid() {
        assert!(linspace(0.0, 1.0, 0.0).is_err());
        assert!(linspace(1.0, 0.0, 0.1).is_err());
        assert!(linspace(f64::NAN, 1.0, 0.1).is_err());
    }

    #[test]
    fn test_linspace_rejects_oversized_grid() {
        assert!(matches!(
            linspace(0.0, 1e300, 1e-300),
            Err(HaotError::InvalidRange(_))
        ));
        assert!(linspace(0.0, 80_000.0, 1e-9).is_err());
        let grid = linspace(0.0, 999_999.0, 1.0).unwrap();
        assert_eq!(grid.len(), MAX_GRID_POINTS);
    }

    #[test]
    fn test_sweep_keeps_order_and_collects_failures() {
        let grid: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let runner = SweepRunner::new(4);
        let result = runner
            .run(&grid, "test", |x| {
                if x as usize % 10 == 3 {
                    Err(HaotError::InvalidArgument(format!("bad point {}", x)))
                } else {
                    Ok(x * 2.0)
                }
            })
            .unwrap();

        assert_eq!(result.total(), 50);
        assert_eq!(result.failures.len(), 5);
        assert!(result.rows.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(result.failures[0].0, 3.0);
    }

    #[test]
    fn test_auto_jobs() {
        assert!(SweepRunner::new(0).jobs() >= 1);
        assert_eq!(SweepRunner::new(3).jobs(), 3);
    }
}
