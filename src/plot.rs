//! # 剖面图生成
//!
//! 使用 `plotters` 库绘制随高度变化的剖面曲线（横轴为物理量，纵轴为高度）。
//!
//! ## 功能
//! - 单曲线剖面图
//! - 支持 PNG 和 SVG 输出
//!
//! ## 依赖关系
//! - 被 `commands/optics.rs` 调用
//! - 使用 `plotters` 渲染图表

use haot::error::{HaotError, Result};

use plotters::prelude::*;
use std::path::Path;

/// 图表外观设置
#[derive(Debug, Clone)]
pub struct PlotConfig<'a> {
    pub title: &'a str,
    pub x_desc: &'a str,
    pub y_desc: &'a str,
    pub width: u32,
    pub height: u32,
    pub use_svg: bool,
}

/// 生成剖面图，`data` 为 (物理量, 高度) 点列
pub fn generate_profile_plot(
    data: &[(f64, f64)],
    output_path: &Path,
    config: &PlotConfig,
) -> Result<()> {
    if data.is_empty() {
        return Err(HaotError::PlotError("no data points to plot".to_string()));
    }

    if config.use_svg {
        let root = SVGBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_profile_chart(&root, data, config)?;
        root.present()
            .map_err(|e| HaotError::PlotError(e.to_string()))?;
    } else {
        let root =
            BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
        draw_profile_chart(&root, data, config)?;
        root.present()
            .map_err(|e| HaotError::PlotError(e.to_string()))?;
    }
    Ok(())
}

/// 绘制剖面图的核心逻辑
fn draw_profile_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    data: &[(f64, f64)],
    config: &PlotConfig,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| HaotError::PlotError(format!("{:?}", e)))?;

    let (x_min, x_max) = padded_range(data.iter().map(|(x, _)| *x));
    let (y_min, y_max) = padded_range(data.iter().map(|(_, y)| *y));

    let mut chart = ChartBuilder::on(root)
        .caption(config.title, ("sans-serif", 28).into_font())
        .margin(30)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| HaotError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .x_desc(config.x_desc)
        .y_desc(config.y_desc)
        .x_label_style(("sans-serif", 16))
        .y_label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .draw()
        .map_err(|e| HaotError::PlotError(format!("{:?}", e)))?;

    let line_color = RGBColor(0, 102, 204);
    chart
        .draw_series(LineSeries::new(
            data.iter().map(|(x, y)| (*x, *y)),
            line_color.stroke_width(2),
        ))
        .map_err(|e| HaotError::PlotError(format!("{:?}", e)))?;

    chart
        .draw_series(
            data.iter()
                .map(|(x, y)| Circle::new((*x, *y), 3, line_color.filled())),
        )
        .map_err(|e| HaotError::PlotError(format!("{:?}", e)))?;

    Ok(())
}

/// 坐标范围两侧各留 5% 边距；单点时给固定宽度
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    if span > 0.0 {
        (min - 0.05 * span, max + 0.05 * span)
    } else {
        let pad = if min == 0.0 { 1.0 } else { 0.05 * min.abs() };
        (min - pad, max + pad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_range() {
        let (lo, hi) = padded_range([0.0, 10.0, 5.0].into_iter());
        assert!((lo + 0.5).abs() < 1e-12);
        assert!((hi - 10.5).abs() < 1e-12);

        let (lo, hi) = padded_range(std::iter::once(0.0));
        assert_eq!((lo, hi), (-1.0, 1.0));
    }

    #[test]
    fn test_empty_data_rejected() {
        let config = PlotConfig {
            title: "empty",
            x_desc: "x",
            y_desc: "y",
            width: 100,
            height: 100,
            use_svg: true,
        };
        let path = std::env::temp_dir().join("haot_empty_plot.svg");
        assert!(matches!(
            generate_profile_plot(&[], &path, &config),
            Err(HaotError::PlotError(_))
        ));
    }
}
