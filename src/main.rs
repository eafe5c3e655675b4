//! # haot - 高超声速气动光学命令行工具
//!
//! 将 `haot` 库中的闭式公式包装为单一可执行文件。
//!
//! ## 子命令
//! - `aero` - 可压缩流关系与输运性质
//! - `optics` - 极化率、折射率、大气剖面
//! - `quantum` - 双原子分子能级与统计
//! - `coords` - 坐标变换
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── sweep.rs  (并行参数扫描)
//!   │     ├── export.rs (CSV 导出)
//!   │     └── plot.rs   (剖面图)
//!   ├── utils/      (工具函数)
//!   └── haot        (公式库)
//! ```

mod cli;
mod commands;
mod export;
mod plot;
mod sweep;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
