//! 终端初始化和清理

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
///
/// 任一步失败时撤销已完成的步骤，不会把用户的 shell 留在 raw mode。
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode().context("failed to enable raw mode")?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        rollback(false);
        return Err(e).context("failed to enter alternate screen");
    }

    match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            rollback(true);
            Err(e).context("failed to create terminal")
        }
    }
}

/// 恢复终端
///
/// 每一步都会执行，返回遇到的第一个错误。
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    let raw = disable_raw_mode().context("failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("failed to show cursor");
    raw.and(screen).and(cursor)
}

fn rollback(entered_alternate_screen: bool) {
    if entered_alternate_screen {
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
            log::warn!("Failed to leave alternate screen during rollback: {e}");
        }
    }
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode during rollback: {e}");
    }
}
