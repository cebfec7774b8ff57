use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "Modelist";

/// Get the Modelist application data root directory.
///
/// 获取 Modelist 应用数据根目录。
///
/// - macOS: ~/Library/Application Support/Modelist
/// - Windows: %APPDATA%\Modelist
/// - Linux: $XDG_DATA_HOME/Modelist or ~/.local/share/Modelist
///
/// Does not create the directory.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir =
        get_platform_data_dir().context("Failed to get platform-specific data directory")?;

    Ok(base_dir.join(APP_DIR_NAME))
}

/// 默认配置文件路径
pub fn config_file_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("modelist.toml"))
}

/// 下载模型存放目录
pub fn downloads_dir() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("downloads"))
}

fn get_platform_data_dir() -> Result<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        // 优先使用 XDG_DATA_HOME
        if let Some(xdg_data_home) = std::env::var_os("XDG_DATA_HOME") {
            return Ok(PathBuf::from(xdg_data_home));
        }
    }

    dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Unable to get platform data directory"))
}
