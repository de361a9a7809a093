//! Role Store - employee role persistence on SurrealDB
//!
//! # 模块结构
//!
//! ```text
//! role-store/src/
//! ├── core/          # 配置
//! ├── db/            # 连接、schema、文档映射、仓库、默认数据
//! └── utils/         # 日志
//! ```
//!
//! The role model itself lives in `shared::models` and carries no storage
//! details; everything store-specific stays in [`db`].

pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::Config;
pub use db::DbService;
pub use db::repository::{RepoError, RepoResult, RoleRepository};
pub use db::seed::ensure_default_roles;
pub use utils::{init_logger, init_logger_with_file};

/// Load `.env` (if present) and initialize logging from the environment
pub fn setup_environment() -> anyhow::Result<Config> {
    // .env 不存在时忽略
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;

    if let Some(dir) = config.log_dir.as_deref() {
        utils::cleanup_old_logs(std::path::Path::new(dir), utils::logger::LOG_RETENTION_DAYS)?;
    }

    Ok(config)
}
