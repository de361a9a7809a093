use anyhow::Context;
use role_store::{DbService, ensure_default_roles, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志, 配置)
    let config = setup_environment()?;

    tracing::info!("Role store starting...");

    // 2. 连接数据库并应用 schema
    let db = DbService::connect(&config)
        .await
        .with_context(|| format!("failed to connect to {}", config.db_endpoint))?;
    let repo = db.role_repository();

    // 3. 默认角色
    ensure_default_roles(&repo)
        .await
        .context("failed to seed default roles")?;

    for role in repo.find_all().await.context("failed to list roles")? {
        tracing::info!(id = ?role.id, name = ?role.name, "Role");
    }

    Ok(())
}
