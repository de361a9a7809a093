/// Store and logging configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | DB_ENDPOINT | rocksdb://data/role-store | 存储地址 (`mem://`, `rocksdb://path`, `ws://host:port`) |
/// | DB_NAMESPACE | staff | 命名空间 |
/// | DB_DATABASE | main | 数据库 |
/// | DB_USERNAME | - | root 用户名 (可选) |
/// | DB_PASSWORD | - | root 密码 (可选) |
/// | LOG_LEVEL | info | 日志级别 (RUST_LOG 优先) |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | - | 按天滚动的日志目录 |
///
/// # 示例
///
/// ```ignore
/// DB_ENDPOINT=ws://127.0.0.1:8000 DB_USERNAME=root DB_PASSWORD=root cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub db_endpoint: String,
    pub db_namespace: String,
    pub db_database: String,
    pub db_username: Option<String>,
    pub db_password: Option<String>,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

const DEFAULT_ENDPOINT: &str = "rocksdb://data/role-store";
const DEFAULT_NAMESPACE: &str = "staff";
const DEFAULT_DATABASE: &str = "main";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            db_endpoint: std::env::var("DB_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
            db_namespace: std::env::var("DB_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_NAMESPACE.into()),
            db_database: std::env::var("DB_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.into()),
            db_username: std::env::var("DB_USERNAME").ok(),
            db_password: std::env::var("DB_PASSWORD").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: parse_flag(std::env::var("LOG_JSON").ok(), false),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Defaults with an in-memory store, for tests
    pub fn in_memory() -> Self {
        Self {
            db_endpoint: "mem://".into(),
            db_namespace: DEFAULT_NAMESPACE.into(),
            db_database: DEFAULT_DATABASE.into(),
            db_username: None,
            db_password: None,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }

    /// Root credentials, only when both halves are set
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.db_username, &self.db_password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

fn parse_flag(value: Option<String>, default: bool) -> bool {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true".into()), false));
        assert!(!parse_flag(Some("false".into()), true));
        assert!(parse_flag(Some("yes".into()), true));
        assert!(!parse_flag(None, false));
    }

    #[test]
    fn test_in_memory_defaults() {
        let config = Config::in_memory();
        assert_eq!(config.db_endpoint, "mem://");
        assert_eq!(config.db_namespace, "staff");
        assert_eq!(config.db_database, "main");
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_credentials_need_both_halves() {
        let mut config = Config::in_memory();
        config.db_username = Some("root".into());
        assert!(config.credentials().is_none());

        config.db_password = Some("secret".into());
        assert_eq!(config.credentials(), Some(("root", "secret")));
    }
}
