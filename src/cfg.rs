use std::env;

const DEFAULT_DB_URL: &str = "volunteerhub.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        if let Ok(pool_size) = env::var("DATABASE_CONNECTION_POOL_SIZE") {
            match pool_size.parse() {
                Ok(pool_size) => {
                    cfg.db_connection_pool_size = pool_size;
                }
                Err(_) => {
                    log::warn!("Invalid DATABASE_CONNECTION_POOL_SIZE: {pool_size}");
                }
            }
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
        }
    }
}
