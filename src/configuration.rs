use std::{env, fs, ops::Deref, sync::Arc};

use url::Url;

use crate::{
    dao::get_path,
    error::Error,
    provider::{DatabasePool, NodeApi},
};

#[derive(Debug)]
pub struct AppState<T>(Arc<T>);

impl<T> AppState<T> {
    pub fn new(state: T) -> AppState<T> {
        AppState(Arc::new(state))
    }
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> AppState<T> {
        AppState(Arc::clone(&self.0))
    }
}

impl<T> Deref for AppState<T> {
    type Target = Arc<T>;

    fn deref(&self) -> &Arc<T> {
        &self.0
    }
}

#[derive(Debug)]
pub struct State {
    pub config: Config,
    pub database: DatabasePool,
    pub node: NodeApi,
}

impl State {
    pub async fn new(
        config: Config,
        database: DatabasePool,
        node: NodeApi,
    ) -> Result<State, Error> {
        Self::init_migrations(&database).await?;
        Ok(Self {
            config,
            database,
            node,
        })
    }

    // Only the total_stake time series belongs to this service. The ledger
    // tables are created and populated by the chain indexer.
    async fn init_migrations(database: &DatabasePool) -> Result<(), Error> {
        let files = vec!["total_stake.sql"];

        let dir = env!("CARGO_MANIFEST_DIR");

        for file in files {
            let path = get_path(dir, file);
            let data = fs::read_to_string(path)?;
            sqlx::query(data.as_str()).execute(&database.pool).await?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: Url,
    pub database_url: String,
    pub server_host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub timeout: u64,
    pub total_stake_interval: u64,
    pub enable_poller: bool,
}

impl Config {
    pub fn get_abci_query_url(&self) -> String {
        self.host.to_string()
    }
}

pub fn get_configuration() -> Result<Config, Error> {
    let host = Url::parse(&env::var("HOST")?)?;
    let database_url = env::var("DATABASE_URL")?;
    let server_host = env::var("SERVER_HOST")?;
    let port: u16 = env::var("PORT")?.parse()?;
    let allowed_origins = env::var("ALLOWED_ORIGINS")?
        .split(',')
        .map(|item| item.to_owned())
        .collect::<Vec<String>>();
    let timeout = env::var("TIMEOUT")?.parse()?;
    let total_stake_interval = env::var("TOTAL_STAKE_INTERVAL")?.parse()?;
    let enable_poller = env::var("ENABLE_POLLER")?.parse()?;

    let config = Config {
        host,
        database_url,
        server_host,
        port,
        allowed_origins,
        timeout,
        total_stake_interval,
        enable_poller,
    };

    Ok(config)
}

pub fn set_configuration() -> Result<(), Error> {
    let config_file: &str = ".env";

    let directory = env!("CARGO_MANIFEST_DIR");
    let path = format!("{}/{}", directory, config_file);

    let config_string = fs::read_to_string(path)?;
    parse_config_string(config_string)?;

    Ok(())
}

fn parse_config_string(config: String) -> Result<(), Error> {
    let params: Vec<Option<(&str, &str)>> = config
        .split('\n')
        .map(|s| {
            let element = s.find('=');
            if let Some(e) = element {
                return Some(s.split_at(e));
            }
            None
        })
        .map(|value| {
            if let Some((k, v)) = value {
                return Some((k, &v[1..]));
            }
            None
        })
        .collect();

    for (key, value) in params.into_iter().flatten() {
        env::set_var(key, value);
    }

    Ok(())
}
