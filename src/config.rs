use eyre::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<Config> = Lazy::new(|| Config::try_from_env().unwrap());

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Config {
    pub fn try_from_env() -> eyre::Result<Self> {
        envy::from_env().context("failed to read config from environment variables")
    }
}
