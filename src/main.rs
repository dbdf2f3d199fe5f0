//! application entry point

use crate::server::model::config::ServerConfig;
use anyhow::Context;
use derive_more::Display;
use log::info;
use std::env;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod server;

const DOTENV_DEV_PATH: &str = ".env.dev";
const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::UNSPECIFIED;
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ORDERS_FILE: &str = "orders.json";
const DEFAULT_PUBLIC_DIR: &str = "public";

#[actix_web::main()]
async fn main() -> anyhow::Result<()> {
    // bootstrap
    // a. env
    let env = match env::var("APP_ENV") {
        Ok(v) => v.parse().map_err(anyhow::Error::msg)?,
        Err(_) => Env::Dev, // default dev env if absent
    };

    match env {
        Env::Prod | Env::Stg => {} // provided by the deployment
        Env::Dev => {
            // optional, a missing dotenv file just means defaults
            dotenvy::from_path(Path::new(DOTENV_DEV_PATH)).ok();
        }
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // c. run app
    let host = match env::var("HOST") {
        Ok(v) => Ipv4Addr::from_str(&v).with_context(|| format!("failed to parse HOST={v}"))?,
        Err(_) => DEFAULT_HOST,
    };
    let port = match env::var("PORT") {
        Ok(v) => v.parse::<u16>().with_context(|| format!("failed to parse PORT={v}"))?,
        Err(_) => DEFAULT_PORT,
    };
    let config = ServerConfig::new(
        SocketAddrV4::new(host, port),
        PathBuf::from(env::var("ORDERS_FILE").unwrap_or(DEFAULT_ORDERS_FILE.to_string())),
        PathBuf::from(env::var("PUBLIC_DIR").unwrap_or(DEFAULT_PUBLIC_DIR.to_string())),
    );

    info!("App is starting in env={}, config={:?}", env, config);

    server::run(config).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
