use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};

pub const PORT_ENV: &str = "PORT";
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";
pub const STORAGE_BACKEND_ENV: &str = "SHOWREEL_STORAGE_BACKEND";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/showreel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "mongodb")]
    Mongodb,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::Mongodb => write!(f, "mongodb"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "showreel-gateway")]
pub struct CLI {
    #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, env = MONGODB_URI_ENV, default_value = DEFAULT_MONGODB_URI)]
    pub mongodb_uri: String,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::Mongodb
    )]
    pub storage: StorageBackendArg,
}
