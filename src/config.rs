use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
};

pub const PORT: u16 = 3001;
pub const DB_PATH: &str = "db";

/// Process settings. Fixed at build time; nothing is read from the
/// environment or the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT)),
            db_path: PathBuf::from(DB_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listens_on_all_interfaces() {
        let config = Config::default();
        assert_eq!(config.addr.to_string(), "0.0.0.0:3001");
        assert_eq!(config.db_path, PathBuf::from("db"));
    }
}
