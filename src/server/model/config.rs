use std::net::SocketAddrV4;
use std::path::PathBuf;

/// Server configs
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub addr: SocketAddrV4,
    /// json file holding the whole order collection
    pub orders_file: PathBuf,
    /// static assets, including the html entry point
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn new(addr: SocketAddrV4, orders_file: PathBuf, public_dir: PathBuf) -> Self {
        Self {
            addr,
            orders_file,
            public_dir,
        }
    }
}
