//! Command-line and environment configuration.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", about = "Serve the todo item resource over HTTP")]
pub struct Config {
    /// SQLite connection URL. The file is created if missing.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://todos.db")]
    pub database_url: String,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
