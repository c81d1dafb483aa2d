use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:bliotech.sqlite";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct Config {
	pub database_url: String,
	pub bind_addr: SocketAddr,
}

impl Config {
	/// Reads `DATABASE_URL` and `BIND_ADDR`, loading a `.env` file first when
	/// one exists. Unset variables fall back to the defaults above.
	pub fn from_env() -> Result<Self, ConfigError> {
		if let Err(e) = dotenvy::dotenv() {
			if !e.not_found() {
				return Err(e.into());
			}
		}

		let database_url = std::env::var("DATABASE_URL")
			.unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
		let bind_addr = std::env::var("BIND_ADDR")
			.unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

		Self::new(database_url, &bind_addr)
	}

	pub fn new(database_url: String, bind_addr: &str) -> Result<Self, ConfigError> {
		let bind_addr = bind_addr
			.parse()
			.map_err(|e| ConfigError::BindAddr(bind_addr.to_string(), e))?;
		Ok(Config { database_url, bind_addr })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_bind_addr() {
		let cfg = Config::new("sqlite::memory:".into(), "127.0.0.1:3000").unwrap();
		assert_eq!(cfg.bind_addr.port(), 3000);
		assert_eq!(cfg.database_url, "sqlite::memory:");
	}

	#[test]
	fn rejects_garbage_bind_addr() {
		let err = Config::new(DEFAULT_DATABASE_URL.into(), "localhost").unwrap_err();
		assert!(matches!(err, ConfigError::BindAddr(ref addr, _) if addr == "localhost"));
	}
}
