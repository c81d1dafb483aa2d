use axum::{
	extract::multipart::MultipartError,
	http::StatusCode,
	response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("invalid BIND_ADDR {0:?}: {1}")]
	BindAddr(String, std::net::AddrParseError),
	#[error("failed to read .env file: {0}")]
	DotEnv(#[from] dotenvy::Error),
}

/// Request-time failures. Store errors are never swallowed: they end the
/// request with a 500.
#[derive(Error, Debug)]
pub enum AppError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("malformed upload: {0}")]
	Multipart(#[from] MultipartError),
	#[error("not found: {0}")]
	NotFound(String),
}

impl IntoResponse for AppError {
	fn into_response(self) -> Response {
		let (status, message) = match self {
			AppError::Database(db_err) => {
				tracing::error!(error = ?db_err, "database error");
				(
					StatusCode::INTERNAL_SERVER_ERROR,
					"Erro interno no banco de dados.".to_string(),
				)
			}
			AppError::Multipart(mp_err) => {
				tracing::warn!(error = %mp_err, "rejected multipart body");
				(StatusCode::BAD_REQUEST, "Envio de formulário inválido.".to_string())
			}
			AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
		};

		(status, views::error_page(status, &message)).into_response()
	}
}
