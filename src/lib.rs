// book catalog

pub mod config;
pub mod error;
pub mod flash;
pub mod forms;
pub mod handlers;
pub mod sql;
pub mod types;
pub mod views;

use axum::{
	extract::DefaultBodyLimit,
	routing::{get, post},
	Router,
};
use sqlx::SqlitePool;
use tower_cookies::CookieManagerLayer;
use tower_http::trace::TraceLayer;

/// Handed to every handler. `db` is the single store connection opened at
/// startup; cloning the state shares it.
#[derive(Clone)]
pub struct AppState {
	pub db: SqlitePool,
}

pub fn router(db: SqlitePool) -> Router {
	Router::new()
		.route("/", get(handlers::display_all))
		.route(
			"/cadastrarLivros",
			get(handlers::display_register_book).post(handlers::perform_register_book),
		)
		.route(
			"/atualizar_livro/:id",
			get(handlers::display_update_book).post(handlers::perform_update_book),
		)
		.route("/deletar_livro/:id", post(handlers::perform_delete_book))
		.route("/ver_pdf/:id", get(handlers::display_pdf))
		.route("/pesquisar_livros", get(handlers::perform_search))
		.route(
			"/cadastrar",
			get(handlers::display_register_user).post(handlers::perform_register_user),
		)
		.route("/login", get(handlers::display_login).post(handlers::perform_login))
		.route("/perfil/:username", get(handlers::display_profile))
		.with_state(AppState { db })
		.layer(CookieManagerLayer::new())
		.layer(TraceLayer::new_for_http())
		.layer(DefaultBodyLimit::disable())
}
