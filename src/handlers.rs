use axum::{
	extract::{Multipart, Path, Query, State},
	http::header,
	response::{IntoResponse, Redirect, Response},
	Form,
};
use tower_cookies::Cookies;

use crate::error::AppError;
use crate::flash::{self, Flash};
use crate::forms::{BookFields, BookForm, FieldErrors};
use crate::types::{Bid, FormLogin, FormRegister, NewUser, Profile, SearchParams};
use crate::{sql, views, AppState};

/// The one credential pair the login page accepts.
pub const LOGIN_USERNAME: &str = "usuario";
pub const LOGIN_PASSWORD: &str = "senha";

fn to_index(cookies: &Cookies, flash: Flash) -> Response {
	flash::set(cookies, flash);
	Redirect::to("/").into_response()
}

fn book_not_found(id: Bid) -> AppError {
	AppError::NotFound(format!("Livro {id} não encontrado."))
}

// GET /
pub async fn display_all(
	State(state): State<AppState>,
	cookies: Cookies,
) -> Result<Response, AppError> {
	let books = sql::list_books(&state.db).await?;
	Ok(views::index(&books, flash::take(&cookies)).into_response())
}

// GET /cadastrarLivros
pub async fn display_register_book() -> Response {
	views::register_book(&BookFields::default(), &FieldErrors::new()).into_response()
}

// POST /cadastrarLivros
pub async fn perform_register_book(
	State(state): State<AppState>,
	cookies: Cookies,
	multipart: Multipart,
) -> Result<Response, AppError> {
	let form = BookForm::from_multipart(multipart).await?;
	let book = match form.validate() {
		Ok(book) => book,
		Err(errors) => return Ok(views::register_book(&form.fields, &errors).into_response()),
	};

	let id = sql::insert_book(&state.db, &book).await?;
	tracing::info!(id, title = %book.text.title, pdf_bytes = book.pdf.as_ref().map_or(0, Vec::len), "book registered");
	Ok(to_index(&cookies, Flash::BookCreated))
}

// GET /atualizar_livro/:id
pub async fn display_update_book(
	State(state): State<AppState>,
	Path(id): Path<Bid>,
) -> Result<Response, AppError> {
	let book = sql::find_book(&state.db, id).await?.ok_or_else(|| book_not_found(id))?;
	Ok(views::update_book(id, &BookFields::from(&book), &FieldErrors::new()).into_response())
}

// POST /atualizar_livro/:id
pub async fn perform_update_book(
	State(state): State<AppState>,
	Path(id): Path<Bid>,
	cookies: Cookies,
	Form(fields): Form<BookFields>,
) -> Result<Response, AppError> {
	if sql::find_book(&state.db, id).await?.is_none() {
		return Err(book_not_found(id));
	}

	let text = match fields.validate() {
		Ok(text) => text,
		Err(errors) => return Ok(views::update_book(id, &fields, &errors).into_response()),
	};

	sql::update_book(&state.db, id, &text).await?;
	tracing::info!(id, "book updated");
	Ok(to_index(&cookies, Flash::BookUpdated))
}

// POST /deletar_livro/:id
pub async fn perform_delete_book(
	State(state): State<AppState>,
	Path(id): Path<Bid>,
	cookies: Cookies,
) -> Result<Response, AppError> {
	let removed = sql::delete_book(&state.db, id).await?;
	tracing::info!(id, removed, "book delete requested");
	Ok(to_index(&cookies, Flash::BookDeleted))
}

// GET /ver_pdf/:id
pub async fn display_pdf(
	State(state): State<AppState>,
	Path(id): Path<Bid>,
	cookies: Cookies,
) -> Result<Response, AppError> {
	match sql::find_pdf(&state.db, id).await? {
		Some(pdf) => Ok((
			[
				(header::CONTENT_TYPE, "application/pdf"),
				(header::CONTENT_DISPOSITION, "inline; filename=\"livro.pdf\""),
			],
			pdf,
		)
			.into_response()),
		None => Ok(to_index(&cookies, Flash::NoPdf)),
	}
}

// GET /pesquisar_livros?query=
pub async fn perform_search(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
	let books = sql::search_books(&state.db, &params.query).await?;
	Ok(views::search_results(&books, &params.query).into_response())
}

// GET /cadastrar
pub async fn display_register_user() -> Response {
	views::register_user().into_response()
}

// POST /cadastrar
pub async fn perform_register_user(
	State(state): State<AppState>,
	Form(register): Form<FormRegister>,
) -> Result<Response, AppError> {
	let user = NewUser::from(register);
	let uid = sql::insert_user(&state.db, &user).await?;
	tracing::debug!(uid, username = %user.username, email = %user.email, "new user registered");
	Ok(Redirect::to("/login").into_response())
}

// GET /login
pub async fn display_login() -> Response {
	views::login().into_response()
}

// POST /login
pub async fn perform_login(Form(login): Form<FormLogin>) -> Response {
	if login.username == LOGIN_USERNAME && login.password == LOGIN_PASSWORD {
		return Redirect::to(&format!("/perfil/{}", login.username)).into_response();
	}
	views::login().into_response()
}

// GET /perfil/:username
pub async fn display_profile(Path(username): Path<String>) -> Response {
	views::profile(&Profile::for_username(username)).into_response()
}
