// Shared helpers for driving the router in-process.
#![allow(dead_code)]

use axum::{
	body::{to_bytes, Body},
	http::{header, Request, Response, StatusCode},
	Router,
};
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const BOUNDARY: &str = "bliotech-test-boundary";

pub async fn test_app() -> (Router, SqlitePool) {
	let db = bliotech::sql::connect("sqlite::memory:").await.unwrap();
	bliotech::sql::create_schema(&db).await.unwrap();
	(bliotech::router(db.clone()), db)
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
	app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
	Request::get(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
	Request::get(uri)
		.header(header::COOKIE, cookie)
		.body(Body::empty())
		.unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
	Request::post(uri)
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(body.to_string()))
		.unwrap()
}

/// A book form as a browser would submit it. `pdf` is `(file name, bytes)`;
/// `None` mimics an untouched file input.
pub fn post_book(fields: &[(&str, &str)], pdf: Option<(&str, &[u8])>) -> Request<Body> {
	let mut body: Vec<u8> = Vec::new();
	for (name, value) in fields {
		body.extend_from_slice(
			format!(
				"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
			)
			.as_bytes(),
		);
	}

	let no_file: &[u8] = &[];
	let (file_name, bytes) = pdf.unwrap_or(("", no_file));
	body.extend_from_slice(
		format!(
			"--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"arquivo_pdf\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
		)
		.as_bytes(),
	);
	body.extend_from_slice(bytes);
	body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

	Request::post("/cadastrarLivros")
		.header(
			header::CONTENT_TYPE,
			format!("multipart/form-data; boundary={BOUNDARY}"),
		)
		.body(Body::from(body))
		.unwrap()
}

pub fn book_fields<'a>(title: &'a str, author: &'a str, description: &'a str) -> Vec<(&'a str, &'a str)> {
	vec![
		("titulo", title),
		("autor", author),
		("ano_publicacao", "1899"),
		("descricao", description),
	]
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
	to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
	String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
	response.headers()[header::LOCATION].to_str().unwrap()
}

/// The `name=value` pair of the flash cookie set by a response, if any.
pub fn flash_cookie(response: &Response<Body>) -> Option<String> {
	response
		.headers()
		.get_all(header::SET_COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.filter(|value| value.starts_with("flash="))
		.map(|value| value.split(';').next().unwrap_or_default().to_string())
		.next()
}

pub fn assert_redirect(response: &Response<Body>, to: &str) {
	assert_eq!(response.status(), StatusCode::SEE_OTHER);
	assert_eq!(location(response), to);
}
