use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::types::{Bid, Book, BookText, NewBook, NewUser, Uid};

/// One statement per table; `livrosfavoritos` has no reader or writer.
pub const TABLE_SCHEMA: [&str; 3] = [
	r#"
CREATE TABLE IF NOT EXISTS "user" (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	username TEXT,
	email TEXT,
	password TEXT
);"#,
	r#"
CREATE TABLE IF NOT EXISTS livro (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	titulo TEXT,
	autor TEXT,
	ano_publicacao TEXT,
	descricao TEXT,
	arquivo_pdf BLOB
);"#,
	r#"
CREATE TABLE IF NOT EXISTS livrosfavoritos (
	id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
	user_id INTEGER,
	livro_id INTEGER
);"#,
];

const BOOK_COLUMNS: &str = r#"
	id,
	COALESCE(titulo, '') AS title,
	COALESCE(autor, '') AS author,
	COALESCE(ano_publicacao, '') AS year,
	COALESCE(descricao, '') AS description,
	COALESCE(length(arquivo_pdf), 0) AS pdf_size
"#;

/// Opens the process-wide store handle: a pool pinned to a single
/// connection that is never idled out or recycled.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
	let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

	SqlitePoolOptions::new()
		.max_connections(1)
		.min_connections(1)
		.idle_timeout(None)
		.max_lifetime(None)
		.connect_with(options)
		.await
}

pub async fn create_schema(db: &SqlitePool) -> Result<(), sqlx::Error> {
	for statement in TABLE_SCHEMA {
		sqlx::query(statement).execute(db).await?;
	}
	Ok(())
}

pub async fn insert_book(db: &SqlitePool, book: &NewBook) -> Result<Bid, sqlx::Error> {
	let result = sqlx::query(
		r#"
INSERT INTO livro
	(titulo, autor, ano_publicacao, descricao, arquivo_pdf)
VALUES
	(?, ?, ?, ?, ?)
		"#,
	)
	.bind(&book.text.title)
	.bind(&book.text.author)
	.bind(&book.text.year)
	.bind(&book.text.description)
	.bind(book.pdf.as_deref())
	.execute(db)
	.await?;

	Ok(result.last_insert_rowid())
}

pub async fn list_books(db: &SqlitePool) -> Result<Vec<Book>, sqlx::Error> {
	sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM livro"))
		.fetch_all(db)
		.await
}

pub async fn find_book(db: &SqlitePool, id: Bid) -> Result<Option<Book>, sqlx::Error> {
	sqlx::query_as::<_, Book>(&format!("SELECT {BOOK_COLUMNS} FROM livro WHERE id = ?"))
		.bind(id)
		.fetch_optional(db)
		.await
}

/// Rewrites the four text columns; `arquivo_pdf` is left as it was.
/// Returns the number of rows touched.
pub async fn update_book(db: &SqlitePool, id: Bid, text: &BookText) -> Result<u64, sqlx::Error> {
	let result = sqlx::query(
		r#"
UPDATE livro SET
	titulo = ?,
	autor = ?,
	ano_publicacao = ?,
	descricao = ?
WHERE
	id = ?
		"#,
	)
	.bind(&text.title)
	.bind(&text.author)
	.bind(&text.year)
	.bind(&text.description)
	.bind(id)
	.execute(db)
	.await?;

	Ok(result.rows_affected())
}

/// Deleting an id that does not exist is a no-op.
pub async fn delete_book(db: &SqlitePool, id: Bid) -> Result<u64, sqlx::Error> {
	let result = sqlx::query("DELETE FROM livro WHERE id = ?")
		.bind(id)
		.execute(db)
		.await?;
	Ok(result.rows_affected())
}

/// `None` when the book is missing or has no (or an empty) PDF.
pub async fn find_pdf(db: &SqlitePool, id: Bid) -> Result<Option<Vec<u8>>, sqlx::Error> {
	let pdf: Option<Option<Vec<u8>>> =
		sqlx::query_scalar("SELECT arquivo_pdf FROM livro WHERE id = ?")
			.bind(id)
			.fetch_optional(db)
			.await?;

	Ok(pdf.flatten().filter(|bytes| !bytes.is_empty()))
}

/// Case-insensitive substring match over title, author and description.
/// An empty query matches every book. SQLite's `lower()` only folds ASCII,
/// so accented capitals must be typed as stored.
pub async fn search_books(db: &SqlitePool, query: &str) -> Result<Vec<Book>, sqlx::Error> {
	let pattern = like_pattern(query);
	sqlx::query_as::<_, Book>(&format!(
		r#"
SELECT {BOOK_COLUMNS} FROM livro
WHERE
	lower(titulo) LIKE lower(?) ESCAPE '\'
	OR lower(autor) LIKE lower(?) ESCAPE '\'
	OR lower(descricao) LIKE lower(?) ESCAPE '\'
		"#
	))
	.bind(&pattern)
	.bind(&pattern)
	.bind(&pattern)
	.fetch_all(db)
	.await
}

pub async fn insert_user(db: &SqlitePool, user: &NewUser) -> Result<Uid, sqlx::Error> {
	let result = sqlx::query(r#"INSERT INTO "user" (username, email, password) VALUES (?, ?, ?)"#)
		.bind(&user.username)
		.bind(&user.email)
		.bind(&user.password)
		.execute(db)
		.await?;
	Ok(result.last_insert_rowid())
}

/// `%query%` with LIKE wildcards in the query taken literally.
fn like_pattern(query: &str) -> String {
	let mut pattern = String::with_capacity(query.len() + 2);
	pattern.push('%');
	for chr in query.chars() {
		if matches!(chr, '%' | '_' | '\\') {
			pattern.push('\\');
		}
		pattern.push(chr);
	}
	pattern.push('%');
	pattern
}
