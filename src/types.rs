use serde::Deserialize;

pub type Bid = i64;
pub type Uid = i64;

/// A catalog row as shown in listings. The PDF blob itself is only loaded by
/// `sql::find_pdf`; here we only carry its length.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Book {
	pub id: Bid,
	pub title: String,
	pub author: String,
	pub year: String,
	pub description: String,
	pub pdf_size: i64,
}

impl Book {
	pub fn has_pdf(&self) -> bool {
		self.pdf_size > 0
	}
}

/// Validated text fields of a book, shared by creation and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookText {
	pub title: String,
	pub author: String,
	pub year: String,
	pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewBook {
	pub text: BookText,
	pub pdf: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
	pub username: String,
	pub email: String,
	pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct FormRegister {
	pub username: String,
	pub email: String,
	pub password: String,
}

impl From<FormRegister> for NewUser {
	fn from(form: FormRegister) -> Self {
		NewUser {
			username: form.username,
			email: form.email,
			password: form.password,
		}
	}
}

#[derive(Deserialize, Debug)]
pub struct FormLogin {
	pub username: String,
	pub password: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchParams {
	#[serde(default)]
	pub query: String,
}

/// What the profile page shows. Not backed by the `user` table.
#[derive(Debug, Clone)]
pub struct Profile {
	pub username: String,
	pub email: String,
}

pub const PLACEHOLDER_EMAIL: &str = "usuario@example.com";

impl Profile {
	pub fn for_username(username: String) -> Self {
		Profile {
			username,
			email: PLACEHOLDER_EMAIL.to_string(),
		}
	}
}
