//! One-shot messages carried to the next rendered page in a cookie.

use tower_cookies::{Cookie, Cookies};

pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
	BookCreated,
	BookUpdated,
	BookDeleted,
	NoPdf,
}

impl Flash {
	const ALL: [Flash; 4] = [Flash::BookCreated, Flash::BookUpdated, Flash::BookDeleted, Flash::NoPdf];

	/// Cookie-safe identifier.
	pub fn code(self) -> &'static str {
		match self {
			Flash::BookCreated => "book_created",
			Flash::BookUpdated => "book_updated",
			Flash::BookDeleted => "book_deleted",
			Flash::NoPdf => "no_pdf",
		}
	}

	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|flash| flash.code() == code)
	}

	pub fn message(self) -> &'static str {
		match self {
			Flash::BookCreated => "Livro cadastrado com sucesso!",
			Flash::BookUpdated => "Livro atualizado com sucesso!",
			Flash::BookDeleted => "Livro excluído com sucesso!",
			Flash::NoPdf => "Nenhum arquivo PDF disponível para este livro.",
		}
	}
}

pub fn set(cookies: &Cookies, flash: Flash) {
	cookies.add(Cookie::build((FLASH_COOKIE, flash.code())).path("/").build());
}

/// Returns the pending message, if any, and clears it.
pub fn take(cookies: &Cookies) -> Option<Flash> {
	let cookie = cookies.get(FLASH_COOKIE)?;
	cookies.remove(Cookie::build(FLASH_COOKIE).path("/").build());
	Flash::from_code(cookie.value())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn codes_round_trip() {
		for flash in Flash::ALL {
			assert_eq!(Flash::from_code(flash.code()), Some(flash));
		}
		assert_eq!(Flash::from_code("bogus"), None);
	}
}
