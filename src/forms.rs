use std::collections::BTreeMap;

use axum::extract::Multipart;
use serde::Deserialize;

use crate::error::AppError;
use crate::types::{Book, BookText, NewBook};

pub const REQUIRED_MSG: &str = "Este campo é obrigatório.";
pub const PDF_ONLY_MSG: &str = "Apenas arquivos PDF permitidos!";
const ALLOWED_EXTENSIONS: [&str; 1] = ["pdf"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
	Title,
	Author,
	Year,
	Description,
	Pdf,
}

impl Field {
	/// Form input name.
	pub fn name(self) -> &'static str {
		match self {
			Field::Title => "titulo",
			Field::Author => "autor",
			Field::Year => "ano_publicacao",
			Field::Description => "descricao",
			Field::Pdf => "arquivo_pdf",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Field::Title => "Título",
			Field::Author => "Autor",
			Field::Year => "Ano de Publicação",
			Field::Description => "Descrição",
			Field::Pdf => "Arquivo PDF",
		}
	}
}

pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw text fields of the book form, as submitted. Also used to refill the
/// form when validation fails.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFields {
	#[serde(default)]
	pub titulo: String,
	#[serde(default)]
	pub autor: String,
	#[serde(default)]
	pub ano_publicacao: String,
	#[serde(default)]
	pub descricao: String,
}

impl BookFields {
	pub fn value(&self, field: Field) -> &str {
		match field {
			Field::Title => &self.titulo,
			Field::Author => &self.autor,
			Field::Year => &self.ano_publicacao,
			Field::Description => &self.descricao,
			Field::Pdf => "",
		}
	}

	pub fn validate(&self) -> Result<BookText, FieldErrors> {
		let mut errors = FieldErrors::new();
		for field in [Field::Title, Field::Author, Field::Year, Field::Description] {
			if self.value(field).trim().is_empty() {
				errors.insert(field, REQUIRED_MSG);
			}
		}
		if !errors.is_empty() {
			return Err(errors);
		}

		Ok(BookText {
			title: self.titulo.clone(),
			author: self.autor.clone(),
			year: self.ano_publicacao.clone(),
			description: self.descricao.clone(),
		})
	}
}

impl From<&Book> for BookFields {
	fn from(book: &Book) -> Self {
		BookFields {
			titulo: book.title.clone(),
			autor: book.author.clone(),
			ano_publicacao: book.year.clone(),
			descricao: book.description.clone(),
		}
	}
}

#[derive(Debug, Clone)]
pub struct Upload {
	pub file_name: String,
	pub bytes: Vec<u8>,
}

/// The registration form: text fields plus an optional PDF upload.
#[derive(Debug, Clone, Default)]
pub struct BookForm {
	pub fields: BookFields,
	pub pdf: Option<Upload>,
}

impl BookForm {
	/// Reads every part of a `multipart/form-data` body into memory.
	/// Unknown parts (the submit button) are skipped. A file input left
	/// empty arrives as a part with no file name and is treated as no file.
	pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
		let mut form = BookForm::default();

		while let Some(part) = multipart.next_field().await? {
			let name = part.name().unwrap_or_default().to_string();
			if name == Field::Pdf.name() {
				let file_name = part.file_name().unwrap_or_default().to_string();
				let bytes = part.bytes().await?;
				if !file_name.is_empty() || !bytes.is_empty() {
					form.pdf = Some(Upload { file_name, bytes: bytes.to_vec() });
				}
				continue;
			}

			let value = part.text().await?;
			match name.as_str() {
				"titulo" => form.fields.titulo = value,
				"autor" => form.fields.autor = value,
				"ano_publicacao" => form.fields.ano_publicacao = value,
				"descricao" => form.fields.descricao = value,
				_ => {}
			}
		}

		Ok(form)
	}

	pub fn validate(&self) -> Result<NewBook, FieldErrors> {
		let text = self.fields.validate();
		let pdf_error = self.pdf.as_ref().is_some_and(|upload| !is_allowed_file(&upload.file_name));

		match (text, pdf_error) {
			(Ok(text), false) => Ok(NewBook {
				text,
				pdf: self.pdf.as_ref().map(|upload| upload.bytes.clone()),
			}),
			(text, pdf_error) => {
				let mut errors = text.err().unwrap_or_default();
				if pdf_error {
					errors.insert(Field::Pdf, PDF_ONLY_MSG);
				}
				Err(errors)
			}
		}
	}
}

fn is_allowed_file(file_name: &str) -> bool {
	file_name
		.rsplit_once('.')
		.is_some_and(|(_, ext)| {
			ALLOWED_EXTENSIONS
				.iter()
				.any(|allowed| ext.eq_ignore_ascii_case(allowed))
		})
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> BookFields {
		BookFields {
			titulo: "O Cortiço".into(),
			autor: "Aluísio Azevedo".into(),
			ano_publicacao: "1890".into(),
			descricao: "naturalismo".into(),
		}
	}

	#[test]
	fn every_text_field_is_required() {
		let errors = BookFields::default().validate().unwrap_err();
		assert_eq!(errors.len(), 4);
		assert!(errors.values().all(|msg| *msg == REQUIRED_MSG));
		assert!(!errors.contains_key(&Field::Pdf));
	}

	#[test]
	fn whitespace_is_not_a_value() {
		let mut fields = filled();
		fields.autor = "   ".into();
		let errors = fields.validate().unwrap_err();
		assert_eq!(errors.keys().copied().collect::<Vec<_>>(), vec![Field::Author]);
	}

	#[test]
	fn year_is_free_text() {
		let mut fields = filled();
		fields.ano_publicacao = "fim do século XIX".into();
		assert_eq!(fields.validate().unwrap().year, "fim do século XIX");
	}

	#[test]
	fn pdf_is_optional() {
		let form = BookForm { fields: filled(), pdf: None };
		let book = form.validate().unwrap();
		assert!(book.pdf.is_none());
		assert_eq!(book.text.title, "O Cortiço");
	}

	#[test]
	fn only_pdf_uploads_pass() {
		let mut form = BookForm { fields: filled(), pdf: None };

		form.pdf = Some(Upload { file_name: "livro.PDF".into(), bytes: b"%PDF".to_vec() });
		assert_eq!(form.validate().unwrap().pdf.unwrap(), b"%PDF");

		for bad in ["livro.txt", "pdf", "livro.pdf.exe", ""] {
			form.pdf = Some(Upload { file_name: bad.into(), bytes: b"x".to_vec() });
			let errors = form.validate().unwrap_err();
			assert_eq!(errors.get(&Field::Pdf), Some(&PDF_ONLY_MSG), "{bad}");
		}
	}

	#[test]
	fn file_and_text_errors_are_reported_together() {
		let form = BookForm {
			fields: BookFields { titulo: "só título".into(), ..Default::default() },
			pdf: Some(Upload { file_name: "capa.png".into(), bytes: vec![1, 2, 3] }),
		};
		let errors = form.validate().unwrap_err();
		assert_eq!(errors.len(), 4);
		assert!(errors.contains_key(&Field::Pdf));
		assert!(!errors.contains_key(&Field::Title));
	}
}
