use axum::http::StatusCode;
use maud::{html, Markup, DOCTYPE};

use crate::flash::Flash;
use crate::forms::{BookFields, Field, FieldErrors};
use crate::types::{Bid, Book, Profile};

fn layout(title: &str, flash: Option<Flash>, content: Markup) -> Markup {
	html! {
		(DOCTYPE)
		html lang="pt-BR" {
			head {
				meta charset="utf-8";
				title { (title) " - Bliotech" }
			}
			body {
				nav {
					a href="/" { "Livros" } " | "
					a href="/cadastrarLivros" { "Cadastrar livro" } " | "
					a href="/cadastrar" { "Criar conta" } " | "
					a href="/login" { "Entrar" }
					form method="GET" action="/pesquisar_livros" {
						input name="query" type="search" placeholder="Pesquisar livros";
						button { "Pesquisar" }
					}
				}
				@if let Some(flash) = flash {
					p class="flash" { (flash.message()) }
				}
				main { (content) }
			}
		}
	}
}

fn book_table(books: &[Book]) -> Markup {
	html! {
		table {
			thead { tr {
				th { "Título" }
				th { "Autor" }
				th { "Ano" }
				th { "Descrição" }
				th { }
			} }
			tbody {
				@for book in books {
					tr {
						td { (book.title) }
						td { (book.author) }
						td { (book.year) }
						td { (book.description) }
						td {
							a href={ "/atualizar_livro/" (book.id) } { "Editar" }
							@if book.has_pdf() {
								" " a href={ "/ver_pdf/" (book.id) } target="_blank" { "Ver PDF" }
							}
							form method="POST" action={ "/deletar_livro/" (book.id) } {
								button { "Excluir" }
							}
						}
					}
				}
			}
		}
	}
}

pub fn index(books: &[Book], flash: Option<Flash>) -> Markup {
	layout("Livros", flash, html! {
		h1 { "Livros" }
		@if books.is_empty() {
			p { "Nenhum livro cadastrado." }
		} @else {
			(book_table(books))
		}
	})
}

fn text_input(fields: &BookFields, errors: &FieldErrors, field: Field) -> Markup {
	html! {
		p {
			label for=(field.name()) { (field.label()) }
			@if field == Field::Description {
				textarea id=(field.name()) name=(field.name()) { (fields.value(field)) }
			} @else {
				input id=(field.name()) name=(field.name()) type="text" value=(fields.value(field));
			}
			@if let Some(msg) = errors.get(&field) {
				span class="error" { (msg) }
			}
		}
	}
}

pub fn register_book(fields: &BookFields, errors: &FieldErrors) -> Markup {
	layout("Cadastrar livro", None, html! {
		h1 { "Cadastrar livro" }
		form method="POST" action="/cadastrarLivros" enctype="multipart/form-data" {
			@for field in [Field::Title, Field::Author, Field::Year, Field::Description] {
				(text_input(fields, errors, field))
			}
			p {
				label for=(Field::Pdf.name()) { (Field::Pdf.label()) }
				input id=(Field::Pdf.name()) name=(Field::Pdf.name()) type="file" accept=".pdf,application/pdf";
				@if let Some(msg) = errors.get(&Field::Pdf) {
					span class="error" { (msg) }
				}
			}
			button name="submit" { "Cadastrar Livro" }
		}
	})
}

pub fn update_book(id: Bid, fields: &BookFields, errors: &FieldErrors) -> Markup {
	layout("Atualizar livro", None, html! {
		h1 { "Atualizar livro" }
		form method="POST" action={ "/atualizar_livro/" (id) } {
			@for field in [Field::Title, Field::Author, Field::Year, Field::Description] {
				(text_input(fields, errors, field))
			}
			button name="submit" { "Atualizar Livro" }
		}
	})
}

pub fn search_results(books: &[Book], query: &str) -> Markup {
	layout("Pesquisa", None, html! {
		h1 { "Resultados para \"" (query) "\"" }
		form method="GET" action="/pesquisar_livros" {
			input name="query" type="search" value=(query);
			button { "Pesquisar" }
		}
		@if books.is_empty() {
			p { "Nenhum livro encontrado." }
		} @else {
			(book_table(books))
		}
	})
}

pub fn register_user() -> Markup {
	layout("Criar conta", None, html! {
		h1 { "Criar conta" }
		form method="POST" action="/cadastrar" {
			input name="username" type="text" placeholder="usuário";
			input name="email" type="email" placeholder="email";
			input name="password" type="password" placeholder="senha";
			button { "Cadastrar" }
		}
	})
}

pub fn login() -> Markup {
	layout("Entrar", None, html! {
		h1 { "Entrar" }
		form method="POST" action="/login" {
			input name="username" type="text" placeholder="usuário";
			input name="password" type="password" placeholder="senha";
			button { "Entrar" }
		}
	})
}

pub fn profile(profile: &Profile) -> Markup {
	layout("Perfil", None, html! {
		h1 { "Perfil" }
		dl {
			dt { "Usuário" } dd { (profile.username) }
			dt { "Email" } dd { (profile.email) }
		}
	})
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
	layout("Erro", None, html! {
		h1 { (status.as_u16()) " " (status.canonical_reason().unwrap_or_default()) }
		p { (message) }
	})
}
