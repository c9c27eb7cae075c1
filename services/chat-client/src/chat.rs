//! Chat REPL
//!
//! Commands operate on an explicit `ChatSession`; output goes to any writer so
//! the loop can be driven from tests.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use docqa_models::ChatSession;
use docqa_utils::pdf;
use tracing::error;

use crate::answer_client::AnswerClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    /// One-based page number as shown to the user
    SelectPage(usize),
    Show,
    History,
    Help,
    Quit,
    Empty,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    if !line.starts_with(':') {
        return Command::Ask(line.to_string());
    }

    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let argument = parts.next();

    match (name, argument) {
        (":page", Some(page)) => match page.parse() {
            Ok(page) => Command::SelectPage(page),
            Err(_) => Command::Invalid(format!("not a page number: {}", page)),
        },
        (":page", None) => Command::Invalid("usage: :page N".to_string()),
        (":show", _) => Command::Show,
        (":history", _) => Command::History,
        (":help", _) => Command::Help,
        (":quit", _) | (":q", _) => Command::Quit,
        (other, _) => Command::Invalid(format!("unknown command: {}", other)),
    }
}

pub const HELP: &str = "\
Type a question to ask about the selected page.
  :page N    select page N
  :show      print the selected page's text
  :history   print the conversation so far
  :help      show this message
  :quit, :q  leave";

pub struct ChatApp {
    session: ChatSession,
    client: AnswerClient,
    pdf_path: PathBuf,
    source_url: String,
}

impl ChatApp {
    pub fn new(session: ChatSession, client: AnswerClient, pdf_path: PathBuf, source_url: String) -> Self {
        Self {
            session,
            client,
            pdf_path,
            source_url,
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn prompt(&self) -> String {
        format!(
            "[page {}/{}] > ",
            self.session.selected_page_number() + 1,
            self.session.total_pages()
        )
    }

    /// Run one command. Returns `false` once the session should end.
    pub async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Ask(question) => self.ask(question, out).await?,
            Command::SelectPage(page) => match self.session.select_display_page(page) {
                Ok(()) => writeln!(out, "Selected page {}", page)?,
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Show => self.show_page(out)?,
            Command::History => {
                for message in self.session.messages() {
                    writeln!(out, "{}: {}", message.role, message.content)?;
                }
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
            Command::Invalid(reason) => writeln!(out, "{}", reason)?,
        }
        Ok(true)
    }

    async fn ask<W: Write>(&mut self, question: String, out: &mut W) -> Result<()> {
        let page_number = self.session.selected_page_number();
        self.session.push_user(question.as_str());

        match self.client.ask(page_number, &question).await {
            Ok(answer) => {
                writeln!(out, "assistant: {}", answer)?;
                self.session.push_assistant(answer);
            }
            Err(e) => {
                error!(error = %e, "question failed");
                writeln!(out, "request failed: {}", e)?;
            }
        }
        Ok(())
    }

    fn show_page<W: Write>(&self, out: &mut W) -> Result<()> {
        let page_number = self.session.selected_page_number();
        match pdf::extract_text_from_page(&self.pdf_path, page_number as i64) {
            Ok(text) => {
                writeln!(out, "{}", text)?;
                writeln!(out, "-- Page {} --", page_number + 1)?;
                writeln!(out, "Source: {}", self.source_url)?;
            }
            Err(e) => {
                error!(error = %e, page = page_number + 1, "page text failed");
                writeln!(out, "could not read page {}: {}", page_number + 1, e)?;
            }
        }
        Ok(())
    }
}
