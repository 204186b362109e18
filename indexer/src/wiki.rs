//! Minimal reader for wiki page dumps.
//!
//! Intentionally scoped to the corpus shape
//! `<xml><page><id>..</id><title>..</title><text>..</text></page>..</xml>`;
//! not a general-purpose XML data binding. Anything outside `<page>`
//! elements is ignored.

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use wikirank_core::{Page, PageId};

enum Field {
    Id,
    Title,
    Text,
}

#[derive(Default)]
struct PartialPage {
    id: Option<String>,
    title: Option<String>,
    text: Option<String>,
}

/// Parse every `<page>` record out of a corpus document.
///
/// `<id>` must parse as an integer after trimming; `<title>` is required
/// (empty is fine, absent is not); a missing `<text>` is treated as empty.
pub fn read_pages(content: &str) -> Result<Vec<Page>> {
    let mut reader = Reader::from_str(content);
    let mut pages = Vec::new();
    let mut in_page = false;
    let mut current = PartialPage::default();
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event().context("malformed corpus XML")? {
            Event::Start(e) => match e.name().as_ref() {
                b"page" => {
                    in_page = true;
                    current = PartialPage::default();
                    field = None;
                }
                b"id" if in_page => {
                    current.id = Some(String::new());
                    field = Some(Field::Id);
                }
                b"title" if in_page => {
                    current.title = Some(String::new());
                    field = Some(Field::Title);
                }
                b"text" if in_page => {
                    current.text = Some(String::new());
                    field = Some(Field::Text);
                }
                _ => {}
            },
            Event::Empty(e) if in_page => match e.name().as_ref() {
                b"id" => current.id = Some(String::new()),
                b"title" => current.title = Some(String::new()),
                b"text" => current.text = Some(String::new()),
                _ => {}
            },
            Event::Text(e) => {
                if let Some(field) = &field {
                    let text = e.unescape().context("bad character entity in corpus XML")?;
                    let slot = match field {
                        Field::Id => &mut current.id,
                        Field::Title => &mut current.title,
                        Field::Text => &mut current.text,
                    };
                    slot.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"page" => {
                    pages.push(finish_page(std::mem::take(&mut current))?);
                    in_page = false;
                }
                b"id" | b"title" | b"text" => field = None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(pages)
}

fn finish_page(partial: PartialPage) -> Result<Page> {
    let raw_id = partial.id.context("page missing <id>")?;
    let id: PageId = raw_id
        .trim()
        .parse()
        .with_context(|| format!("page id {:?} is not an integer", raw_id.trim()))?;
    let title = partial
        .title
        .with_context(|| format!("page {id} missing <title>"))?;
    Ok(Page {
        id,
        title: title.trim().to_string(),
        text: partial.text.unwrap_or_default(),
    })
}
