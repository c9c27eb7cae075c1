//! PDF fixtures for tests.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::error::DocQaResult;

/// Write a PDF with one entry per page; each string on a page becomes its own
/// text object on its own line.
pub fn write_text_pdf<S: AsRef<str>>(path: &Path, pages: &[Vec<S>]) -> DocQaResult<()> {
    let pages = pages
        .iter()
        .map(|lines| {
            let mut operations = Vec::new();
            for (i, line) in lines.iter().enumerate() {
                let y = 800 - 14 * i as i64;
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
                operations.push(Operation::new("Td", vec![40.into(), y.into()]));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(line.as_ref())],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            operations
        })
        .collect();
    write_pdf(path, pages)
}

/// Write a one-page PDF whose lines all sit in a single text object, moving
/// down with `T*` the way typeset paragraphs do.
pub fn write_paragraph_pdf(path: &Path, lines: &[&str]) -> DocQaResult<()> {
    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 10.into()]),
        Operation::new("TL", vec![14.into()]),
        Operation::new("Td", vec![40.into(), 800.into()]),
    ];
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
    }
    operations.push(Operation::new("ET", vec![]));
    write_pdf(path, vec![operations])
}

fn write_pdf(path: &Path, pages: Vec<Vec<Operation>>) -> DocQaResult<()> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        kids.push(page_id.into());
    }

    let page_total = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_total,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    doc.save(path)?;
    Ok(())
}

/// Space-separated `count` distinct words, `per_line` to a text object and
/// `lines_per_page` objects to a page.
pub fn numbered_word_pages(count: usize, per_line: usize, lines_per_page: usize) -> Vec<Vec<String>> {
    let words: Vec<String> = (0..count).map(|i| format!("w{:05}", i)).collect();
    let lines: Vec<String> = words.chunks(per_line).map(|c| c.join(" ")).collect();
    lines
        .chunks(lines_per_page)
        .map(|page| page.to_vec())
        .collect()
}
