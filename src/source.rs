//!
//! Sources of the reference documents.
//!
//! Paged documents (the trim and stability book, the hydrostatic tables)
//! are consumed through [PageTextSource], so the scanners don't depend on
//! any particular document reading library.
//! Line oriented documents (sounding and cargo hold tables) are consumed as [BufRead].
//
#[cfg(feature = "pdf")]
pub mod pdf_pages;
pub mod text_pages;
//
use crate::{
    common::dbg_id::DbgId,
    error::{Error, StrErr},
};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use text_pages::TextPages;
///
/// Document split into pages of text.
pub trait PageTextSource {
    ///
    /// Number of pages in the document.
    fn page_count(&self) -> usize;
    ///
    /// Returns ordered code points of the page `index`.
    ///
    /// Returns `None` if the page can't be extracted, scanners skip such pages.
    fn page(&self, index: usize) -> Option<Vec<char>>;
}
//
//
impl PageTextSource for Vec<String> {
    fn page_count(&self) -> usize {
        self.len()
    }
    //
    //
    fn page(&self, index: usize) -> Option<Vec<char>> {
        self.get(index).map(|page| page.chars().collect())
    }
}
///
/// Opens paged document at `path`.
///
/// Files with `.pdf` extension are read by [pdf_pages::PdfPages] (requires `pdf` feature),
/// the rest are read as [TextPages].
pub fn open_pages(parent: &DbgId, path: &Path) -> Result<Box<dyn PageTextSource>, Error> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        #[cfg(feature = "pdf")]
        return Ok(Box::new(pdf_pages::PdfPages::open(parent, path)?));
        #[cfg(not(feature = "pdf"))]
        return Err(Error::SourceUnavailable(StrErr::from(format!(
            "{}.open_pages | Unable to read '{}': built without `pdf` feature",
            parent,
            path.display()
        ))));
    }
    Ok(Box::new(TextPages::open(parent, path)?))
}
///
/// Opens line oriented document at `path`.
pub fn open_lines(parent: &DbgId, path: &Path) -> Result<impl BufRead, Error> {
    File::open(path).map(BufReader::new).map_err(|err| {
        Error::SourceUnavailable(StrErr::from(format!(
            "{}.open_lines | Unable to open file='{}': {}",
            parent,
            path.display(),
            err
        )))
    })
}
///
/// Returns lines of `reader`, failing with [Error::SourceUnavailable] on read error.
pub(crate) fn read_lines<'a>(
    dbgid: &'a DbgId,
    reader: impl BufRead + 'a,
) -> impl Iterator<Item = Result<String, Error>> + 'a {
    reader.lines().zip(1..).map(move |(try_line, line_id)| {
        try_line.map_err(|err| {
            Error::SourceUnavailable(StrErr::from(format!(
                "{} | Failed reading line={}: {}",
                dbgid, line_id, err
            )))
        })
    })
}
