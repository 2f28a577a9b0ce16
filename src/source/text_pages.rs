#[cfg(test)]
#[path = "../tests/source/text_pages_test.rs"]
mod tests;
//
use super::PageTextSource;
use crate::{
    common::dbg_id::DbgId,
    error::{Error, StrErr},
};
use std::{fs, path::Path};
///
/// Page separator of plain text renditions of paged documents.
const FORM_FEED: char = '\u{000C}';
///
/// Paged document stored as plain text, pages are separated by form feed.
///
/// This is the layout of common PDF-to-text converters output.
pub struct TextPages {
    pages: Vec<String>,
}
//
//
impl TextPages {
    ///
    /// Reads the whole document at `path`.
    pub fn open(parent: &DbgId, path: &Path) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "TextPages");
        let text = fs::read_to_string(path).map_err(|err| {
            Error::SourceUnavailable(StrErr::from(format!(
                "{}.open | Unable to open file='{}': {}",
                dbgid,
                path.display(),
                err
            )))
        })?;
        let pages = Self::from(text.as_str());
        log::debug!(
            "{}.open | file='{}' pages={}",
            dbgid,
            path.display(),
            pages.page_count()
        );
        Ok(pages)
    }
}
//
//
impl From<&str> for TextPages {
    fn from(text: &str) -> Self {
        let mut pages: Vec<String> = text.split(FORM_FEED).map(str::to_owned).collect();
        // converters terminate the last page with a form feed as well
        if pages.len() > 1 && pages.last().is_some_and(|page| page.trim().is_empty()) {
            pages.pop();
        }
        Self { pages }
    }
}
//
//
impl PageTextSource for TextPages {
    fn page_count(&self) -> usize {
        self.pages.len()
    }
    //
    //
    fn page(&self, index: usize) -> Option<Vec<char>> {
        self.pages.page(index)
    }
}
