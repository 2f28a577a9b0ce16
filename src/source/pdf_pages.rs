use super::PageTextSource;
use crate::{
    common::dbg_id::DbgId,
    error::{Error, StrErr},
};
use lopdf::Document;
use std::path::Path;
///
/// PDF document read by `lopdf`.
pub struct PdfPages {
    dbgid: DbgId,
    document: Document,
    page_numbers: Vec<u32>,
}
//
//
impl PdfPages {
    ///
    /// Loads the document at `path`.
    pub fn open(parent: &DbgId, path: &Path) -> Result<Self, Error> {
        let dbgid = DbgId::with_parent(parent, "PdfPages");
        let mut document = Document::load(path).map_err(|err| {
            Error::SourceUnavailable(StrErr::from(format!(
                "{}.open | Unable to open PDF file='{}': {}",
                dbgid,
                path.display(),
                err
            )))
        })?;
        document.decompress();
        let mut page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
        page_numbers.sort_unstable();
        log::debug!(
            "{}.open | file='{}' pages={}",
            dbgid,
            path.display(),
            page_numbers.len()
        );
        Ok(Self {
            dbgid,
            document,
            page_numbers,
        })
    }
}
//
//
impl PageTextSource for PdfPages {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }
    //
    //
    fn page(&self, index: usize) -> Option<Vec<char>> {
        let page_number = *self.page_numbers.get(index)?;
        match self.document.extract_text(&[page_number]) {
            Ok(text) => Some(text.chars().collect()),
            Err(err) => {
                log::warn!(
                    "{}.page | Skipped page={}: {}",
                    self.dbgid,
                    page_number,
                    err
                );
                None
            }
        }
    }
}
