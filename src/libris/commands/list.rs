use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::view::{self, CatalogView, ViewOptions};

pub fn run(catalog: &Catalog, options: &ViewOptions) -> Result<CmdResult> {
    let view = view::render(catalog, options);
    let mut result = CmdResult::default();
    if let CatalogView::Table(blocks) = &view {
        let copies: usize = blocks.iter().map(|b| b.row_span()).sum();
        result.add_message(CmdMessage::info(format!(
            "{} {}, {} {}",
            blocks.len(),
            if blocks.len() == 1 { "book" } else { "books" },
            copies,
            if copies == 1 { "copy" } else { "copies" }
        )));
    }
    Ok(result.with_view(view))
}
