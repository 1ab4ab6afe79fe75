use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{document::OpenApiDocument, operation_registry::index_by_tag},
  ui::{Colors, colors::IntoComfyColor, term_width},
  utils::{SpecLoader, SpecSource},
};

/// Prints every generated method, grouped by tag in emission order.
pub async fn list_operations(spec: &str, colors: &Colors) -> anyhow::Result<()> {
  let loader = SpecLoader::new()?;
  let value = loader.load(&SpecSource::parse(spec.trim())).await?;
  let document = OpenApiDocument::from_value(&value)?;
  let groups = index_by_tag(&document);

  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut header = Row::new();
  for title in ["TAG", "FUNCTION", "METHOD", "PATH"] {
    header.add_cell(Cell::new(title).fg(colors.label().into_comfy()));
  }
  table.set_header(header);

  for (tag, operations) in &groups {
    for entry in operations {
      let mut row = Row::new();
      row.add_cell(Cell::new(tag).fg(colors.info().into_comfy()));
      row.add_cell(
        Cell::new(&entry.fn_name)
          .fg(colors.value().into_comfy())
          .add_attribute(Attribute::Bold),
      );
      row.add_cell(
        Cell::new(entry.method.upper())
          .fg(colors.accent().into_comfy())
          .set_alignment(CellAlignment::Right),
      );
      row.add_cell(Cell::new(&entry.path).fg(colors.primary().into_comfy()));
      table.add_row(row);
    }
  }

  println!("{table}");

  Ok(())
}
