//! Plain-text render target.

use std::io::{self, Write};

use storefront_view::{DisplayRecord, ImageRef, RenderModel, TraceBlock};

/// Write the header line, count label and cards (or the empty notice).
pub fn write_view(out: &mut impl Write, header: &str, model: &RenderModel) -> io::Result<()> {
    writeln!(out, "== Catalog ({header}) ==")?;
    writeln!(out, "{}", model.summary().label())?;

    match model {
        RenderModel::Empty { notice, .. } => {
            writeln!(out)?;
            writeln!(out, "{} {}", notice.icon, notice.heading)?;
            writeln!(out, "   {}", notice.hint)?;
        }
        RenderModel::Items { records, .. } => {
            for record in records {
                writeln!(out)?;
                write_card(out, record)?;
            }
        }
    }
    Ok(())
}

fn write_card(out: &mut impl Write, r: &DisplayRecord) -> io::Result<()> {
    writeln!(out, "{} {}  [{}]", r.icon, r.name, r.category)?;
    if !r.description.is_empty() {
        writeln!(out, "   {}", r.description)?;
    }
    writeln!(
        out,
        "   {}  |  {} ({})",
        r.price_label,
        r.stock_state.label(),
        r.stock_state.kind()
    )?;
    match &r.image {
        ImageRef::Asset(src) => writeln!(out, "   image: {src}"),
        ImageRef::Placeholder => writeln!(out, "   image: (placeholder)"),
    }
}

pub fn write_trace_text(out: &mut impl Write, block: &TraceBlock) -> io::Result<()> {
    for line in block.lines() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

pub fn write_trace_json(out: &mut impl Write, block: &TraceBlock) -> io::Result<()> {
    serde_json::to_writer(&mut *out, block)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Catalog;

    fn render(model: &RenderModel) -> String {
        let mut buf = Vec::new();
        write_view(&mut buf, "3 items", model).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_cards_in_order() {
        let catalog = Catalog::seed().unwrap();
        let text = render(&RenderModel::build(catalog.products(), 3));
        assert!(text.starts_with("== Catalog (3 items) ==\nShowing 3 of 3 products\n"));
        let lamp = text.find("💡 Brass Desk Lamp  [Lighting]").unwrap();
        let set = text.find("📦 Jewellery Set  [Jewellery]").unwrap();
        assert!(lamp < set);
        assert!(text.contains("$124.00  |  Only 4 left (low)"));
        assert!(text.contains("image: brass_lamp_desk.jpg"));
    }

    #[test]
    fn writes_empty_notice() {
        let text = render(&RenderModel::build(&[], 3));
        assert!(text.contains("Showing 0 of 3 products"));
        assert!(text.contains("🔍 No products match"));
        assert!(text.contains("Try lowering the minimum price filter."));
    }
}
