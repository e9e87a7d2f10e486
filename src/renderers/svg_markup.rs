//! Static SVG export
//!
//! Writes a DisplayList out as two `<svg>` documents (treemap, then legend)
//! with the same element structure, classes and data attributes as the
//! chart mounted in the browser.

use std::fmt::Write;

use quick_xml::escape::escape;

use crate::chart_layout::display_list::{translate, DisplayList, RenderLegend, RenderTile, SvgFrame};

/// Namespace of SVG elements
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render the treemap and legend SVG markup
pub fn render_svg_markup(list: &DisplayList) -> String {
    let mut out = String::new();

    open_svg(&mut out, &list.treemap);
    for tile in &list.tiles {
        write_tile(&mut out, tile);
    }
    out.push_str("</svg>");

    open_svg(&mut out, &list.legend_frame);
    write_legend(&mut out, &list.legend);
    out.push_str("</svg>");

    out
}

fn open_svg(out: &mut String, frame: &SvgFrame) {
    let _ = write!(
        out,
        r#"<svg xmlns="{}" width="{}" height="{}" transform="{}">"#,
        SVG_NS,
        frame.width,
        frame.height,
        translate(frame.translate_x, frame.translate_y)
    );
}

fn write_tile(out: &mut String, tile: &RenderTile) {
    let _ = write!(
        out,
        r#"<g class="tile-container" transform="{}">"#,
        translate(tile.x, tile.y)
    );
    let _ = write!(
        out,
        r#"<rect class="tile" data-name="{}" data-category="{}" data-value="{}" width="{}" height="{}" style="fill: {}"></rect>"#,
        escape(tile.name.as_str()),
        escape(tile.category.as_str()),
        escape(tile.value.as_str()),
        tile.width,
        tile.height,
        escape(tile.fill.as_str())
    );
    out.push_str(r#"<text class="tile-title">"#);
    for line in &tile.label_lines {
        let _ = write!(
            out,
            r#"<tspan x="{}" y="{}">{}</tspan>"#,
            line.x,
            line.y,
            escape(line.text.as_str())
        );
    }
    out.push_str("</text></g>");
}

fn write_legend(out: &mut String, legend: &RenderLegend) {
    let _ = write!(
        out,
        r#"<g id="legend" transform="{}">"#,
        translate(legend.translate_x, legend.translate_y)
    );
    for item in &legend.items {
        let _ = write!(
            out,
            r#"<g transform="{}"><rect class="legend-item" style="fill: {}"></rect><text transform="{}">{}</text></g>"#,
            translate(item.translate_x, item.translate_y),
            escape(item.fill.as_str()),
            translate(item.label_x, item.label_y),
            escape(item.name.as_str())
        );
    }
    out.push_str("</g>");
}
