//! Materialize a DisplayList as SVG elements

use web_sys::{Document, Element};

use crate::chart_layout::display_list::{translate, DisplayList, RenderLegend, RenderTile, SvgFrame};
use crate::error::{ChartError, Result};
use crate::renderers::SVG_NS;

/// The two SVG roots appended to the container
pub struct MountedSvgs {
    pub treemap: Element,
    pub legend: Element,
}

impl MountedSvgs {
    /// Detach both SVGs from the page
    pub fn remove(&self) {
        self.treemap.remove();
        self.legend.remove();
    }
}

/// Build both SVGs and append them to `container`, treemap first
pub fn mount_display_list(
    document: &Document,
    container: &Element,
    list: &DisplayList,
) -> Result<MountedSvgs> {
    let treemap = svg_root(document, &list.treemap)?;
    for tile in &list.tiles {
        let group = tile_group(document, tile)?;
        append(&treemap, &group)?;
    }

    let legend = svg_root(document, &list.legend_frame)?;
    let legend_group = legend_group(document, &list.legend)?;
    append(&legend, &legend_group)?;

    append(container, &treemap)?;
    append(container, &legend)?;

    log::debug!("Mounted {} tiles", list.tiles.len());
    Ok(MountedSvgs { treemap, legend })
}

fn svg_element(document: &Document, tag: &str) -> Result<Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| ChartError::dom(&format!("create <{}>", tag), e))
}

fn set_attr(element: &Element, name: &str, value: &str) -> Result<()> {
    element
        .set_attribute(name, value)
        .map_err(|e| ChartError::dom(&format!("set attribute {}", name), e))
}

fn append(parent: &Element, child: &Element) -> Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| ChartError::dom("append child", e))
}

fn svg_root(document: &Document, frame: &SvgFrame) -> Result<Element> {
    let svg = svg_element(document, "svg")?;
    set_attr(&svg, "width", &frame.width.to_string())?;
    set_attr(&svg, "height", &frame.height.to_string())?;
    set_attr(&svg, "transform", &translate(frame.translate_x, frame.translate_y))?;
    Ok(svg)
}

fn tile_group(document: &Document, tile: &RenderTile) -> Result<Element> {
    let group = svg_element(document, "g")?;
    set_attr(&group, "class", "tile-container")?;
    set_attr(&group, "transform", &translate(tile.x, tile.y))?;

    let rect = svg_element(document, "rect")?;
    set_attr(&rect, "class", "tile")?;
    set_attr(&rect, "data-name", &tile.name)?;
    set_attr(&rect, "data-category", &tile.category)?;
    set_attr(&rect, "data-value", &tile.value)?;
    set_attr(&rect, "width", &tile.width.to_string())?;
    set_attr(&rect, "height", &tile.height.to_string())?;
    set_attr(&rect, "style", &format!("fill: {}", tile.fill))?;
    append(&group, &rect)?;

    let title = svg_element(document, "text")?;
    set_attr(&title, "class", "tile-title")?;
    for line in &tile.label_lines {
        let tspan = svg_element(document, "tspan")?;
        set_attr(&tspan, "x", &line.x.to_string())?;
        set_attr(&tspan, "y", &line.y.to_string())?;
        tspan.set_text_content(Some(&line.text));
        append(&title, &tspan)?;
    }
    append(&group, &title)?;

    Ok(group)
}

fn legend_group(document: &Document, legend: &RenderLegend) -> Result<Element> {
    let root = svg_element(document, "g")?;
    set_attr(&root, "id", "legend")?;
    set_attr(&root, "transform", &translate(legend.translate_x, legend.translate_y))?;

    for item in &legend.items {
        let group = svg_element(document, "g")?;
        set_attr(&group, "transform", &translate(item.translate_x, item.translate_y))?;

        let swatch = svg_element(document, "rect")?;
        set_attr(&swatch, "class", "legend-item")?;
        set_attr(&swatch, "style", &format!("fill: {}", item.fill))?;
        append(&group, &swatch)?;

        let caption = svg_element(document, "text")?;
        set_attr(&caption, "transform", &translate(item.label_x, item.label_y))?;
        caption.set_text_content(Some(&item.name));
        append(&group, &caption)?;

        append(&root, &group)?;
    }

    Ok(root)
}
