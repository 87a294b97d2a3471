//! SVG export.
//!
//! The vector side of the canvas is replayed from its element journal, in
//! draw order, so stacking matches the raster.

use std::fs::File;
use std::path::Path;

use simple_xml_builder::XMLElement;

use crate::canvas::{Canvas, VectorElement};
use crate::error::{AbstroError, Result};
use crate::types::Colour;

/// Build the SVG document for a canvas.
pub fn svg_document(canvas: &Canvas) -> XMLElement {
    let mut root = XMLElement::new("svg");
    root.add_attribute("width", canvas.width());
    root.add_attribute("height", canvas.height());
    root.add_attribute("xmlns", "http://www.w3.org/2000/svg");

    for element in canvas.elements() {
        root.add_child(element_node(element));
    }
    root
}

/// Write the canvas as an SVG file at `path`.
pub fn write_svg(canvas: &Canvas, path: &Path) -> Result<()> {
    let document = svg_document(canvas);
    let file = File::create(path).map_err(|e| AbstroError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to create SVG file: {}", e),
    })?;
    document.write(file).map_err(|e| AbstroError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write SVG: {}", e),
    })
}

fn element_node(element: &VectorElement) -> XMLElement {
    match element {
        VectorElement::Circle {
            cx,
            cy,
            radius,
            fill,
            stroke,
            stroke_width,
        } => {
            let mut node = XMLElement::new("circle");
            node.add_attribute("cx", cx);
            node.add_attribute("cy", cy);
            node.add_attribute("r", radius);
            node.add_attribute("fill", fill.css_rgb());
            add_stroke(&mut node, stroke, *stroke_width);
            node
        }
        VectorElement::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
        } => {
            let mut node = XMLElement::new("polygon");
            let point_list = points
                .iter()
                .map(|(x, y)| format!("{},{}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            node.add_attribute("points", point_list);
            node.add_attribute("fill", fill.css_rgb());
            add_stroke(&mut node, stroke, *stroke_width);
            node
        }
        VectorElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            let mut node = XMLElement::new("line");
            node.add_attribute("x1", x1);
            node.add_attribute("y1", y1);
            node.add_attribute("x2", x2);
            node.add_attribute("y2", y2);
            node.add_attribute("stroke", stroke.css_rgb());
            node.add_attribute("stroke-width", stroke_width);
            node
        }
    }
}

fn add_stroke(node: &mut XMLElement, stroke: &Option<Colour>, stroke_width: u32) {
    match stroke {
        Some(colour) => node.add_attribute("stroke", colour.css_rgb()),
        None => node.add_attribute("stroke", "none"),
    }
    node.add_attribute("stroke-width", stroke_width);
}
