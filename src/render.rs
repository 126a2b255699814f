//! Text rendering of schema trees.

use std::fmt::Write;

use crate::schema::{Properties, SchemaNode};

const INDENT: &str = "  ";

/// Render an object schema as an indented field list with badges.
///
/// Each property gets one line: its name (with the format in parentheses when
/// there is one) followed by `[type]`, `[format]`, `[max: N]`,
/// `[max items: N]` and `[enum: ...]` badges for the attributes it carries.
/// Non-object roots render as an empty string.
pub fn render_tree(schema: &SchemaNode) -> String {
    let mut out = String::new();
    if let Some(properties) = schema.properties() {
        render_properties(&mut out, properties, 0);
    }
    out
}

/// Badges for a single node, without its name.
pub fn badges(node: &SchemaNode) -> Vec<String> {
    let mut badges = vec![node.kind().to_string()];

    if let Some(format) = node.format() {
        badges.push(format.to_string());
    }
    if let Some(max_length) = node.max_length() {
        badges.push(format!("max: {}", max_length));
    }
    if let Some(max_items) = node.max_items() {
        badges.push(format!("max items: {}", max_items));
    }
    if let SchemaNode::String {
        enum_values: Some(values),
        ..
    } = node
    {
        badges.push(format!("enum: {}", values.join(", ")));
    }

    badges
}

fn render_properties(out: &mut String, properties: &Properties, level: usize) {
    for (name, node) in properties.iter() {
        let _ = write!(out, "{}{}", INDENT.repeat(level), name);
        if let Some(format) = node.format() {
            let _ = write!(out, " ({})", format);
        }
        for badge in badges(node) {
            let _ = write!(out, " [{}]", badge);
        }
        out.push('\n');

        match node {
            SchemaNode::Object { properties } => render_properties(out, properties, level + 1),
            SchemaNode::Array { items, .. } => {
                if let Some(item_properties) = items.properties() {
                    render_properties(out, item_properties, level + 1);
                }
            }
            _ => {}
        }
    }
}
