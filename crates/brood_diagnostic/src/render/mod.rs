//! Rendering of shapes and nodes inside error messages.

use std::fmt::Write;

use brood_node::ChildNode;

/// Render the names of a pattern's shapes.
///
/// One shape prints as its bare name; several print as `[a, b, c]`.
pub fn type_list<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names: Vec<S> = names.into_iter().collect();
    if let [single] = names.as_slice() {
        return single.as_ref().to_owned();
    }

    let mut out = String::from("[");
    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name.as_ref());
    }
    out.push(']');
    out
}

/// Render a node as markup, e.g. `<E3 rand={123} />`.
pub fn pretty_node(node: &ChildNode) -> String {
    let mut out = format!("<{}", node.display_name());
    for (key, value) in node.props().iter() {
        // Writing to a String cannot fail.
        let _ = write!(out, " {key}={{{value}}}");
    }
    out.push_str(" />");
    out
}
