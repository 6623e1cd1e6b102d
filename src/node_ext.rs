use dom_query::Node;
use std::collections::BTreeMap;

/// Extension trait for dom_query::Node used by the HTML canonicalizer
pub trait NodeExt {
    fn text_content(&self) -> String;
    fn tag_name(&self) -> Option<String>;
    fn sorted_attrs(&self) -> BTreeMap<String, String>;
    fn child_nodes(&self) -> Vec<Node>;
}

impl<'a> NodeExt for Node<'a> {
    fn text_content(&self) -> String {
        self.text().to_string()
    }

    fn tag_name(&self) -> Option<String> {
        self.query(|node| {
            node.as_element()
                .map(|element| element.name.local.to_string())
        })
        .flatten()
    }

    fn sorted_attrs(&self) -> BTreeMap<String, String> {
        self.query(|node| {
            node.as_element().map(|element| {
                element
                    .attrs
                    .iter()
                    .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                    .collect()
            })
        })
        .flatten()
        .unwrap_or_default()
    }

    fn child_nodes(&self) -> Vec<Node> {
        self.children()
    }
}
