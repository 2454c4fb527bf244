use std::rc::Rc;
use std::string::FromUtf8Error;

use html5ever::driver::ParseOpts;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, parse_fragment, QualName};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use thiserror::Error;

/// Id of the element the project list is written into.
pub const CONTAINER_ID: &str = "projects-container";

/// Something whose inner markup can be swapped out in one write.
pub trait Container {
    fn replace_contents(&mut self, markup: &str);
}

/// Markup held on its own, without a surrounding page.
#[derive(Debug, Default, Clone)]
pub struct MemoryContainer {
    markup: String,
}

impl MemoryContainer {
    pub fn contents(&self) -> &str {
        &self.markup
    }
}

impl Container for MemoryContainer {
    fn replace_contents(&mut self, markup: &str) {
        self.markup = markup.to_owned();
    }
}

#[derive(Debug, Error)]
pub enum ContainerError {
    #[error("ElementNotFound: no element with id \"{id}\"")]
    ElementNotFound {
        id: String,
    },

    #[error("Serialize: {source}")]
    Serialize {
        source: std::io::Error,
    },

    #[error("SerializedNotUtf8: {source}")]
    SerializedNotUtf8 {
        source: FromUtf8Error,
    },
}

/// A parsed HTML page with one element located by id. The element is found
/// when the page is parsed, so later writes cannot fail.
pub struct PageDocument {
    dom: RcDom,
    container: Handle,
    context: QualName,
}

impl PageDocument {
    pub fn parse(html: String, id: &str) -> Result<Self, ContainerError> {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

        let container = find_by_id(&dom.document, id)
            .ok_or_else(|| ContainerError::ElementNotFound { id: id.to_owned() })?;
        let context = match container.data {
            NodeData::Element { ref name, .. } => name.clone(),
            _ => return Err(ContainerError::ElementNotFound { id: id.to_owned() }),
        };

        Ok(Self {
            dom,
            container,
            context,
        })
    }

    pub fn into_html(self) -> Result<String, ContainerError> {
        serialize_children(self.dom.document.clone())
    }

    #[cfg(test)]
    fn contents(&self) -> String {
        serialize_children(self.container.clone()).unwrap()
    }
}

impl Container for PageDocument {
    /// Parses `markup` as a fragment in the container's context and swaps it
    /// in for the container's children.
    fn replace_contents(&mut self, markup: &str) {
        let fragment = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            self.context.clone(),
            Vec::new(),
        )
        .one(markup);

        // Fragment parsing puts the nodes under a synthetic <html> root.
        let root = fragment.document.children.borrow().first().cloned();
        let nodes = root.map(|root| root.children.take()).unwrap_or_default();

        for node in &nodes {
            node.parent.set(Some(Rc::downgrade(&self.container)));
        }
        for old in self.container.children.replace(nodes) {
            old.parent.set(None);
        }
    }
}

fn find_by_id(node: &Handle, id: &str) -> Option<Handle> {
    if let NodeData::Element { ref attrs, .. } = node.data {
        let matches = attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == "id" && &*attr.value == id);
        if matches {
            return Some(node.clone());
        }
    }

    node.children
        .borrow()
        .iter()
        .find_map(|child| find_by_id(child, id))
}

fn serialize_children(node: Handle) -> Result<String, ContainerError> {
    let handle: SerializableHandle = node.into();
    let mut bytes = Vec::new();
    serialize(&mut bytes, &handle, SerializeOpts::default())
        .map_err(|source| ContainerError::Serialize { source })?;
    String::from_utf8(bytes).map_err(|source| ContainerError::SerializedNotUtf8 { source })
}
