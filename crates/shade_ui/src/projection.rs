//! One-shot relocation of light-tree children into an internal slot element.
//!
//! A handful of widgets render an internal sub-element that must end up
//! holding the caller's children (the rendering path for those widgets has no
//! transparent content projection). The relocation runs once, after first
//! paint: element and non-empty text nodes that precede the internal target
//! move into it in document order, framework placeholder nodes stay behind,
//! and later property updates never re-run the move.

/// Classification of one light-tree node for adoption planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A rendered element.
    Element,
    /// A text node; whitespace-only text counts as empty.
    Text {
        /// Whether the node holds only whitespace.
        empty: bool,
    },
    /// A comment or other framework bookkeeping placeholder.
    Marker,
}

impl NodeKind {
    fn adoptable(self) -> bool {
        matches!(self, NodeKind::Element | NodeKind::Text { empty: false })
    }
}

/// Settled-flag state machine guarding one-time child adoption.
///
/// `unattached → first paint (relocate once) → settled`; planning after the
/// projection has settled yields nothing.
#[derive(Debug, Default, Clone)]
pub struct ChildProjection {
    settled: bool,
}

impl ChildProjection {
    /// A projection that has not yet run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the one-shot relocation has already happened.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Marks the projection settled without relocating anything.
    ///
    /// Used when the internal target is absent: relocation is a no-op, but
    /// the first paint has passed.
    pub fn settle(&mut self) {
        self.settled = true;
    }

    /// Returns the indices of the nodes to relocate, in document order, and
    /// settles the projection. An already-settled projection plans nothing.
    pub fn plan(&mut self, preceding: &[NodeKind]) -> Vec<usize> {
        if self.settled {
            return Vec::new();
        }
        self.settled = true;
        preceding
            .iter()
            .enumerate()
            .filter(|(_, kind)| kind.adoptable())
            .map(|(index, _)| index)
            .collect()
    }
}

fn classify(node: &web_sys::Node) -> NodeKind {
    match node.node_type() {
        web_sys::Node::ELEMENT_NODE => NodeKind::Element,
        web_sys::Node::TEXT_NODE => NodeKind::Text {
            empty: node
                .text_content()
                .map_or(true, |text| text.trim().is_empty()),
        },
        _ => NodeKind::Marker,
    }
}

/// Moves the host's light children that precede `target` into `target`.
///
/// Order is preserved and placeholder nodes are skipped. With no target the
/// call is a no-op that still settles the projection.
pub fn adopt_children(
    projection: &mut ChildProjection,
    host: &web_sys::Element,
    target: Option<&web_sys::Element>,
) {
    let Some(target) = target else {
        projection.settle();
        return;
    };

    let child_nodes = host.child_nodes();
    let mut kinds = Vec::new();
    let mut nodes = Vec::new();
    for index in 0..child_nodes.length() {
        let Some(node) = child_nodes.item(index) else {
            break;
        };
        if target.is_same_node(Some(&node)) {
            break;
        }
        kinds.push(classify(&node));
        nodes.push(node);
    }

    for index in projection.plan(&kinds) {
        let _ = target.append_child(&nodes[index]);
    }
}
