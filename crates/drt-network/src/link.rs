//! Link registry: per-link geometry/speed plus a CSR adjacency used by the
//! default least-cost path finder.
//!
//! # Data layout
//!
//! Outgoing links of a node occupy a contiguous slice of `out_link_ids`,
//! located via the `node_out_start` row pointer — the same Compressed
//! Sparse Row layout used for fast graph traversal in this workspace's
//! teacher repo. `LinkId` is the edge index directly (links *are* the graph
//! edges here — there is no separate "road segment" vs "link" distinction).

use drt_core::LinkId;

/// Internal graph node handle. Not exposed to `DrtRequest` — requests only
/// ever reference `LinkId`s; `NodeId`s exist purely to wire links together
/// for routing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Static per-link metadata.
#[derive(Copy, Clone, Debug)]
pub struct Link {
    pub from_node: NodeId,
    pub to_node: NodeId,
    pub length_m: f64,
    pub free_speed_mps: f64,
    /// Routing cost (seconds) of traversing this link — may reflect
    /// congestion and therefore differ from `length_m / free_speed_mps`.
    pub travel_time_s: f64,
}

impl Link {
    /// Free-flow traversal time of this link alone, in seconds. Used by
    /// `NetworkOracle` to augment a path with its terminal links.
    #[inline]
    pub fn free_flow_travel_time(&self) -> f64 {
        self.length_m / self.free_speed_mps
    }
}

/// Directed link graph in CSR format.
///
/// Construct via [`LinkRegistryBuilder`]; the registry itself is immutable
/// and safely shared by reference across worker threads once built.
pub struct LinkRegistry {
    node_count: usize,
    links: Vec<Link>,
    node_out_start: Vec<u32>,
    out_link_ids: Vec<LinkId>,
}

impl LinkRegistry {
    pub fn empty() -> Self {
        LinkRegistryBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub fn link(&self, id: LinkId) -> Link {
        self.links[id.index()]
    }

    /// CSR row slice: outgoing links from `node`, in registration order.
    #[inline]
    pub fn out_links(&self, node: NodeId) -> &[LinkId] {
        if node == NodeId::INVALID {
            return &[];
        }
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        &self.out_link_ids[start..end]
    }
}

/// Incrementally builds a [`LinkRegistry`], then [`build`](Self::build)s it.
///
/// Links are assigned `LinkId`s densely, in the order `add_link` is called.
pub struct LinkRegistryBuilder {
    node_count: usize,
    raw: Vec<Link>,
}

impl LinkRegistryBuilder {
    pub fn new() -> Self {
        Self { node_count: 0, raw: Vec::new() }
    }

    /// Register `count` nodes, `NodeId(0)..NodeId(count)`. Call once before
    /// adding links.
    pub fn with_nodes(mut self, count: usize) -> Self {
        self.node_count = count;
        self
    }

    /// Add a directed link; returns the `LinkId` assigned to it (dense,
    /// insertion-order).
    pub fn add_link(
        &mut self,
        from: NodeId,
        to: NodeId,
        length_m: f64,
        free_speed_mps: f64,
        travel_time_s: f64,
    ) -> LinkId {
        let id = LinkId(self.raw.len() as u32);
        self.raw.push(Link { from_node: from, to_node: to, length_m, free_speed_mps, travel_time_s });
        id
    }

    pub fn build(self) -> LinkRegistry {
        let link_count = self.raw.len();
        let mut node_out_start = vec![0u32; self.node_count + 1];
        for link in &self.raw {
            node_out_start[link.from_node.index() + 1] += 1;
        }
        for i in 1..=self.node_count {
            node_out_start[i] += node_out_start[i - 1];
        }

        // Stable-bucket links into CSR order by source node, preserving
        // LinkId (insertion order) within a node's bucket.
        let mut cursor = node_out_start.clone();
        let mut out_link_ids = vec![LinkId(0); link_count];
        for (i, link) in self.raw.iter().enumerate() {
            let slot = cursor[link.from_node.index()] as usize;
            out_link_ids[slot] = LinkId(i as u32);
            cursor[link.from_node.index()] += 1;
        }

        LinkRegistry {
            node_count: self.node_count,
            links: self.raw,
            node_out_start,
            out_link_ids,
        }
    }
}

impl Default for LinkRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
