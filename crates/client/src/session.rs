//! Session membership checks and service-node selection

use rand::Rng;

use relaymesh_core::{Node, RelayMeshError, Result, Session};

/// Whether `node` is a member of `session`, by public key
pub fn is_member(session: &Session, node: &Node) -> bool {
    session
        .nodes
        .iter()
        .any(|n| n.public_key == node.public_key)
}

/// Pick a node uniformly at random from the session.
///
/// The random source is injected so callers (and tests) control determinism.
pub fn select_random<'a, R: Rng>(session: &'a Session, rng: &mut R) -> Result<&'a Node> {
    if session.nodes.is_empty() {
        return Err(RelayMeshError::EmptySession);
    }
    let index = rng.gen_range(0..session.nodes.len());
    Ok(&session.nodes[index])
}
