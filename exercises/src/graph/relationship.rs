//! Follow relationships in a social graph.
//!
//! Only direct edges are considered: A following B following C says
//! nothing about A and C.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub following: BTreeSet<String>,
}

/// Member handle (with its `@` prefix) to the member's record.
pub type SocialGraph = BTreeMap<String, Member>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    NoRelationship,
    Follower,
    FollowedBy,
    Friends,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::NoRelationship => "no relationship",
            Relationship::Follower => "follower",
            Relationship::FollowedBy => "followed by",
            Relationship::Friends => "friends",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn relationship_status(
    from_member: &str,
    to_member: &str,
    graph: &SocialGraph,
) -> Relationship {
    let (Some(from), Some(to)) = (graph.get(from_member), graph.get(to_member)) else {
        return Relationship::NoRelationship;
    };

    match (from.following.contains(to_member), to.following.contains(from_member)) {
        (true, true) => Relationship::Friends,
        (true, false) => Relationship::Follower,
        (false, true) => Relationship::FollowedBy,
        (false, false) => Relationship::NoRelationship,
    }
}

/// Parse `{"@handle": {"following": ["@other", ...]}, ...}`.
pub fn social_graph_from_json(json: &str) -> Result<SocialGraph, GraphError> {
    Ok(serde_json::from_str(json)?)
}
