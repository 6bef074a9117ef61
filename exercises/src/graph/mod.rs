pub mod relationship;
pub mod route;

pub use relationship::{
    relationship_status, social_graph_from_json, Member, Relationship, SocialGraph,
};
pub use route::{eta, route_map_from_json, travel_time, Leg, RouteMap, UNREACHABLE};
