//! This is a plugin for Bevy game engine to maintain a chunked navigation graph and answer
//! bounded reachability queries for NPC AI
//!

pub mod navgraph;
pub mod bundle;
pub mod plugin;

pub mod prelude;
