//! `use bevy_chunked_nav_plugin::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::navgraph::{
	chunk::*, helpers::*, node::*, profile::*, region::*, scan::*, utilities::*, *,
};

#[doc(hidden)]
pub use crate::{
	bundle::*,
	plugin::{graph_layer::*, region_layer::*, *},
};
