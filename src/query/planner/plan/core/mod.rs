pub mod explain;
pub mod id_generator;
pub mod nodes;

pub use explain::{Pair, PlanDescription, PlanNodeDescription};
pub use id_generator::{next_node_id, next_plan_id};
pub use nodes::*;
