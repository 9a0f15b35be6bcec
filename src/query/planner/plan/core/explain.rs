//! 计划描述
//!
//! EXPLAIN 使用的节点描述与整棵计划的描述

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 节点描述键值对
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl Pair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// 计划节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanNodeDescription {
    pub name: String,
    pub id: i64,
    pub output_var: String,
    pub description: Vec<Pair>,
    pub dependencies: Vec<i64>,
}

impl PlanNodeDescription {
    pub fn new(name: impl Into<String>, id: i64) -> Self {
        Self {
            name: name.into(),
            id,
            output_var: String::new(),
            description: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn with_output_var(mut self, output_var: impl Into<String>) -> Self {
        self.output_var = output_var.into();
        self
    }

    pub fn add_description(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.description.push(Pair::new(key, value));
    }

    /// 按键查找描述值
    pub fn get(&self, key: &str) -> Option<&str> {
        self.description
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// 计划描述
///
/// 节点按从根到叶的顺序排列，`node_index_map` 记录节点ID到下标的映射
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanDescription {
    pub plan_id: i64,
    pub plan_node_descs: Vec<PlanNodeDescription>,
    pub node_index_map: HashMap<i64, usize>,
    pub format: String,
}

impl PlanDescription {
    pub fn new(plan_id: i64) -> Self {
        Self {
            plan_id,
            plan_node_descs: Vec::new(),
            node_index_map: HashMap::new(),
            format: "row".to_string(),
        }
    }

    pub fn add_node_desc(&mut self, desc: PlanNodeDescription) -> usize {
        let index = self.plan_node_descs.len();
        self.node_index_map.insert(desc.id, index);
        self.plan_node_descs.push(desc);
        index
    }

    pub fn get_node_desc(&self, node_id: i64) -> Option<&PlanNodeDescription> {
        self.node_index_map
            .get(&node_id)
            .and_then(|&index| self.plan_node_descs.get(index))
    }

    pub fn to_json(&self) -> crate::core::DBResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
