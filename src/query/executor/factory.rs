//! 执行器工厂模块
//!
//! 根据计划节点的种类创建对应的执行器实例，对节点种类做穷尽匹配

use std::sync::Arc;

use crate::core::error::DBResult;
use crate::query::context::QueryContext;
use crate::query::executor::admin::*;
use crate::query::executor::base::{Executor, StartExecutor};
use crate::query::executor::result_processing::FilterExecutor;
use crate::query::planner::plan::{NodeRef, PlanNodeEnum};

pub struct ExecutorFactory;

impl ExecutorFactory {
    /// 为对象池中的节点创建执行器
    ///
    /// 执行器持有节点的副本，输出变量与节点一致
    pub fn create(node_ref: NodeRef, qctx: &Arc<QueryContext>) -> DBResult<Box<dyn Executor>> {
        let node = qctx.node(node_ref)?.clone();
        let qctx = qctx.clone();
        let executor: Box<dyn Executor> = match node {
            PlanNodeEnum::Start(n) => Box::new(StartExecutor::new(n, qctx)),
            PlanNodeEnum::Filter(n) => Box::new(FilterExecutor::new(n, qctx)),

            // Tag schema
            PlanNodeEnum::CreateTag(n) => Box::new(CreateTagExecutor::new(n, qctx)),
            PlanNodeEnum::AlterTag(n) => Box::new(AlterTagExecutor::new(n, qctx)),
            PlanNodeEnum::DescTag(n) => Box::new(DescTagExecutor::new(n, qctx)),
            PlanNodeEnum::ShowCreateTag(n) => Box::new(ShowCreateTagExecutor::new(n, qctx)),
            PlanNodeEnum::DropTag(n) => Box::new(DropTagExecutor::new(n, qctx)),
            PlanNodeEnum::ShowTags(n) => Box::new(ShowTagsExecutor::new(n, qctx)),

            // Edge schema
            PlanNodeEnum::CreateEdge(n) => Box::new(CreateEdgeExecutor::new(n, qctx)),
            PlanNodeEnum::AlterEdge(n) => Box::new(AlterEdgeExecutor::new(n, qctx)),
            PlanNodeEnum::DescEdge(n) => Box::new(DescEdgeExecutor::new(n, qctx)),
            PlanNodeEnum::ShowCreateEdge(n) => Box::new(ShowCreateEdgeExecutor::new(n, qctx)),
            PlanNodeEnum::DropEdge(n) => Box::new(DropEdgeExecutor::new(n, qctx)),
            PlanNodeEnum::ShowEdges(n) => Box::new(ShowEdgesExecutor::new(n, qctx)),

            // 索引
            PlanNodeEnum::CreateTagIndex(n) => Box::new(CreateTagIndexExecutor::new(n, qctx)),
            PlanNodeEnum::CreateEdgeIndex(n) => Box::new(CreateEdgeIndexExecutor::new(n, qctx)),
            PlanNodeEnum::DescTagIndex(n) => Box::new(DescTagIndexExecutor::new(n, qctx)),
            PlanNodeEnum::DescEdgeIndex(n) => Box::new(DescEdgeIndexExecutor::new(n, qctx)),
            PlanNodeEnum::ShowCreateTagIndex(n) => {
                Box::new(ShowCreateTagIndexExecutor::new(n, qctx))
            }
            PlanNodeEnum::ShowCreateEdgeIndex(n) => {
                Box::new(ShowCreateEdgeIndexExecutor::new(n, qctx))
            }
            PlanNodeEnum::DropTagIndex(n) => Box::new(DropTagIndexExecutor::new(n, qctx)),
            PlanNodeEnum::DropEdgeIndex(n) => Box::new(DropEdgeIndexExecutor::new(n, qctx)),
            PlanNodeEnum::ShowTagIndexes(n) => Box::new(ShowTagIndexesExecutor::new(n, qctx)),
            PlanNodeEnum::ShowEdgeIndexes(n) => Box::new(ShowEdgeIndexesExecutor::new(n, qctx)),
        };
        Ok(executor)
    }
}
