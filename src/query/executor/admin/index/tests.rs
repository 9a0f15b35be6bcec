use std::sync::Arc;

use crate::config::QueryConfig;
use crate::core::error::{DBError, MetaError};
use crate::core::result::IteratorKind;
use crate::core::{DataType, Value};
use crate::query::context::{QueryContext, RequestContext, Session, SpaceInfo};
use crate::query::executor::admin::index::*;
use crate::query::executor::base::Executor;
use crate::query::planner::plan::{
    CreateIndexNode, DescIndexNode, DropIndexNode, ExecutionPlan, PlanNode, PlanNodePool,
    ShowIndexesNode,
};
use crate::storage::metadata::{ColumnDef, IndexItem, MemoryMetaClient, MetaClient, Schema};

const SPACE: i32 = 1;

fn setup() -> (Arc<MemoryMetaClient>, Arc<QueryContext>) {
    let meta = Arc::new(MemoryMetaClient::new());
    meta.add_space(SPACE);
    let session = Session::new(1).with_space(SpaceInfo::new(SPACE, "test_space"));
    let qctx = QueryContext::new(
        RequestContext::new(session, ""),
        meta.clone(),
        QueryConfig::default(),
        PlanNodePool::new(),
        ExecutionPlan::new(None),
    );
    (meta, Arc::new(qctx))
}

fn raw_index(id: i32, name: &str) -> IndexItem {
    IndexItem {
        index_id: id,
        index_name: name.to_string(),
        schema_name: "like".to_string(),
        fields: vec![],
    }
}

fn show_edge_indexes_node() -> ShowIndexesNode {
    let mut node = ShowIndexesNode::new(None);
    node.set_output_var("out".to_string());
    node
}

fn names_of(qctx: &QueryContext) -> Vec<Value> {
    let result = qctx.get_result("out").expect("result");
    let ds = result.value().as_dataset().expect("dataset");
    assert_eq!(ds.col_names, vec!["Names"]);
    ds.rows.iter().map(|r| r[0].clone()).collect()
}

#[tokio::test]
async fn test_show_edge_indexes_dedup_and_sort() {
    let (meta, qctx) = setup();
    meta.insert_raw_edge_index(SPACE, raw_index(1, "idx_b"));
    meta.insert_raw_edge_index(SPACE, raw_index(2, "idx_a"));
    meta.insert_raw_edge_index(SPACE, raw_index(3, "idx_a"));

    let mut exec = ShowEdgeIndexesExecutor::new(show_edge_indexes_node(), qctx.clone());
    exec.execute().await.expect("show edge indexes");

    assert_eq!(
        names_of(&qctx),
        vec![Value::from("idx_a"), Value::from("idx_b")]
    );
    let result = qctx.get_result("out").expect("result");
    assert_eq!(result.iter_kind(), IteratorKind::Default);
}

#[tokio::test]
async fn test_show_edge_indexes_empty() {
    let (_meta, qctx) = setup();
    let mut exec = ShowEdgeIndexesExecutor::new(show_edge_indexes_node(), qctx.clone());
    exec.execute().await.expect("show edge indexes");
    assert!(names_of(&qctx).is_empty());
}

#[tokio::test]
async fn test_show_edge_indexes_single() {
    let (meta, qctx) = setup();
    meta.insert_raw_edge_index(SPACE, raw_index(1, "only"));
    let mut exec = ShowEdgeIndexesExecutor::new(show_edge_indexes_node(), qctx.clone());
    exec.execute().await.expect("show edge indexes");
    assert_eq!(names_of(&qctx), vec![Value::from("only")]);
}

#[tokio::test]
async fn test_show_edge_indexes_rpc_failure() {
    let (meta, qctx) = setup();
    meta.fail_next_rpc("leader changed");
    let mut exec = ShowEdgeIndexesExecutor::new(show_edge_indexes_node(), qctx.clone());
    assert_eq!(
        exec.execute().await,
        Err(DBError::Meta(MetaError::RpcFailure(
            "leader changed".to_string()
        )))
    );
    assert!(qctx.get_result("out").is_none());
}

#[tokio::test]
async fn test_show_tag_indexes() {
    let (meta, qctx) = setup();
    meta.insert_raw_tag_index(SPACE, raw_index(1, "person_age"));
    meta.insert_raw_tag_index(SPACE, raw_index(2, "person_age"));
    meta.insert_raw_tag_index(SPACE, raw_index(3, "person_name"));

    let mut exec = ShowTagIndexesExecutor::new(show_edge_indexes_node(), qctx.clone());
    exec.execute().await.expect("show tag indexes");
    assert_eq!(
        names_of(&qctx),
        vec![Value::from("person_age"), Value::from("person_name")]
    );
}

#[tokio::test]
async fn test_create_desc_drop_edge_index() {
    let (meta, qctx) = setup();
    let schema = Schema::new(vec![
        ColumnDef::new("likeness", DataType::Double),
        ColumnDef::new("since", DataType::Int64),
    ]);
    meta.create_edge_schema(SPACE, "like", &schema, false)
        .await
        .expect("create edge");

    let mut node = CreateIndexNode::new(
        None,
        "like",
        "like_idx",
        vec!["likeness".to_string(), "since".to_string()],
        false,
    );
    node.set_output_var("create".to_string());
    CreateEdgeIndexExecutor::new(node, qctx.clone())
        .execute()
        .await
        .expect("create edge index");

    let mut node = DescIndexNode::new(None, "like_idx");
    node.set_output_var("desc".to_string());
    DescEdgeIndexExecutor::new(node, qctx.clone())
        .execute()
        .await
        .expect("desc edge index");
    let result = qctx.get_result("desc").expect("desc result");
    let ds = result.value().as_dataset().expect("dataset");
    assert_eq!(ds.col_names, vec!["Field", "Type"]);
    assert_eq!(
        ds.rows,
        vec![
            vec![Value::from("likeness"), Value::from("double")],
            vec![Value::from("since"), Value::from("int64")],
        ]
    );

    let mut node = DescIndexNode::new(None, "like_idx");
    node.set_output_var("show".to_string());
    ShowCreateEdgeIndexExecutor::new(node, qctx.clone())
        .execute()
        .await
        .expect("show create edge index");
    let result = qctx.get_result("show").expect("show result");
    let ds = result.value().as_dataset().expect("dataset");
    assert_eq!(ds.col_names, vec!["Edge Index Name", "Create Edge Index"]);
    assert_eq!(
        ds.rows[0][1],
        Value::from("CREATE EDGE INDEX `like_idx` ON `like` (\n `likeness`,\n `since`\n)")
    );

    let mut node = DropIndexNode::new(None, "like_idx", false);
    node.set_output_var("drop".to_string());
    DropEdgeIndexExecutor::new(node, qctx.clone())
        .execute()
        .await
        .expect("drop edge index");
    assert!(meta
        .list_edge_indexes(SPACE)
        .await
        .expect("list")
        .is_empty());
}

#[tokio::test]
async fn test_create_tag_index_unknown_tag() {
    let (_meta, qctx) = setup();
    let mut node = CreateIndexNode::new(None, "person", "idx", vec!["name".to_string()], false);
    node.set_output_var("out".to_string());
    assert_eq!(
        CreateTagIndexExecutor::new(node, qctx).execute().await,
        Err(DBError::Meta(MetaError::TagNotFound("person".to_string())))
    );
}

#[tokio::test]
async fn test_drop_missing_tag_index() {
    let (_meta, qctx) = setup();
    let mut node = DropIndexNode::new(None, "ghost", true);
    node.set_output_var("out".to_string());
    DropTagIndexExecutor::new(node, qctx.clone())
        .execute()
        .await
        .expect("drop if exists");

    let mut node = DropIndexNode::new(None, "ghost", false);
    node.set_output_var("out".to_string());
    assert_eq!(
        DropTagIndexExecutor::new(node, qctx).execute().await,
        Err(DBError::Meta(MetaError::IndexNotFound("ghost".to_string())))
    );
}
