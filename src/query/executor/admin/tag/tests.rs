use std::sync::Arc;

use crate::config::QueryConfig;
use crate::core::error::{DBError, MetaError};
use crate::core::{DataType, Value};
use crate::query::context::{QueryContext, RequestContext, Session, SpaceInfo};
use crate::query::executor::admin::tag::*;
use crate::query::executor::base::Executor;
use crate::query::planner::plan::{
    AlterSchemaNode, CreateSchemaNode, DescSchemaNode, DropSchemaNode, ExecutionPlan, PlanNode,
    PlanNodePool, ShowSchemasNode,
};
use crate::storage::metadata::{
    AlterSchemaItem, AlterSchemaOp, ColumnDef, MemoryMetaClient, MetaClient, Schema, SchemaProp,
};

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

fn person_schema() -> Schema {
    Schema::new(vec![
        ColumnDef::new("name", DataType::String),
        ColumnDef::new("age", DataType::Int64)
            .not_null()
            .with_default(Value::Int(0)),
    ])
}

fn create_node(name: &str) -> CreateSchemaNode {
    let mut node = CreateSchemaNode::new(None, name, person_schema(), false);
    node.set_output_var("out".to_string());
    node
}

#[tokio::test]
async fn test_create_then_desc_tag() {
    let (_meta, qctx) = setup();
    let mut create = CreateTagExecutor::new(create_node("person"), qctx.clone());
    create.execute().await.expect("create tag");
    assert!(qctx.get_result("out").is_some());

    let mut node = DescSchemaNode::new(None, "person");
    node.set_output_var("desc".to_string());
    let mut desc = DescTagExecutor::new(node, qctx.clone());
    desc.execute().await.expect("desc tag");

    let result = qctx.get_result("desc").expect("desc result");
    let ds = result.value().as_dataset().expect("dataset");
    assert_eq!(ds.col_names, vec!["Field", "Type", "Null", "Default"]);
    assert_eq!(ds.row_count(), 2);
    assert_eq!(
        ds.rows[1],
        vec![
            Value::from("age"),
            Value::from("int64"),
            Value::from("NO"),
            Value::Int(0)
        ]
    );
    assert_eq!(desc.stats().num_rows, 2);
}

#[tokio::test]
async fn test_create_tag_without_space() {
    let meta = Arc::new(MemoryMetaClient::new());
    let qctx = Arc::new(QueryContext::new(
        RequestContext::new(Session::new(1), ""),
        meta,
        QueryConfig::default(),
        PlanNodePool::new(),
        ExecutionPlan::new(None),
    ));
    let mut create = CreateTagExecutor::new(create_node("person"), qctx);
    assert!(matches!(
        create.execute().await,
        Err(DBError::Execution(_))
    ));
}

#[tokio::test]
async fn test_create_tag_rpc_failure() {
    let (meta, qctx) = setup();
    meta.fail_next_rpc("connection refused");
    let mut create = CreateTagExecutor::new(create_node("person"), qctx.clone());
    let err = create.execute().await.expect_err("rpc failure");
    assert_eq!(
        err,
        DBError::Meta(MetaError::RpcFailure("connection refused".to_string()))
    );
    assert!(qctx.get_result("out").is_none());
}

#[tokio::test]
async fn test_alter_tag_uses_node_space() {
    let (meta, qctx) = setup();
    meta.create_tag_schema(SPACE, "person", &person_schema(), false)
        .await
        .expect("create tag");

    let items = vec![AlterSchemaItem::new(
        AlterSchemaOp::Add,
        vec![ColumnDef::new("email", DataType::String)],
    )];
    let mut node = AlterSchemaNode::new(None, SPACE, "person", items, SchemaProp::default());
    node.set_output_var("out".to_string());
    let mut alter = AlterTagExecutor::new(node, qctx);
    alter.execute().await.expect("alter tag");

    let schema = meta
        .get_tag_schema(SPACE, "person")
        .await
        .expect("get tag");
    assert!(schema.column("email").is_some());
}

#[tokio::test]
async fn test_alter_tag_unknown_space() {
    let (_meta, qctx) = setup();
    let mut node = AlterSchemaNode::new(None, 99, "person", vec![], SchemaProp::default());
    node.set_output_var("out".to_string());
    let mut alter = AlterTagExecutor::new(node, qctx);
    assert_eq!(
        alter.execute().await,
        Err(DBError::Meta(MetaError::SpaceNotFound(99)))
    );
}

#[tokio::test]
async fn test_show_create_tag() {
    let (meta, qctx) = setup();
    meta.create_tag_schema(SPACE, "person", &person_schema(), false)
        .await
        .expect("create tag");

    let mut node = DescSchemaNode::new(None, "person");
    node.set_output_var("out".to_string());
    let mut exec = ShowCreateTagExecutor::new(node, qctx.clone());
    exec.execute().await.expect("show create tag");

    let result = qctx.get_result("out").expect("result");
    let ds = result.value().as_dataset().expect("dataset");
    assert_eq!(ds.col_names, vec!["Tag", "Create Tag"]);
    assert_eq!(ds.rows[0][0], Value::from("person"));
    let stmt = ds.rows[0][1].as_str().expect("statement");
    assert!(stmt.starts_with("CREATE TAG `person`"));
}

#[tokio::test]
async fn test_drop_tag_if_exists() {
    let (_meta, qctx) = setup();
    let mut node = DropSchemaNode::new(None, "ghost", true);
    node.set_output_var("out".to_string());
    let mut drop = DropTagExecutor::new(node, qctx.clone());
    drop.execute().await.expect("drop if exists");

    let mut node = DropSchemaNode::new(None, "ghost", false);
    node.set_output_var("out".to_string());
    let mut drop = DropTagExecutor::new(node, qctx);
    assert!(matches!(
        drop.execute().await,
        Err(DBError::Meta(MetaError::TagNotFound(_)))
    ));
}

#[tokio::test]
async fn test_show_tags_sorted() {
    let (meta, qctx) = setup();
    for name in ["team", "player", "coach"] {
        meta.create_tag_schema(SPACE, name, &Schema::default(), false)
            .await
            .expect("create tag");
    }

    let mut node = ShowSchemasNode::new(None);
    node.set_output_var("out".to_string());
    let mut exec = ShowTagsExecutor::new(node, qctx.clone());
    exec.execute().await.expect("show tags");

    let result = qctx.get_result("out").expect("result");
    let ds = result.value().as_dataset().expect("dataset");
    assert_eq!(ds.col_names, vec!["Name"]);
    let names: Vec<_> = ds.rows.iter().map(|r| r[0].clone()).collect();
    assert_eq!(
        names,
        vec![
            Value::from("coach"),
            Value::from("player"),
            Value::from("team")
        ]
    );
}
