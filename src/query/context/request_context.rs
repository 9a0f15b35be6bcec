//! 请求上下文
//!
//! 保存发起查询的会话以及查询文本

use crate::storage::metadata::GraphSpaceId;

/// 会话当前使用的图空间
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceInfo {
    pub id: GraphSpaceId,
    pub name: String,
}

impl SpaceInfo {
    pub fn new(id: GraphSpaceId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub session_id: i64,
    pub space: Option<SpaceInfo>,
}

impl Session {
    pub fn new(session_id: i64) -> Self {
        Self {
            session_id,
            space: None,
        }
    }

    /// 执行 `USE <space>` 之后的会话
    pub fn with_space(mut self, space: SpaceInfo) -> Self {
        self.space = Some(space);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    session: Session,
    query: String,
}

impl RequestContext {
    pub fn new(session: Session, query: impl Into<String>) -> Self {
        Self {
            session,
            query: query.into(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
