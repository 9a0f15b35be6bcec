//! 多分片存储 RPC 响应
//!
//! 一次逻辑请求会扇出到多个分片，各分片独立成功或失败。
//! 本结构保存各分片的响应以及失败分片的错误码。

use super::error_code::{PartitionId, StorageErrorCode};

/// 存储 RPC 聚合响应
///
/// `failed_parts` 按失败到达的顺序保存，同一分片重复失败时就地覆盖错误码
#[derive(Debug, Clone)]
pub struct StorageRpcResponse<Resp> {
    total_parts: usize,
    failed_parts: Vec<(PartitionId, StorageErrorCode)>,
    responses: Vec<Resp>,
}

impl<Resp> StorageRpcResponse<Resp> {
    pub fn new(total_parts: usize) -> Self {
        Self {
            total_parts,
            failed_parts: Vec::new(),
            responses: Vec::new(),
        }
    }

    /// 记录分片失败
    pub fn mark_failure(&mut self, part_id: PartitionId, code: StorageErrorCode) {
        match self.failed_parts.iter_mut().find(|(id, _)| *id == part_id) {
            Some(entry) => entry.1 = code,
            None => self.failed_parts.push((part_id, code)),
        }
    }

    /// 记录一个成功的子响应
    pub fn add_response(&mut self, resp: Resp) {
        self.responses.push(resp);
    }

    /// 成功分片占比（0..=100）
    ///
    /// 没有任何分片的请求视为完全失败
    pub fn completeness(&self) -> i32 {
        if self.total_parts == 0 {
            return 0;
        }
        let failed = self.failed_parts.len().min(self.total_parts);
        ((self.total_parts - failed) * 100 / self.total_parts) as i32
    }

    pub fn succeeded(&self) -> bool {
        self.completeness() == 100
    }

    pub fn failed_parts(&self) -> &[(PartitionId, StorageErrorCode)] {
        &self.failed_parts
    }

    pub fn responses(&self) -> &[Resp] {
        &self.responses
    }

    pub fn into_responses(self) -> Vec<Resp> {
        self.responses
    }

    pub fn total_parts(&self) -> usize {
        self.total_parts
    }
}
