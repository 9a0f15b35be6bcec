//! 进程内唯一ID分配
//!
//! 计划节点与执行计划各自使用一个计数器，从 1 开始递增，0 保留为无效ID

use std::sync::atomic::{AtomicI64, Ordering};

pub struct IdGenerator {
    counter: AtomicI64,
}

impl IdGenerator {
    pub const fn new(start: i64) -> Self {
        Self {
            counter: AtomicI64::new(start),
        }
    }

    pub fn next_id(&self) -> i64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

static NODE_IDS: IdGenerator = IdGenerator::new(1);
static PLAN_IDS: IdGenerator = IdGenerator::new(1);

pub fn next_node_id() -> i64 {
    NODE_IDS.next_id()
}

pub fn next_plan_id() -> i64 {
    PLAN_IDS.next_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_local_generator() {
        let gen = IdGenerator::new(5);
        assert_eq!(gen.next_id(), 5);
        assert_eq!(gen.next_id(), 6);
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let seen = Arc::new(parking_lot::Mutex::new(HashSet::new()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seen = Arc::clone(&seen);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        assert!(seen.lock().insert(next_plan_id()));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().expect("thread panicked");
        }
        assert_eq!(seen.lock().len(), 400);
    }
}
