//! 对象池（arena）
//!
//! 查询生命周期内创建的对象统一交给对象池持有，对象之间只通过
//! `ObjRef` 句柄相互引用。句柄只在所属对象池存活期间有效，
//! 释放对象池即一次性释放其中的全部对象。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 对象池中对象的句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjRef(usize);

impl ObjRef {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 只追加的对象池
#[derive(Debug, Clone)]
pub struct ObjectPool<T> {
    objects: Vec<T>,
}

impl<T> ObjectPool<T> {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// 放入对象并返回句柄
    pub fn add(&mut self, obj: T) -> ObjRef {
        self.objects.push(obj);
        ObjRef(self.objects.len() - 1)
    }

    pub fn get(&self, r: ObjRef) -> Option<&T> {
        self.objects.get(r.0)
    }

    pub fn get_mut(&mut self, r: ObjRef) -> Option<&mut T> {
        self.objects.get_mut(r.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl<T> Default for ObjectPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_stable() {
        let mut pool = ObjectPool::new();
        let a = pool.add("a".to_string());
        let b = pool.add("b".to_string());
        assert_ne!(a, b);
        assert_eq!(pool.get(a).map(String::as_str), Some("a"));
        assert_eq!(pool.get(b).map(String::as_str), Some("b"));
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_get_mut() {
        let mut pool = ObjectPool::new();
        let r = pool.add(1);
        if let Some(v) = pool.get_mut(r) {
            *v = 5;
        }
        assert_eq!(pool.get(r), Some(&5));
        assert_eq!(pool.get(ObjRef(9)), None);
    }
}
