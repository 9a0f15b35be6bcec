//! 匿名变量生成器
//!
//! 计划节点的默认输出变量名形如 `__<Kind>_<id>`。
//! 解析器不允许用户使用以 `_` 开头的变量名，这类名字只由内部生成。

pub struct AnonVarGenerator;

impl AnonVarGenerator {
    /// 为指定种类和 id 的计划节点生成输出变量名
    pub fn node_var(kind: &str, id: i64) -> String {
        let var = format!("__{}_{}", kind, id);
        log::trace!("Build anon var: {}", var);
        var
    }

    /// 检查变量名是否为匿名变量
    pub fn is_anno_var(var: &str) -> bool {
        var.starts_with('_')
    }
}
