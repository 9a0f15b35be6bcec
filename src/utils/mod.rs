// 工具模块 - 仅用于导出各个子模块，不包含具体实现

// 对象池模块
pub mod object_pool;
pub use object_pool::{ObjRef, ObjectPool};

// 日志模块
pub mod logging;

// 匿名变量生成器模块
pub mod anon_var_generator;
pub use anon_var_generator::AnonVarGenerator;

// 结果集格式化模块
pub mod index_util;
pub mod schema_util;
pub use index_util::{to_desc_index, to_show_create_index};
pub use schema_util::{to_desc_schema, to_show_create_schema};
