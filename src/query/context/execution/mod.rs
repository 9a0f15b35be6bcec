pub mod execution_context;

pub use execution_context::ExecutionContext;
