pub mod array_object;
pub mod error;
pub mod execution_context;
pub mod function_object;
pub mod object;
pub mod operations;
pub mod realm;
pub mod scope;
pub mod undefined;
pub mod value;
