pub(crate) mod ast;
pub(crate) mod codegen;
pub(crate) mod document;
pub(crate) mod operation_converter;
pub(crate) mod operation_registry;
pub mod orchestrator;

#[cfg(test)]
mod tests;
