pub(crate) mod codegen;
pub mod errors;
pub mod metrics;
pub(crate) mod naming;
pub mod orchestrator;
pub mod schema;

#[cfg(test)]
mod tests;
