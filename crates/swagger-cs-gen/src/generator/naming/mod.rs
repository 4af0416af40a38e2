pub mod identifiers;
pub(crate) mod reserved;

#[cfg(test)]
mod tests;
