//! Tool parameter types exposed over MCP.

pub mod company;

#[cfg(test)]
mod tests;
