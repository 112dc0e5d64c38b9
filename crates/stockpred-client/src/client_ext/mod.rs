pub mod predict;
#[cfg(test)]
pub(crate) mod test_server;

pub use reqwest::Client;
