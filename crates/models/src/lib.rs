pub mod db;
pub mod service_provider;

#[cfg(test)]
mod tests;
