pub mod db;
pub mod errors;
pub mod user;

#[cfg(test)]
mod tests;
