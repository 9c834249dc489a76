pub mod domain;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub mod testing;
