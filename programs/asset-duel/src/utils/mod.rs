pub mod math;
pub mod oracle;
pub mod token;

#[cfg(test)]
pub mod testing;
