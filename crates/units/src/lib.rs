pub mod temperature;

#[cfg(test)]
mod temperature_test;

pub use temperature::Temperature;
