pub mod allocation;
pub mod pool;
