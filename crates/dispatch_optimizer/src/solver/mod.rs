pub mod allocation_config;
pub mod allocation_result;
pub mod allocation_solver;
