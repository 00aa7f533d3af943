pub mod cost_matrix;
pub mod location;
pub mod transportation_problem;
