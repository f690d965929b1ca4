pub mod reporting_depth;
pub mod salary_band;
