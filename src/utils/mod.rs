pub mod candidate;
pub mod output_name;
