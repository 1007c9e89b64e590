pub mod batch;
pub mod cost_table;
pub mod edit_distance;
pub mod edit_path;

// Re-export the edit distance family with descriptive names
pub use batch::{closest_match, pairwise_distances};
pub use cost_table::CostTable;
pub use edit_distance::{
    distance, levenshtein_distance, normalized_similarity, optimized_distance, rolling_distance,
    str_distance, str_optimized_distance,
};
pub use edit_path::{apply_edit_path, edit_cost, edit_path, str_edit_path, Operation};
