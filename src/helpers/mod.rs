pub mod post_helpers;
pub mod thing_helpers;
