pub mod auth_routes;
pub mod post_routes;
pub mod profile_routes;
