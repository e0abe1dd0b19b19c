pub mod llm;
pub mod not_found;
pub mod post_detail;
pub mod post_form;
pub mod posts;

pub use posts::PostsPage;
