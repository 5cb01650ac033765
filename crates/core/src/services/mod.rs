pub mod analytics_service;
pub mod blog_service;
pub mod chart_service;
pub mod dataset_service;
pub mod series_service;
