pub mod analytics_service;
pub mod catalog_service;
pub mod color_service;
pub mod dashboard_service;
pub mod sales_service;
