pub mod harvesting_service;
pub mod projection_service;
pub mod selection_service;
