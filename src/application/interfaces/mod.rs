/// REST resource service interface
pub mod resource;
