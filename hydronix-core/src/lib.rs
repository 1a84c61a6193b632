mod component;
pub mod parameter;

pub use component::Component;
