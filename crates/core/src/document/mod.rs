pub mod defaults;
pub mod id;
pub mod migrate;
pub mod model;
pub mod section;
pub mod validate;
