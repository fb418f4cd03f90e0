pub mod policy;
pub mod processor;

pub use policy::{InputPolicy, OutputPolicy};
pub use processor::{AsyncProcessor, Processor};
