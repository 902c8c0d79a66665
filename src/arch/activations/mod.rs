mod sigmoid;

pub use sigmoid::Sigmoid;
