pub mod pinning;

pub use pinning::PinningClient;
