pub mod candle;

// Re-export for easier access
pub use candle::Candle;
