//! Real-time broadcast adapters

pub mod redis_broadcaster;

pub use redis_broadcaster::RedisBroadcaster;
