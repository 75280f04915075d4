mod throttle;

pub use throttle::Throttle;
