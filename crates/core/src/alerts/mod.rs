pub mod engine;
pub mod notify;

pub use engine::AlertEngine;
pub use notify::{AlertSink, NullSink, Tone, ToneCue};
