pub mod scoring;
pub mod sentiment;
pub mod suggest;
pub mod transitions;
