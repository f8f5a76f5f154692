//! 内置拓扑

pub mod diamond;
pub mod mesh6;
