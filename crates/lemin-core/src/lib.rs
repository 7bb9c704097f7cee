//! Lemin Core Types
//!
//! This crate provides the foundational types shared by the lemin parser,
//! the distance labeler, and the report renderer. It includes:
//!
//! - **Spans**: Byte ranges into the source text ([`span::Span`])
//! - **Rooms**: Named, coordinate-tagged graph nodes ([`room::Room`])
//! - **Graph**: The ant-colony graph aggregate and its builder ([`graph`] module)

pub mod graph;
pub mod room;
pub mod span;
