//! Game entities: bird, pipes, ground, and the shared rectangle type.

pub mod bird;
pub mod geometry;
pub mod ground;
pub mod pipe;
pub mod pipe_stream;

pub use bird::Bird;
pub use geometry::Rect;
pub use ground::Ground;
pub use pipe::Pipe;
pub use pipe_stream::PipeStream;
