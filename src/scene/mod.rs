pub mod layout;
pub mod mobject;
pub mod play;
pub mod recorder;
pub mod text;
