pub mod orientation;
pub mod renderer;

pub use orientation::{Corner, Sprite, body_sprites, segment_sprite};
pub use renderer::Renderer;
