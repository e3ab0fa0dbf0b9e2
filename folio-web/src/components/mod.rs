pub mod album_grid;
pub mod filter_bar;
pub mod nav_arrows;

pub use album_grid::{AlbumCard, AlbumGrid};
pub use filter_bar::FilterBar;
pub use nav_arrows::NavArrows;
