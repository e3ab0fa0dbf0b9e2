pub mod audio;
pub mod content;
pub mod home;
pub mod music;
pub mod software;

pub use audio::AudioPage;
pub use content::ContentPage;
pub use home::HomePage;
pub use music::MusicPage;
pub use software::SoftwarePage;
