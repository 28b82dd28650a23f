mod token;
mod video;

pub use token::TokenManager;
pub use video::VideoCacheManager;
