mod generation;
mod upload;

pub use generation::GenerationController;
pub use upload::UploadController;
