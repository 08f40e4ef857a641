pub mod model_handle;

pub use model_handle::IModelHandle;
