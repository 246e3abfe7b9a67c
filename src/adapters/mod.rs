// Concrete implementations of the domain ports and the asset upload boundary.

pub mod storage;
pub mod upload;

pub use storage::LocalStorage;
pub use upload::AssetKind;
