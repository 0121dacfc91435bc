pub mod resource_identifier;
pub mod transfer;

pub use transfer::{AssetKind, NetworkDomain, TransferRequest};
