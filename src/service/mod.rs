pub mod executor;
pub mod strategies;
pub mod transfer_router;

pub use executor::{ArgValue, ExecutionReceipt, OperationCall, TransactionExecutor};
pub use transfer_router::TransferRouter;
