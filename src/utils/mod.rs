pub mod address_validator;
pub mod amount;
pub mod call_data;

// Re-export commonly used functions
pub use address_validator::{is_evm_address, is_flow_address};
pub use amount::{safe_to_fixed_point_string, scale_to_integer_units, to_fixed_point_string};
pub use call_data::encode_contract_call_data;
