//! Reference helpers: STAN generation, format checks and lookup tables

pub mod format;
pub mod reference;
pub mod stan;

pub use format::{
    format_amount, is_valid_account_number, is_valid_amount, is_valid_date_format,
    is_valid_email, is_valid_mcc_format, is_valid_phone_number, mask_sensitive, parse_date,
    sanitize,
};
pub use reference::{bank_name, is_valid_bank_code, mcc_description, BANK_CODES, MCC_CODES};
pub use stan::{generate_stan, generate_stan_at};
