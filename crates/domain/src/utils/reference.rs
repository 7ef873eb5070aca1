//! Bank and merchant category lookup tables

/// Participating bank codes.
pub const BANK_CODES: &[(&str, &str)] = &[
    ("1010", "Bank of Bhutan"),
    ("1040", "Bhutan National Bank"),
    ("1060", "Digital Kidu"),
    ("1070", "Druk PNB Bank"),
    ("1080", "T Bank"),
];

/// Common merchant category codes.
pub const MCC_CODES: &[(&str, &str)] = &[
    ("5411", "Grocery Stores, Supermarkets"),
    ("5812", "Eating Places, Restaurants"),
    ("5999", "Miscellaneous and Specialty Retail Stores"),
    ("5814", "Fast Food Restaurants"),
    ("5912", "Drug Stores and Pharmacies"),
    ("5311", "Department Stores"),
    ("5541", "Service Stations"),
    ("5732", "Electronics Stores"),
    ("5942", "Book Stores"),
    ("5945", "Hobby, Toy, and Game Shops"),
];

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table.iter().find(|(key, _)| *key == code).map(|(_, name)| *name)
}

pub fn bank_name(code: &str) -> Option<&'static str> {
    lookup(BANK_CODES, code)
}

pub fn is_valid_bank_code(code: &str) -> bool {
    bank_name(code).is_some()
}

pub fn mcc_description(code: &str) -> Option<&'static str> {
    lookup(MCC_CODES, code)
}
