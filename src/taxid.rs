//! Brazilian taxpayer ids: CPF (individuals, 11 digits) and CNPJ (companies, 14 digits).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    Cpf,
    Cnpj,
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        })
    }
}

/// Strip everything but ASCII digits.
pub fn digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Kind by digit count; `None` for any other length.
///
/// Only the length is checked, check digits are not verified.
pub fn kind(raw: &str) -> Option<TaxIdKind> {
    match digits(raw).len() {
        11 => Some(TaxIdKind::Cpf),
        14 => Some(TaxIdKind::Cnpj),
        _ => None,
    }
}

pub fn is_valid(raw: &str) -> bool {
    kind(raw).is_some()
}

/// `123.456.789-01` / `11.222.333/0001-81`. Unrecognized input is returned unchanged.
pub fn mask(raw: &str) -> String {
    let d = digits(raw);
    match kind(&d) {
        Some(TaxIdKind::Cpf) => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
        Some(TaxIdKind::Cnpj) => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
        None => raw.to_string(),
    }
}
