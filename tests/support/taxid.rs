use loan_reports::taxid::{self, TaxIdKind};

#[test]
fn kind_by_digit_count() {
    assert_eq!(taxid::kind("12345678901"), Some(TaxIdKind::Cpf));
    assert_eq!(taxid::kind("123.456.789-01"), Some(TaxIdKind::Cpf));
    assert_eq!(taxid::kind("11.222.333/0001-81"), Some(TaxIdKind::Cnpj));
    assert_eq!(taxid::kind("1234"), None);
    assert!(!taxid::is_valid(""));
    assert_eq!(TaxIdKind::Cnpj.to_string(), "CNPJ");
}

#[test]
fn masks_raw_and_formatted_input_alike() {
    assert_eq!(taxid::mask("12345678901"), "123.456.789-01");
    assert_eq!(taxid::mask("123.456.789-01"), "123.456.789-01");
    assert_eq!(taxid::mask("11222333000181"), "11.222.333/0001-81");
}

#[test]
fn unknown_lengths_pass_through() {
    assert_eq!(taxid::mask("n/a"), "n/a");
    assert_eq!(taxid::mask("123-45"), "123-45");
}
