
#[path = "support/charges.rs"] mod support_charges;
#[path = "support/taxid.rs"] mod support_taxid;
#[path = "support/config.rs"] mod support_config;
