
use crate::{Identity, SharedSecret};

pub(crate) fn alice() -> Identity {
    Identity::parse("alice@example.com").unwrap()
}

pub(crate) fn secret() -> SharedSecret {
    SharedSecret::new("S")
}

pub(crate) fn apps(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
